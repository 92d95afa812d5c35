use std::cell::Cell;

use gigo_future::platform::mock::{MockPlatform, PinEvent};
use gigo_future::platform::{
    AdcInterface, GpioInterface, PlatformError, PwmInterface, Result, TimerInterface,
};
use gigo_future::{AnalogPin, Direction, GigoFuture, GigoMotor, GigoPin, Level, PinDigital};

/// Host that only records which pins it touched, in call order.
#[derive(Default)]
struct TraceHost {
    writes: Vec<(AnalogPin, u16)>,
    slept_ms: u32,
    map_calls: Cell<usize>,
}

impl GpioInterface for TraceHost {
    fn digital_write_pin(&mut self, pin: AnalogPin, level: Level) -> Result<()> {
        self.writes.push((pin, level as u16));
        Ok(())
    }
}

impl PwmInterface for TraceHost {
    fn analog_write_pin(&mut self, pin: AnalogPin, duty: u16) -> Result<()> {
        self.writes.push((pin, duty));
        Ok(())
    }

    fn servo_write_pin(&mut self, pin: AnalogPin, angle: u8) -> Result<()> {
        self.writes.push((pin, u16::from(angle)));
        Ok(())
    }

    // Host native mapping rounds to the nearest step instead of truncating
    fn map(&self, value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
        self.map_calls.set(self.map_calls.get() + 1);
        let span = (from_high - from_low) as f32;
        let t = (value - from_low) as f32 / span;
        (to_low as f32 + t * (to_high - to_low) as f32 + 0.5) as i32
    }
}

impl AdcInterface for TraceHost {
    fn analog_read_pin(&mut self, _pin: AnalogPin) -> Result<u16> {
        Ok(512)
    }
}

impl TimerInterface for TraceHost {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.slept_ms += ms;
        Ok(())
    }

    fn now_us(&self) -> u64 {
        u64::from(self.slept_ms) * 1000
    }
}

#[test]
fn test_every_motor_connector_drives_its_pair() {
    let expected = [
        (GigoMotor::E, AnalogPin::P15, AnalogPin::P16),
        (GigoMotor::F, AnalogPin::P13, AnalogPin::P14),
        (GigoMotor::G, AnalogPin::P12, AnalogPin::P2),
        (GigoMotor::H, AnalogPin::P1, AnalogPin::P8),
    ];

    for (motor, control, data) in expected {
        let mut blocks = GigoFuture::new(MockPlatform::new());
        blocks.set_motor_speed(motor, Direction::Left, 255).unwrap();

        assert_eq!(
            blocks.platform().events(),
            &[
                PinEvent::Analog {
                    pin: control,
                    duty: 0
                },
                PinEvent::Analog {
                    pin: data,
                    duty: 1023
                },
            ],
            "motor {}",
            motor
        );
    }
}

#[test]
fn test_host_mapping_override_is_used() {
    let mut blocks = GigoFuture::new(TraceHost::default());
    blocks
        .set_motor_speed(GigoMotor::F, Direction::Right, 128)
        .unwrap();

    // Truncating map gives 513, the host's rounding map gives 514
    assert_eq!(
        blocks.platform().writes,
        vec![(AnalogPin::P13, 1023), (AnalogPin::P14, 514)]
    );
    // One call for direction, one for speed
    assert_eq!(blocks.platform().map_calls.get(), 2);
}

#[test]
fn test_led_table_through_custom_host() {
    let mut blocks = GigoFuture::new(TraceHost::default());
    for pin in GigoPin::ALL {
        blocks.digital_write(pin, true).unwrap();
    }

    let pins: Vec<AnalogPin> = blocks
        .platform()
        .writes
        .iter()
        .map(|(pin, _)| *pin)
        .collect();
    assert_eq!(
        pins,
        vec![
            AnalogPin::P19,
            AnalogPin::P14,
            AnalogPin::P2,
            AnalogPin::P8,
            AnalogPin::P15,
            AnalogPin::P13,
            AnalogPin::P12,
            AnalogPin::P1,
        ]
    );
    assert!(blocks.platform().writes.iter().all(|(_, level)| *level == 1));
}

#[test]
fn test_program_sequence() {
    let mut blocks = GigoFuture::new(MockPlatform::new());
    blocks.platform_mut().set_analog_input(AnalogPin::P2, 800);

    if blocks.analog_read_index(2).unwrap() > 500 {
        blocks.set_motor(GigoMotor::G, Direction::Right).unwrap();
        blocks.wait(1.5).unwrap();
        blocks.stop_motor(GigoMotor::G).unwrap();
    }
    blocks.write_angle_servo(PinDigital::P8, 45).unwrap();

    let platform = blocks.into_inner();
    assert_eq!(platform.events().len(), 7);
    assert_eq!(platform.events()[0], PinEvent::Read { pin: AnalogPin::P2 });
    assert_eq!(platform.events()[3], PinEvent::Delay { ms: 1500 });
    assert_eq!(
        platform.last_event(),
        Some(&PinEvent::Servo {
            pin: AnalogPin::P8,
            angle: 45
        })
    );
    assert_eq!(platform.now_ms(), 1500);
}

#[test]
fn test_set_motor_writes_full_scale_on_every_motor() {
    for motor in [GigoMotor::E, GigoMotor::F, GigoMotor::G, GigoMotor::H] {
        let mut blocks = GigoFuture::new(MockPlatform::new());
        blocks.set_motor(motor, Direction::Right).unwrap();

        let duties: Vec<u16> = blocks
            .platform()
            .events()
            .iter()
            .map(|event| match event {
                PinEvent::Analog { duty, .. } => *duty,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(duties, vec![1023, 1023], "motor {}", motor);
    }
}

#[test]
fn test_direction_failure_skips_speed_write() {
    let mut blocks = GigoFuture::new(MockPlatform::new());
    blocks
        .platform_mut()
        .fail_next(PlatformError::ResourceUnavailable);

    assert_eq!(
        blocks.set_motor_speed(GigoMotor::H, Direction::Right, 200),
        Err(PlatformError::ResourceUnavailable)
    );
    assert!(blocks.platform().events().is_empty());
}
