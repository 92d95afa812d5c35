//! Mock Platform implementation for testing

use heapless::Vec;

use crate::board::{AnalogPin, Level};
use crate::platform::{
    error::{AdcError, PlatformError, PwmError},
    traits::{
        AdcInterface, GpioInterface, PwmInterface, TimerInterface, PWM_DUTY_MAX, SERVO_ANGLE_MAX,
    },
    Result,
};

use super::MockTimer;

/// Maximum number of host calls recorded before writes start failing
pub const MAX_EVENTS: usize = 64;

/// One recorded host primitive call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// `digital_write_pin`
    Digital { pin: AnalogPin, level: Level },
    /// `analog_write_pin`
    Analog { pin: AnalogPin, duty: u16 },
    /// `servo_write_pin`
    Servo { pin: AnalogPin, angle: u8 },
    /// `analog_read_pin`
    Read { pin: AnalogPin },
    /// `delay_ms`
    Delay { ms: u32 },
}

/// Mock Platform implementation
///
/// Records every host call in order so tests can assert on the exact
/// pin/value pairs a block produced.
///
/// # Example
///
/// ```
/// use gigo_future::platform::mock::{MockPlatform, PinEvent};
/// use gigo_future::{AnalogPin, GigoFuture, GigoPin};
///
/// let mut blocks = GigoFuture::new(MockPlatform::new());
/// blocks.digital_write(GigoPin::B, true).unwrap();
/// assert_eq!(
///     blocks.platform().events(),
///     &[PinEvent::Digital { pin: AnalogPin::P14, level: gigo_future::Level::High }]
/// );
/// ```
#[derive(Debug)]
pub struct MockPlatform {
    timer: MockTimer,
    events: Vec<PinEvent, MAX_EVENTS>,
    analog_inputs: [u16; Self::PIN_SLOTS],
    fail_next: Option<PlatformError>,
}

impl MockPlatform {
    /// One input slot per edge connector number (0..=20)
    const PIN_SLOTS: usize = 21;

    /// Create a new mock platform with all analog inputs at 0
    pub fn new() -> Self {
        Self {
            timer: MockTimer::new(),
            events: Vec::new(),
            analog_inputs: [0; Self::PIN_SLOTS],
            fail_next: None,
        }
    }

    /// Recorded host calls, oldest first
    pub fn events(&self) -> &[PinEvent] {
        &self.events
    }

    /// Most recent host call
    pub fn last_event(&self) -> Option<&PinEvent> {
        self.events.last()
    }

    /// Forget recorded host calls
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Set the value returned by `analog_read_pin` for a pin
    pub fn set_analog_input(&mut self, pin: AnalogPin, value: u16) {
        self.analog_inputs[pin.number() as usize] = value;
    }

    /// Make the next host call fail with `error` instead of running
    pub fn fail_next(&mut self, error: PlatformError) {
        self.fail_next = Some(error);
    }

    pub fn timer(&self) -> &MockTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut MockTimer {
        &mut self.timer
    }

    /// Pins wired to the host ADC
    fn has_adc(pin: AnalogPin) -> bool {
        matches!(
            pin,
            AnalogPin::P0
                | AnalogPin::P1
                | AnalogPin::P2
                | AnalogPin::P3
                | AnalogPin::P4
                | AnalogPin::P10
        )
    }

    fn record(&mut self, event: PinEvent) -> Result<()> {
        if let Some(error) = self.fail_next.take() {
            return Err(error);
        }
        self.events
            .push(event)
            .map_err(|_| PlatformError::ResourceUnavailable)
    }
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioInterface for MockPlatform {
    fn digital_write_pin(&mut self, pin: AnalogPin, level: Level) -> Result<()> {
        self.record(PinEvent::Digital { pin, level })
    }
}

impl PwmInterface for MockPlatform {
    fn analog_write_pin(&mut self, pin: AnalogPin, duty: u16) -> Result<()> {
        if duty > PWM_DUTY_MAX {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.record(PinEvent::Analog { pin, duty })
    }

    fn servo_write_pin(&mut self, pin: AnalogPin, angle: u8) -> Result<()> {
        if angle > SERVO_ANGLE_MAX {
            return Err(PlatformError::Pwm(PwmError::InvalidAngle));
        }
        self.record(PinEvent::Servo { pin, angle })
    }
}

impl AdcInterface for MockPlatform {
    fn analog_read_pin(&mut self, pin: AnalogPin) -> Result<u16> {
        if !Self::has_adc(pin) {
            return Err(PlatformError::Adc(AdcError::InvalidPin));
        }
        self.record(PinEvent::Read { pin })?;
        Ok(self.analog_inputs[pin.number() as usize])
    }
}

impl TimerInterface for MockPlatform {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.record(PinEvent::Delay { ms })?;
        self.timer.delay_ms(ms)
    }

    fn now_us(&self) -> u64 {
        self.timer.now_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::GpioError;

    #[test]
    fn test_records_in_order() {
        let mut platform = MockPlatform::new();
        platform.digital_write_pin(AnalogPin::P8, Level::High).unwrap();
        platform.analog_write_pin(AnalogPin::P15, 512).unwrap();
        platform.servo_write_pin(AnalogPin::P1, 90).unwrap();

        assert_eq!(
            platform.events(),
            &[
                PinEvent::Digital {
                    pin: AnalogPin::P8,
                    level: Level::High
                },
                PinEvent::Analog {
                    pin: AnalogPin::P15,
                    duty: 512
                },
                PinEvent::Servo {
                    pin: AnalogPin::P1,
                    angle: 90
                },
            ]
        );

        platform.clear_events();
        assert!(platform.events().is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut platform = MockPlatform::new();
        assert_eq!(
            platform.analog_write_pin(AnalogPin::P2, 1024),
            Err(PlatformError::Pwm(PwmError::InvalidDutyCycle))
        );
        assert_eq!(
            platform.servo_write_pin(AnalogPin::P2, 181),
            Err(PlatformError::Pwm(PwmError::InvalidAngle))
        );
        assert!(platform.events().is_empty());
    }

    #[test]
    fn test_analog_input() {
        let mut platform = MockPlatform::new();
        platform.set_analog_input(AnalogPin::P1, 700);

        assert_eq!(platform.analog_read_pin(AnalogPin::P1), Ok(700));
        assert_eq!(platform.analog_read_pin(AnalogPin::P2), Ok(0));
        assert_eq!(
            platform.analog_read_pin(AnalogPin::P14),
            Err(PlatformError::Adc(AdcError::InvalidPin))
        );
        assert_eq!(
            platform.last_event(),
            Some(&PinEvent::Read { pin: AnalogPin::P2 })
        );
    }

    #[test]
    fn test_fail_next_is_one_shot() {
        let mut platform = MockPlatform::new();
        platform.fail_next(PlatformError::Gpio(GpioError::InvalidPin));

        assert_eq!(
            platform.digital_write_pin(AnalogPin::P0, Level::Low),
            Err(PlatformError::Gpio(GpioError::InvalidPin))
        );
        assert!(platform.digital_write_pin(AnalogPin::P0, Level::Low).is_ok());
        assert_eq!(platform.events().len(), 1);
    }

    #[test]
    fn test_delay_advances_time() {
        let mut platform = MockPlatform::new();
        platform.delay_ms(250).unwrap();

        assert_eq!(platform.now_ms(), 250);
        assert_eq!(platform.last_event(), Some(&PinEvent::Delay { ms: 250 }));
    }

    #[test]
    fn test_event_log_full() {
        let mut platform = MockPlatform::new();
        for _ in 0..MAX_EVENTS {
            platform.delay_ms(0).unwrap();
        }
        assert_eq!(
            platform.delay_ms(0),
            Err(PlatformError::ResourceUnavailable)
        );
    }
}
