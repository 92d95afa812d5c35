use crate::board::{
    control_pin, is_motor_capable, resolve_control_pin, AnalogPin, GigoPin, Level, PinAnalog,
    PinDigital,
};
use crate::libraries::motor_driver::{DdmMotor, Direction, DEFAULT_SPEED};
use crate::platform::{Platform, Result};

/// GIGO block namespace bound to a host platform
///
/// Holds no pin state: every block is a table lookup followed by host calls.
///
/// # Type Parameters
///
/// * `P` - Host platform providing the pin primitives
pub struct GigoFuture<P: Platform> {
    platform: P,
}

impl<P: Platform> GigoFuture<P> {
    pub fn new(platform: P) -> Self {
        crate::log_info!("GIGO blocks ready");
        Self { platform }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Release the host platform
    pub fn into_inner(self) -> P {
        self.platform
    }

    /// Wait for `interval` seconds
    ///
    /// Blocks the calling handler; fractions of a millisecond are truncated.
    /// Negative and NaN intervals wait 0 ms.
    pub fn wait(&mut self, interval: f64) -> Result<()> {
        // Float to int casts saturate, NaN becomes 0
        let ms = (interval * 1000.0) as u32;
        crate::log_trace!("wait {} ms", ms);
        self.platform.delay_ms(ms)
    }

    /// Switch the LED on a connector on or off
    ///
    /// Only the control table is consulted, so any connector with a control
    /// line works, A included.
    pub fn digital_write(&mut self, pin: impl Into<GigoPin>, on: bool) -> Result<()> {
        let pin = pin.into();
        match control_pin(pin) {
            Some(control) => self.write_level(control, on),
            None => {
                crate::log_trace!("LED {:?}: no control line, skipped", pin);
                Ok(())
            }
        }
    }

    /// `digital_write` for a raw connector ordinal (0 = A ... 7 = H)
    ///
    /// Unknown ordinals are skipped silently.
    pub fn digital_write_index(&mut self, index: u8, on: bool) -> Result<()> {
        match resolve_control_pin(index) {
            Some(control) => self.write_level(control, on),
            None => {
                crate::log_trace!("LED #{}: unmapped, skipped", index);
                Ok(())
            }
        }
    }

    fn write_level(&mut self, pin: AnalogPin, on: bool) -> Result<()> {
        let level = Level::from(on);
        crate::log_debug!("LED {:?} -> {:?}", pin, level);
        self.platform.digital_write_pin(pin, level)
    }

    /// Run a DDM motor in `dir` at full speed
    pub fn set_motor(&mut self, pin: impl Into<GigoPin>, dir: Direction) -> Result<()> {
        self.set_motor_speed(pin, dir, DEFAULT_SPEED)
    }

    /// Run a DDM motor in `dir` at `speed` (0-255)
    ///
    /// Connectors that are not motor capable (A-D) are skipped silently.
    pub fn set_motor_speed(
        &mut self,
        pin: impl Into<GigoPin>,
        dir: Direction,
        speed: u8,
    ) -> Result<()> {
        let pin = pin.into();
        let Some(motor) = self.motor(pin) else {
            return Ok(());
        };
        crate::log_debug!("motor {:?} dir={:?} speed={}", pin, dir, speed);
        motor.drive(&mut self.platform, dir, speed)
    }

    /// Stop a DDM motor
    ///
    /// Same writes as `set_motor_speed(pin, Direction::Right, 0)`.
    pub fn stop_motor(&mut self, pin: impl Into<GigoPin>) -> Result<()> {
        let pin = pin.into();
        let Some(motor) = self.motor(pin) else {
            return Ok(());
        };
        crate::log_debug!("motor {:?} stop", pin);
        motor.stop(&mut self.platform)
    }

    fn motor(&self, pin: GigoPin) -> Option<DdmMotor> {
        if !is_motor_capable(pin) {
            crate::log_trace!("motor {:?}: not motor capable, skipped", pin);
            return None;
        }
        DdmMotor::for_pin(pin)
    }

    /// Turn an angle servo on a host connector to `angle` degrees
    ///
    /// The angle is passed to the host unchanged.
    pub fn write_angle_servo(&mut self, pin: PinDigital, angle: u8) -> Result<()> {
        crate::log_debug!("servo {:?} -> {}", pin, angle);
        self.platform.servo_write_pin(pin.pin(), angle)
    }

    /// Read an analog sensor on a host connector
    pub fn analog_read(&mut self, pin: PinAnalog) -> Result<u16> {
        let value = self.platform.analog_read_pin(pin.pin())?;
        crate::log_trace!("sensor {:?} = {}", pin, value);
        Ok(value)
    }

    /// `analog_read` for a raw connector number
    ///
    /// Returns 0 without touching the host for any number other than 1 or 2.
    pub fn analog_read_index(&mut self, number: u8) -> Result<u16> {
        match PinAnalog::try_from(number) {
            Ok(pin) => self.analog_read(pin),
            Err(_) => {
                crate::log_trace!("sensor #{}: unknown connector, reading 0", number);
                Ok(0)
            }
        }
    }
}
