//! GIGO DDM motor driver
//!
//! A DDM motor module takes two PWM lines from its GIGO connector:
//!
//! | Line    | Signal                                        |
//! |---------|-----------------------------------------------|
//! | control | Rotational direction (0 = Left, max = Right)  |
//! | data    | Angular speed (duty proportional to speed)    |
//!
//! Direction is written first, then speed. At speed 0 the module still
//! latches the direction line, and some modules brake differently per
//! direction, so `stop` always writes Right.

use super::{Direction, SPEED_MAX};
use crate::board::{control_pin, data_pin, is_motor_capable, AnalogPin, GigoPin};
use crate::platform::traits::PWM_DUTY_MAX;
use crate::platform::{PwmInterface, Result};

/// Two-line DDM motor bound to a pair of host pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdmMotor {
    control: AnalogPin,
    data: AnalogPin,
}

impl DdmMotor {
    /// Create a motor on explicit host pins
    ///
    /// # Arguments
    ///
    /// * `control` - Direction line
    /// * `data` - Speed line
    pub fn new(control: AnalogPin, data: AnalogPin) -> Self {
        Self { control, data }
    }

    /// Create the motor wired to a GIGO connector
    ///
    /// Returns `None` unless the connector is motor capable (E, F, G, H).
    pub fn for_pin(pin: impl Into<GigoPin>) -> Option<Self> {
        let pin = pin.into();
        if !is_motor_capable(pin) {
            return None;
        }
        Some(Self::new(control_pin(pin)?, data_pin(pin)?))
    }

    pub fn control(&self) -> AnalogPin {
        self.control
    }

    pub fn data(&self) -> AnalogPin {
        self.data
    }

    /// Drive the motor in `dir` at `speed` (0-255)
    ///
    /// # Errors
    ///
    /// Host write failures are returned unchanged. If the direction write
    /// fails the speed line is left untouched.
    #[inline]
    pub fn drive<P>(&self, pwm: &mut P, dir: Direction, speed: u8) -> Result<()>
    where
        P: PwmInterface + ?Sized,
    {
        let max = i32::from(PWM_DUTY_MAX);

        let direction = pwm.map(
            dir as i32,
            Direction::Left as i32,
            Direction::Right as i32,
            0,
            max,
        );
        pwm.analog_write_pin(self.control, Self::duty(direction))?;

        let duty = pwm.map(i32::from(speed), 0, i32::from(SPEED_MAX), 0, max);
        pwm.analog_write_pin(self.data, Self::duty(duty))?;

        crate::log_trace!(
            "DDM {:?}/{:?} dir={:?} speed={}",
            self.control,
            self.data,
            dir,
            speed
        );
        Ok(())
    }

    /// Stop the motor: speed 0 with the direction line held at Right
    #[inline]
    pub fn stop<P>(&self, pwm: &mut P) -> Result<()>
    where
        P: PwmInterface + ?Sized,
    {
        self.drive(pwm, Direction::Right, 0)
    }

    fn duty(mapped: i32) -> u16 {
        mapped.clamp(0, i32::from(u16::MAX)) as u16
    }
}
