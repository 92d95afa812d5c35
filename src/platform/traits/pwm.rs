//! PWM interface trait
//!
//! This module defines the PWM and servo output interface that host implementations must provide.

use crate::board::AnalogPin;
use crate::libraries::mapping::map_range;
use crate::platform::Result;

/// Largest duty value accepted by `analog_write_pin`
pub const PWM_DUTY_MAX: u16 = 1023;

/// Largest angle accepted by `servo_write_pin`
pub const SERVO_ANGLE_MAX: u8 = 180;

/// PWM interface trait
///
/// # Safety Invariants
///
/// - Duty values are in range [0, `PWM_DUTY_MAX`]
/// - Servo angles are in range [0, `SERVO_ANGLE_MAX`] degrees
/// - A pin written with `servo_write_pin` runs at servo frequency (50 Hz)
///   until it is written with `analog_write_pin` again
pub trait PwmInterface {
    /// Set the PWM duty of a pin
    ///
    /// # Arguments
    ///
    /// * `pin` - Host pin to drive
    /// * `duty` - Duty value (0 = always low, 1023 = always high)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::InvalidDutyCycle)` if the duty
    /// is outside the valid range.
    fn analog_write_pin(&mut self, pin: AnalogPin, duty: u16) -> Result<()>;

    /// Set the angle of a servo attached to a pin
    ///
    /// # Arguments
    ///
    /// * `pin` - Host pin carrying the servo signal
    /// * `angle` - Servo angle in degrees
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the pin cannot generate servo pulses.
    fn servo_write_pin(&mut self, pin: AnalogPin, angle: u8) -> Result<()>;

    /// Re-map a value from one range to another
    ///
    /// Hosts with a native mapping primitive may override this; the default
    /// uses [`map_range`].
    #[inline]
    fn map(&self, value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
        map_range(value, from_low, from_high, to_low, to_high)
    }
}
