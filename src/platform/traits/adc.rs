//! ADC interface trait

use crate::board::AnalogPin;
use crate::platform::Result;

/// Largest value returned by `analog_read_pin` (10-bit converter)
pub const ADC_MAX: u16 = 1023;

/// Analog input interface trait
pub trait AdcInterface {
    /// Sample the voltage on a pin
    ///
    /// Returns a value in range [0, `ADC_MAX`].
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::InvalidPin)` if the pin has no
    /// analog input.
    fn analog_read_pin(&mut self, pin: AnalogPin) -> Result<u16>;
}
