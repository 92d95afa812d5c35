//! GPIO interface trait
//!
//! This module defines the digital output interface that host implementations must provide.

use crate::board::{AnalogPin, Level};
use crate::platform::Result;

/// GPIO interface trait
///
/// Pins are addressed by their edge connector identifier; the host owns
/// pin configuration and switches a pin to digital output on first write.
pub trait GpioInterface {
    /// Drive a pin to a digital level
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the host cannot drive the pin.
    fn digital_write_pin(&mut self, pin: AnalogPin, level: Level) -> Result<()>;
}
