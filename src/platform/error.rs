//! Platform error types
//!
//! This module defines error types for host pin operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// Host implementations map their runtime-specific failures to these variants.
/// The block operations never translate them; they reach the caller unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// Digital output failed
    Gpio(GpioError),
    /// PWM or servo output failed
    Pwm(PwmError),
    /// Analog input failed
    Adc(AdcError),
    /// Delay failed
    Timer(TimerError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin cannot be driven as a digital output
    InvalidPin,
    /// Pin is configured for another function
    InvalidMode,
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Duty value outside 0..=1023
    InvalidDutyCycle,
    /// Servo angle outside 0..=180
    InvalidAngle,
    /// No PWM channel left for this pin
    ChannelUnavailable,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Pin has no analog input
    InvalidPin,
    /// Conversion did not complete
    ConversionFailed,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", PlatformError::Pwm(PwmError::InvalidDutyCycle)),
            "PWM error: InvalidDutyCycle"
        );
        assert_eq!(
            format!("{}", PlatformError::Adc(AdcError::InvalidPin)),
            "ADC error: InvalidPin"
        );
        assert_eq!(
            format!("{}", PlatformError::ResourceUnavailable),
            "Resource not available"
        );
    }
}
