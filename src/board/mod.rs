//! Board pin identifiers
//!
//! Maps the GIGO connector labels and the directly named host connectors to
//! the host's physical pins so that block code never deals in pin numbers.

pub mod connector;
pub mod gigo;
pub mod pins;

pub use connector::{PinAnalog, PinDigital};
pub use gigo::{
    control_pin, data_pin, is_motor_capable, is_motor_capable_index, resolve_control_pin,
    resolve_data_pin, GigoLed, GigoMotor, GigoPin, GigoSensor, GIGO_PIN_COUNT,
};
pub use pins::{AnalogPin, Level};

/// Pin identifier conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Raw number names no connector
    UnknownPin(u8),
    /// Connector exists but lacks the wiring the caller asked for
    UnsupportedPin(GigoPin),
}

impl core::fmt::Display for PinError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PinError::UnknownPin(n) => write!(f, "unknown pin {}", n),
            PinError::UnsupportedPin(pin) => write!(f, "connector {} not supported here", pin),
        }
    }
}
