//! Directly named host connectors
//!
//! Servo and sensor blocks address the host's own edge connector pins rather
//! than GIGO labels, but only a fixed handful of them.

use super::pins::AnalogPin;
use super::PinError;

/// Connectors accepted by the angle servo block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDigital {
    P1,
    P2,
    P8,
    P12,
    P13,
    P14,
    P15,
    P16,
}

impl PinDigital {
    pub const ALL: [PinDigital; 8] = [
        PinDigital::P1,
        PinDigital::P2,
        PinDigital::P8,
        PinDigital::P12,
        PinDigital::P13,
        PinDigital::P14,
        PinDigital::P15,
        PinDigital::P16,
    ];

    /// Host pin driven for this connector
    pub const fn pin(self) -> AnalogPin {
        match self {
            PinDigital::P1 => AnalogPin::P1,
            PinDigital::P2 => AnalogPin::P2,
            PinDigital::P8 => AnalogPin::P8,
            PinDigital::P12 => AnalogPin::P12,
            PinDigital::P13 => AnalogPin::P13,
            PinDigital::P14 => AnalogPin::P14,
            PinDigital::P15 => AnalogPin::P15,
            PinDigital::P16 => AnalogPin::P16,
        }
    }
}

impl From<PinDigital> for AnalogPin {
    fn from(connector: PinDigital) -> Self {
        connector.pin()
    }
}

impl TryFrom<u8> for PinDigital {
    type Error = PinError;

    /// Looks a connector up by its edge connector number (1, 2, 8, 12-16).
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        PinDigital::ALL
            .iter()
            .copied()
            .find(|connector| connector.pin().number() == number)
            .ok_or(PinError::UnknownPin(number))
    }
}

/// Connectors accepted by the analog sensor block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinAnalog {
    P1,
    P2,
}

impl PinAnalog {
    /// Host pin sampled for this connector
    pub const fn pin(self) -> AnalogPin {
        match self {
            PinAnalog::P1 => AnalogPin::P1,
            PinAnalog::P2 => AnalogPin::P2,
        }
    }
}

impl From<PinAnalog> for AnalogPin {
    fn from(connector: PinAnalog) -> Self {
        connector.pin()
    }
}

impl TryFrom<u8> for PinAnalog {
    type Error = PinError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(PinAnalog::P1),
            2 => Ok(PinAnalog::P2),
            other => Err(PinError::UnknownPin(other)),
        }
    }
}
