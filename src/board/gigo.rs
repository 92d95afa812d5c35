//! GIGO connector labels and their wiring to the host board
//!
//! The GIGO expansion board exposes eight connectors labelled A-H. Each one
//! carries a control line (LED on/off, motor direction) and the motor-capable
//! ones also carry a data line (motor speed). The tables below are the board
//! wiring and must not be reordered.
//!
//! | GIGO | control | data |
//! |------|---------|------|
//! | A    | P19     | P20  |
//! | B    | P14     | -    |
//! | C    | P2      | -    |
//! | D    | P8      | -    |
//! | E    | P15     | P16  |
//! | F    | P13     | P14  |
//! | G    | P12     | P2   |
//! | H    | P1      | P8   |
//!
//! Connector A has a data line but is not wired to the motor driver logic, so
//! it is not motor capable.

use super::pins::AnalogPin;
use super::PinError;

/// Number of GIGO connectors
pub const GIGO_PIN_COUNT: usize = 8;

/// Control line per connector, indexed by `GigoPin` ordinal
const CONTROL_PINS: [Option<AnalogPin>; GIGO_PIN_COUNT] = [
    Some(AnalogPin::P19), // A
    Some(AnalogPin::P14), // B
    Some(AnalogPin::P2),  // C
    Some(AnalogPin::P8),  // D
    Some(AnalogPin::P15), // E
    Some(AnalogPin::P13), // F
    Some(AnalogPin::P12), // G
    Some(AnalogPin::P1),  // H
];

/// Data line per connector, indexed by `GigoPin` ordinal
const DATA_PINS: [Option<AnalogPin>; GIGO_PIN_COUNT] = [
    Some(AnalogPin::P20), // A
    None,                 // B
    None,                 // C
    None,                 // D
    Some(AnalogPin::P16), // E
    Some(AnalogPin::P14), // F
    Some(AnalogPin::P2),  // G
    Some(AnalogPin::P8),  // H
];

/// GIGO connector label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GigoPin {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl GigoPin {
    /// All connectors in ordinal order
    pub const ALL: [GigoPin; GIGO_PIN_COUNT] = [
        GigoPin::A,
        GigoPin::B,
        GigoPin::C,
        GigoPin::D,
        GigoPin::E,
        GigoPin::F,
        GigoPin::G,
        GigoPin::H,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            GigoPin::A => "A",
            GigoPin::B => "B",
            GigoPin::C => "C",
            GigoPin::D => "D",
            GigoPin::E => "E",
            GigoPin::F => "F",
            GigoPin::G => "G",
            GigoPin::H => "H",
        }
    }
}

impl TryFrom<u8> for GigoPin {
    type Error = PinError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        GigoPin::ALL
            .get(index as usize)
            .copied()
            .ok_or(PinError::UnknownPin(index))
    }
}

impl core::fmt::Display for GigoPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declares a subset of `GigoPin` that converts into the full label set.
macro_rules! gigo_subset {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $($variant = GigoPin::$variant as isize),+
        }

        impl From<$name> for GigoPin {
            fn from(pin: $name) -> Self {
                match pin {
                    $($name::$variant => GigoPin::$variant),+
                }
            }
        }

        impl TryFrom<GigoPin> for $name {
            type Error = PinError;

            fn try_from(pin: GigoPin) -> Result<Self, Self::Error> {
                match pin {
                    $(GigoPin::$variant => Ok($name::$variant),)+
                    #[allow(unreachable_patterns)]
                    other => Err(PinError::UnsupportedPin(other)),
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&GigoPin::from(*self), f)
            }
        }
    };
}

gigo_subset! {
    /// Connectors wired to the two-line DDM motor driver
    GigoMotor { E, F, G, H }
}

gigo_subset! {
    /// Connectors that drive a single LED output
    GigoLed { B, C, D, E, F, G, H }
}

gigo_subset! {
    /// Connectors usable for sensor input
    GigoSensor { A, E, F, G, H }
}

/// Control line for a raw connector ordinal
///
/// Returns `None` for ordinals outside A-H. Callers treat `None` as a no-op.
#[inline]
pub fn resolve_control_pin(index: u8) -> Option<AnalogPin> {
    CONTROL_PINS.get(index as usize).copied().flatten()
}

/// Data line for a raw connector ordinal
///
/// Defined for A, E, F, G and H only.
#[inline]
pub fn resolve_data_pin(index: u8) -> Option<AnalogPin> {
    DATA_PINS.get(index as usize).copied().flatten()
}

/// Whether a raw connector ordinal is wired to the DDM motor driver
#[inline]
pub fn is_motor_capable_index(index: u8) -> bool {
    matches!(
        GigoPin::try_from(index),
        Ok(GigoPin::E | GigoPin::F | GigoPin::G | GigoPin::H)
    )
}

/// Control line of a connector
#[inline]
pub fn control_pin(pin: impl Into<GigoPin>) -> Option<AnalogPin> {
    resolve_control_pin(pin.into().index())
}

/// Data line of a connector
#[inline]
pub fn data_pin(pin: impl Into<GigoPin>) -> Option<AnalogPin> {
    resolve_data_pin(pin.into().index())
}

/// Whether a connector is wired to the DDM motor driver (E, F, G, H)
#[inline]
pub fn is_motor_capable(pin: impl Into<GigoPin>) -> bool {
    is_motor_capable_index(pin.into().index())
}
