//! Pin |   GIGO use       |      Notes
//! ----+------------------+----------------------------------
//!  P1 | H ctl / servo    | Sensor connector P1
//!  P2 | C ctl / G data   | Sensor connector P2, servo
//!  P8 | D ctl / H data   | Servo
//! P12 | G ctl            | Servo
//! P13 | F ctl            | Servo
//! P14 | B ctl / F data   | Servo
//! P15 | E ctl            | Servo
//! P16 | E data           | Servo
//! P19 | A ctl            | Shared with I2C SCL on the edge connector
//! P20 | A data           | Shared with I2C SDA on the edge connector

/// Physical edge-connector pin of the host board.
///
/// Every pin listed here can be driven with a PWM duty value; the host
/// decides which of them also accept analog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogPin {
    P0,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
    P9,
    P10,
    P11,
    P12,
    P13,
    P14,
    P15,
    P16,
    P19,
    P20,
}

impl AnalogPin {
    /// Edge connector number of this pin
    pub const fn number(self) -> u8 {
        match self {
            AnalogPin::P0 => 0,
            AnalogPin::P1 => 1,
            AnalogPin::P2 => 2,
            AnalogPin::P3 => 3,
            AnalogPin::P4 => 4,
            AnalogPin::P5 => 5,
            AnalogPin::P6 => 6,
            AnalogPin::P7 => 7,
            AnalogPin::P8 => 8,
            AnalogPin::P9 => 9,
            AnalogPin::P10 => 10,
            AnalogPin::P11 => 11,
            AnalogPin::P12 => 12,
            AnalogPin::P13 => 13,
            AnalogPin::P14 => 14,
            AnalogPin::P15 => 15,
            AnalogPin::P16 => 16,
            AnalogPin::P19 => 19,
            AnalogPin::P20 => 20,
        }
    }

    /// Look up a pin by its edge connector number
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            0 => Some(AnalogPin::P0),
            1 => Some(AnalogPin::P1),
            2 => Some(AnalogPin::P2),
            3 => Some(AnalogPin::P3),
            4 => Some(AnalogPin::P4),
            5 => Some(AnalogPin::P5),
            6 => Some(AnalogPin::P6),
            7 => Some(AnalogPin::P7),
            8 => Some(AnalogPin::P8),
            9 => Some(AnalogPin::P9),
            10 => Some(AnalogPin::P10),
            11 => Some(AnalogPin::P11),
            12 => Some(AnalogPin::P12),
            13 => Some(AnalogPin::P13),
            14 => Some(AnalogPin::P14),
            15 => Some(AnalogPin::P15),
            16 => Some(AnalogPin::P16),
            19 => Some(AnalogPin::P19),
            20 => Some(AnalogPin::P20),
            _ => None,
        }
    }
}

impl core::fmt::Display for AnalogPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// Digital output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low = 0,
    High = 1,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}
