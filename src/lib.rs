#![cfg_attr(not(test), no_std)]

//! gigo_future - GIGO expansion board blocks for micro:bit class boards
//!
//! This library maps the GIGO connector labels (A-H) to the board's physical
//! pins and wraps the host pin primitives behind simple operations: LEDs,
//! two-wire DDM motors, angle servos, analog sensors and timed waits.

// Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
pub mod core;

// Platform abstraction layer: host pin primitives injected via traits
pub mod platform;

// Physical pin identifiers and the GIGO connector tables
pub mod board;

// Common libraries (linear mapping, DDM motor driver)
pub mod libraries;

// Block operations
pub mod gigo;

pub use board::{
    AnalogPin, GigoLed, GigoMotor, GigoPin, GigoSensor, Level, PinAnalog, PinDigital,
};
pub use gigo::GigoFuture;
pub use libraries::motor_driver::Direction;
