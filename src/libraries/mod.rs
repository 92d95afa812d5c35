//! Common libraries
//!
//! Board-agnostic helpers shared by the block operations.
//!
//! ## Libraries
//!
//! - `mapping`: Integer linear range mapping (host `pins.map` equivalent)
//! - `motor_driver`: DDM motor driver (direction + speed PWM lines)

pub mod mapping;
pub mod motor_driver;

// Re-export commonly used types
pub use mapping::map_range;
pub use motor_driver::{DdmMotor, Direction};
