//! Motor driver abstraction
//!
//! This module drives the GIGO DDM motor modules: DC motors with an on-board
//! driver that takes a direction line and a speed line instead of a servo
//! pulse.
//!
//! ## Example
//!
//! ```
//! use gigo_future::libraries::motor_driver::{DdmMotor, Direction};
//! use gigo_future::platform::mock::MockPlatform;
//! use gigo_future::GigoMotor;
//!
//! let mut platform = MockPlatform::new();
//! let motor = DdmMotor::for_pin(GigoMotor::E).unwrap();
//!
//! motor.drive(&mut platform, Direction::Left, 255)?;
//! motor.stop(&mut platform)?;
//! # Ok::<(), gigo_future::platform::PlatformError>(())
//! ```

pub mod ddm;

// Re-export main types
pub use ddm::DdmMotor;

/// Highest speed accepted by the motor blocks
pub const SPEED_MAX: u8 = 255;

/// Speed used by motor blocks that omit the speed argument
pub const DEFAULT_SPEED: u8 = SPEED_MAX;

/// Rotational direction of a DDM motor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left = 0,
    Right = 1,
}
