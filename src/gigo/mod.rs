//! GIGO block operations
//!
//! `GigoFuture` is the block namespace of the extension: each method is one
//! block. Blocks resolve their connector through the fixed GIGO tables and
//! make one host call per pin they drive.
//!
//! ## Failure policy
//!
//! - A connector with no wiring for the block (unmapped ordinal, non-motor
//!   connector) is skipped silently and the block returns `Ok(())`.
//! - Host failures are returned unchanged.
//!
//! ## Example
//!
//! ```
//! use gigo_future::platform::mock::MockPlatform;
//! use gigo_future::{Direction, GigoFuture, GigoLed, GigoMotor, PinAnalog};
//!
//! let mut blocks = GigoFuture::new(MockPlatform::new());
//!
//! if blocks.analog_read(PinAnalog::P1)? > 500 {
//!     blocks.digital_write(GigoLed::D, true)?;
//! }
//! blocks.set_motor_speed(GigoMotor::E, Direction::Right, 100)?;
//! blocks.wait(0.25)?;
//! blocks.stop_motor(GigoMotor::E)?;
//! # Ok::<(), gigo_future::platform::PlatformError>(())
//! ```

mod facade;

pub use facade::GigoFuture;
