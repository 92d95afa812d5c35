//! Platform abstraction layer
//!
//! This module provides the host pin primitives as injected traits. All
//! host-specific code lives behind these traits so the block operations can be
//! tested without hardware.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{AdcInterface, GpioInterface, Platform, PwmInterface, TimerInterface};
