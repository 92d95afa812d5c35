//! Mock platform implementation for testing
//!
//! This module provides a recording stand-in for the host pin primitives so
//! the block operations can be unit tested without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled

#![cfg(any(test, feature = "mock"))]

mod platform;
mod timer;

pub use platform::{MockPlatform, PinEvent, MAX_EVENTS};
pub use timer::MockTimer;
