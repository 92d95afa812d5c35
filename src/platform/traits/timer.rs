//! Timer interface trait
//!
//! This module defines the timer and delay interface that host implementations must provide.

use crate::platform::Result;

/// Timer interface trait
///
/// # Safety Invariants
///
/// - Monotonic time source (never goes backwards)
/// - A delay blocks only the calling handler; the host keeps servicing
///   other event sources once the handler yields
pub trait TimerInterface {
    /// Delay for specified number of milliseconds
    ///
    /// Blocks execution for at least `ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_ms(&mut self, ms: u32) -> Result<()>;

    /// Get current time in microseconds
    ///
    /// Returns a monotonic timestamp in microseconds since host start.
    fn now_us(&self) -> u64;

    /// Get current time in milliseconds
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
