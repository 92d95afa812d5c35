//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Uses simulated time for delays in test environment. A delay advances the
/// clock instantly instead of blocking.
#[derive(Debug)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer at time 0
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Advance simulated time without recording a delay
    pub fn advance_us(&mut self, us: u64) {
        self.now_us = self.now_us.wrapping_add(us);
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.advance_us(u64::from(ms) * 1000);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}
