//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates all host pin interfaces.

use super::{AdcInterface, GpioInterface, PwmInterface, TimerInterface};

/// Root platform trait
///
/// Aggregates the host primitives used by the block operations. Any type that
/// implements the four interfaces is a platform; there is nothing else to
/// provide.
///
/// # Example
///
/// ```ignore
/// pub struct MicrobitHost { /* HAL handles */ }
///
/// impl GpioInterface for MicrobitHost { /* ... */ }
/// impl PwmInterface for MicrobitHost { /* ... */ }
/// impl AdcInterface for MicrobitHost { /* ... */ }
/// impl TimerInterface for MicrobitHost { /* ... */ }
///
/// let mut blocks = GigoFuture::new(MicrobitHost::new());
/// ```
pub trait Platform: GpioInterface + PwmInterface + AdcInterface + TimerInterface {}

impl<T> Platform for T where T: GpioInterface + PwmInterface + AdcInterface + TimerInterface {}
