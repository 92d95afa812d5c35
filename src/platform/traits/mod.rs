//! Platform abstraction traits
//!
//! This module defines the traits that host implementations must provide.

pub mod adc;
pub mod gpio;
pub mod platform;
pub mod pwm;
pub mod timer;

// Re-export trait interfaces
pub use adc::{AdcInterface, ADC_MAX};
pub use gpio::GpioInterface;
pub use platform::Platform;
pub use pwm::{PwmInterface, PWM_DUTY_MAX, SERVO_ANGLE_MAX};
pub use timer::TimerInterface;
