//! Platform abstraction traits
//!
//! These traits define the interface between the watchface core and the
//! host platform layer (sensor service, timer service, vibration motor).

pub mod alarm;
pub mod sensor;
pub mod vibration;

pub use alarm::{AlarmScheduler, AlarmSlot};
pub use sensor::{HeartRateReading, HeartRateSensor, DEFAULT_SAMPLE_PERIOD_S};
pub use vibration::{VibePattern, Vibrator};
