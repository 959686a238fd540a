//! Vibration motor trait

/// Built-in vibration patterns
///
/// The canned pulse shapes wrist platforms ship with; no custom
/// waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibePattern {
    /// One short pulse
    Short,
    /// One long pulse
    Long,
    /// Two quick pulses, the shape used for alerts
    Double,
}

/// Trait for the vibration motor
///
/// The watchface layer pulses once per [`AlertEvent::Raised`]; the
/// monitor itself never drives the motor.
///
/// [`AlertEvent::Raised`]: crate::heart::AlertEvent::Raised
pub trait Vibrator {
    /// Play a pattern once
    fn pulse(&mut self, pattern: VibePattern);
}
