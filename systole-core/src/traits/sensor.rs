//! Heart-rate source trait

/// Default sampling cadence while subscribed, in seconds per reading
pub const DEFAULT_SAMPLE_PERIOD_S: u32 = 1;

/// One delivery from the heart-rate source
///
/// Both channels are independent and optional. Consumers treat a zero
/// value the same as an absent one; platforms report zero while the
/// sensor is settling or off-wrist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartRateReading {
    /// Unsmoothed sensor value in BPM
    pub raw_bpm: Option<u16>,
    /// Platform-filtered value in BPM
    pub filtered_bpm: Option<u16>,
}

impl HeartRateReading {
    /// A delivery with neither channel present
    pub const fn unavailable() -> Self {
        Self {
            raw_bpm: None,
            filtered_bpm: None,
        }
    }
}

/// Trait for periodic heart-rate sources
///
/// Implementations wrap the platform health service. The watchface layer
/// checks [`is_available`](Self::is_available) once at startup and only
/// constructs and polls an alert monitor when the capability exists;
/// faces on other hardware render the placeholder and never subscribe.
pub trait HeartRateSensor {
    /// Check if this hardware exposes a heart-rate sensor at all
    fn is_available(&self) -> bool;

    /// Take the current reading, both channels
    fn read(&mut self) -> HeartRateReading;

    /// Cadence readings are delivered at while subscribed
    fn sample_period_s(&self) -> u32 {
        DEFAULT_SAMPLE_PERIOD_S
    }
}
