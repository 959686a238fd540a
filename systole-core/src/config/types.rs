//! User settings type definitions
//!
//! The companion app delivers these as a flat key/value record; the
//! platform layer owns the storage format and the message keys, this
//! crate only defines the shape and the defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Temperature display unit for the weather line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

/// User-configurable watchface settings
///
/// Colors arrive from the companion app as packed 0xRRGGBB values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchSettings {
    /// Background color
    pub background_rgb: u32,
    /// Text and gauge color
    pub text_rgb: u32,
    /// Weather temperature unit
    pub unit: TemperatureUnit,
    /// Show the date line below the clock
    pub show_date: bool,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            background_rgb: 0x000000, // black
            text_rgb: 0xFFFFFF,       // white
            unit: TemperatureUnit::Celsius,
            show_date: true,
        }
    }
}
