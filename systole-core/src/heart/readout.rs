//! Display snapshot for the heart-rate line

use core::fmt::Write;

use heapless::String;

/// Longest rendered line, "65535 BPM | Δ65535"
pub const MAX_LINE_LEN: usize = 20;

/// Text shown while no reading is available
pub const PLACEHOLDER: &str = "-- BPM";

/// Snapshot of the values the watchface renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    /// Most recent filtered reading
    pub filtered_bpm: Option<u16>,
    /// Most recent raw reading
    pub raw_bpm: Option<u16>,
    /// Most recent rolling swing
    pub delta_bpm: u16,
    /// Alert currently latched
    pub alert: bool,
}

impl Readout {
    /// Displayed value: the filtered channel, falling back to raw
    pub fn bpm(&self) -> Option<u16> {
        self.filtered_bpm.or(self.raw_bpm)
    }

    /// Render the heart-rate line for the watchface
    pub fn line(&self) -> String<MAX_LINE_LEN> {
        let mut line = String::new();
        match self.bpm() {
            Some(bpm) => {
                let _ = write!(line, "{} BPM | Δ{}", bpm, self.delta_bpm);
            }
            None => {
                let _ = line.push_str(PLACEHOLDER);
            }
        }
        line
    }
}
