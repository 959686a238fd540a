//! Latched heart-rate alert monitor
//!
//! Consumes periodic readings, tracks the rolling swing over a
//! [`SampleWindow`], and drives a latched alert with a timed auto-clear.

use super::events::{AlertEvent, ErrorKind};
use super::readout::Readout;
use super::window::{SampleWindow, DEFAULT_RETENTION_S};
use crate::traits::HeartRateReading;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Swing that arms the alert, in BPM
pub const DEFAULT_DELTA_THRESHOLD_BPM: u16 = 30;

/// How long the alert stays latched without re-arming, in seconds
pub const DEFAULT_ALERT_HOLD_S: u32 = 60;

/// Alert monitor tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonitorConfig {
    /// Rolling swing that arms the alert (BPM)
    pub delta_threshold_bpm: u16,
    /// Latch duration per arming (seconds)
    pub alert_hold_s: u32,
    /// Sample retention window (seconds)
    pub retention_s: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            delta_threshold_bpm: DEFAULT_DELTA_THRESHOLD_BPM, // 30 BPM swing
            alert_hold_s: DEFAULT_ALERT_HOLD_S,               // 60 s latch
            retention_s: DEFAULT_RETENTION_S,                 // matches the window default
        }
    }
}

/// Heart-rate anomaly monitor
///
/// The watchface layer owns one instance and calls [`on_sample`] for each
/// sensor delivery and [`tick`] from its auto-clear alarm callback. Both
/// are invoked from the same event queue, never concurrently.
///
/// Construct a monitor only when the platform reports a heart-rate
/// capability; capability-less faces render the placeholder and never
/// poll (see [`HeartRateSensor::is_available`]).
///
/// Invariant: the alert is active exactly while a deadline is set.
///
/// [`on_sample`]: Self::on_sample
/// [`tick`]: Self::tick
/// [`HeartRateSensor::is_available`]: crate::traits::HeartRateSensor::is_available
#[derive(Debug)]
pub struct AlertMonitor {
    /// Raw readings within the retention window
    window: SampleWindow,
    /// Tuning parameters
    config: MonitorConfig,
    /// Latched alert state
    active: bool,
    /// When the alert auto-clears, while active
    deadline_s: Option<u32>,
    /// Most recent filtered reading, for display
    last_filtered_bpm: Option<u16>,
    /// Most recent raw reading, for display
    last_raw_bpm: Option<u16>,
    /// Most recently computed rolling swing
    last_delta_bpm: u16,
    /// Readings rejected as invalid
    invalid_samples: u32,
    /// Alarm callbacks absorbed by the staleness guard
    stale_fires: u32,
}

impl Default for AlertMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertMonitor {
    /// Create a monitor with default tuning
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    /// Create a monitor with custom tuning
    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            window: SampleWindow::with_retention(config.retention_s),
            config,
            active: false,
            deadline_s: None,
            last_filtered_bpm: None,
            last_raw_bpm: None,
            last_delta_bpm: 0,
            invalid_samples: 0,
            stale_fires: 0,
        }
    }

    /// Process one sensor delivery
    ///
    /// Display fields always track the delivery: a missing or zero channel
    /// unsets the corresponding field. A positive raw reading additionally
    /// enters the window, recomputes the swing, and evaluates the alert
    /// rule.
    ///
    /// # Arguments
    /// - `reading`: both channels of the current delivery
    /// - `now_s`: current time in whole seconds, non-decreasing across calls
    ///
    /// # Returns
    /// `Raised` on the inactive-to-active transition (the caller vibrates
    /// and schedules the auto-clear alarm), `Rearmed` when a qualifying
    /// swing extends an already-active latch (reschedule only), `None`
    /// otherwise. A swing dropping back below the threshold never clears
    /// the alert here; clearing happens only through [`tick`](Self::tick).
    pub fn on_sample(&mut self, reading: HeartRateReading, now_s: u32) -> Option<AlertEvent> {
        // Zero from the platform means "no reading"
        self.last_filtered_bpm = reading.filtered_bpm.filter(|&bpm| bpm > 0);
        self.last_raw_bpm = reading.raw_bpm.filter(|&bpm| bpm > 0);

        let raw_bpm = reading.raw_bpm?;
        if self.window.push(raw_bpm, now_s).is_err() {
            self.invalid_samples = self.invalid_samples.saturating_add(1);
            return None;
        }

        self.last_delta_bpm = self.window.max_minus_min();
        if self.last_delta_bpm < self.config.delta_threshold_bpm {
            return None;
        }

        let deadline_s = now_s.saturating_add(self.config.alert_hold_s);
        self.deadline_s = Some(deadline_s);
        if self.active {
            Some(AlertEvent::Rearmed { deadline_s })
        } else {
            self.active = true;
            Some(AlertEvent::Raised { deadline_s })
        }
    }

    /// Process an auto-clear alarm callback
    ///
    /// Clears the alert once the deadline has passed. A callback that
    /// lands early, after a re-arm moved the deadline, or after the alert
    /// already cleared is counted as a stale fire and ignored; alarm
    /// cancellation is best-effort, so these are expected.
    pub fn tick(&mut self, now_s: u32) -> Option<AlertEvent> {
        match self.deadline_s {
            Some(deadline_s) if self.active && now_s >= deadline_s => {
                self.active = false;
                self.deadline_s = None;
                Some(AlertEvent::Cleared)
            }
            _ => {
                self.stale_fires = self.stale_fires.saturating_add(1);
                None
            }
        }
    }

    /// Clear the window, the alert, and the display fields
    ///
    /// The caller must also disarm its pending auto-clear alarm (see
    /// [`AlarmSlot::disarm`]). Anomaly totals survive as lifetime
    /// diagnostics.
    ///
    /// [`AlarmSlot::disarm`]: crate::traits::AlarmSlot::disarm
    pub fn reset(&mut self) {
        self.window.clear();
        self.active = false;
        self.deadline_s = None;
        self.last_filtered_bpm = None;
        self.last_raw_bpm = None;
        self.last_delta_bpm = 0;
    }

    /// Check if the alert is currently latched
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pending auto-clear deadline, while active
    pub fn deadline_s(&self) -> Option<u32> {
        self.deadline_s
    }

    /// Most recent filtered reading
    pub fn last_filtered_bpm(&self) -> Option<u16> {
        self.last_filtered_bpm
    }

    /// Most recent raw reading
    pub fn last_raw_bpm(&self) -> Option<u16> {
        self.last_raw_bpm
    }

    /// Most recently computed rolling swing
    pub fn delta_bpm(&self) -> u16 {
        self.last_delta_bpm
    }

    /// Number of samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    /// Running total of anomalies absorbed, by kind
    pub fn anomaly_count(&self, kind: ErrorKind) -> u32 {
        match kind {
            ErrorKind::InvalidSample => self.invalid_samples,
            ErrorKind::CapacityEviction => self.window.capacity_evictions(),
            ErrorKind::StaleTimerFire => self.stale_fires,
        }
    }

    /// Snapshot of the display values
    pub fn readout(&self) -> Readout {
        Readout {
            filtered_bpm: self.last_filtered_bpm,
            raw_bpm: self.last_raw_bpm,
            delta_bpm: self.last_delta_bpm,
            alert: self.active,
        }
    }
}
