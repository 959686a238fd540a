//! Alert events and anomaly classification

/// Discrete outputs of the alert monitor
///
/// The watchface layer reacts to these: vibration on `Raised`, alarm
/// rescheduling on `Raised` and `Rearmed`, indicator updates on all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertEvent {
    /// Alert armed from inactive; the vibration fires once here
    Raised {
        /// When the alert auto-clears unless re-armed
        deadline_s: u32,
    },
    /// Alert re-armed while already active; the latch extends, no vibration
    Rearmed {
        /// Updated auto-clear deadline
        deadline_s: u32,
    },
    /// Auto-clear deadline expired
    Cleared,
}

impl AlertEvent {
    /// Check if this event carries the one-shot vibration side effect
    pub fn should_vibrate(&self) -> bool {
        matches!(self, AlertEvent::Raised { .. })
    }

    /// Auto-clear deadline carried by arming events
    ///
    /// The caller reschedules its one-shot alarm from this.
    pub fn deadline_s(&self) -> Option<u32> {
        match self {
            AlertEvent::Raised { deadline_s } | AlertEvent::Rearmed { deadline_s } => {
                Some(*deadline_s)
            }
            AlertEvent::Cleared => None,
        }
    }
}

/// Non-fatal anomalies absorbed by the detector
///
/// None of these propagate as failures; each degrades to a no-op or
/// to bookkeeping queried via [`AlertMonitor::anomaly_count`].
///
/// [`AlertMonitor::anomaly_count`]: super::AlertMonitor::anomaly_count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Non-positive reading; dropped without touching the window
    InvalidSample,
    /// Push into a full window discarded the oldest sample
    CapacityEviction,
    /// Deadline callback landed after the alert state had moved on
    StaleTimerFire,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_raised_vibrates() {
        assert!(AlertEvent::Raised { deadline_s: 65 }.should_vibrate());
        assert!(!AlertEvent::Rearmed { deadline_s: 70 }.should_vibrate());
        assert!(!AlertEvent::Cleared.should_vibrate());
    }

    #[test]
    fn test_deadline_carried_by_arming_events() {
        assert_eq!(AlertEvent::Raised { deadline_s: 65 }.deadline_s(), Some(65));
        assert_eq!(AlertEvent::Rearmed { deadline_s: 70 }.deadline_s(), Some(70));
        assert_eq!(AlertEvent::Cleared.deadline_s(), None);
    }
}
