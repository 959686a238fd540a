//! Heart-rate anomaly detection
//!
//! A bounded time-windowed buffer of raw readings, a rolling max-min
//! swing computation, and a latched alert with timed auto-clear.

pub mod events;
pub mod monitor;
pub mod readout;
pub mod window;

pub use events::{AlertEvent, ErrorKind};
pub use monitor::{AlertMonitor, MonitorConfig};
pub use readout::Readout;
pub use window::{Sample, SampleWindow, WINDOW_CAPACITY};
