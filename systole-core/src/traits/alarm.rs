//! One-shot alarm scheduling trait and slot bookkeeping

/// Trait for the platform one-shot timer facility
///
/// Cancellation is best-effort: a canceled alarm's callback may already
/// be in flight and land anyway. Consumers guard fired callbacks against
/// their own state instead of trusting cancellation (see
/// [`AlertMonitor::tick`]).
///
/// [`AlertMonitor::tick`]: crate::heart::AlertMonitor::tick
pub trait AlarmScheduler {
    /// Token identifying a scheduled alarm
    type Handle;

    /// Schedule a one-shot alarm `delay_s` seconds from now
    fn schedule_once(&mut self, delay_s: u32) -> Self::Handle;

    /// Cancel a previously scheduled alarm, best-effort
    fn cancel(&mut self, handle: Self::Handle);
}

/// Bookkeeping for a single pending alarm
///
/// Enforces the timer discipline the alert monitor relies on: at most
/// one alarm pending at a time, every re-arm cancels the previous alarm
/// before scheduling, and stopping cancels unconditionally. Staleness of
/// a fired callback is decided by the consumer's state guard, never by
/// comparing handles.
#[derive(Debug)]
pub struct AlarmSlot<H> {
    pending: Option<H>,
}

impl<H> Default for AlarmSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> AlarmSlot<H> {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Check if an alarm is currently pending
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule an alarm, canceling any pending one first
    pub fn arm<S>(&mut self, scheduler: &mut S, delay_s: u32)
    where
        S: AlarmScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.pending = Some(scheduler.schedule_once(delay_s));
    }

    /// Cancel the pending alarm, if any
    pub fn disarm<S>(&mut self, scheduler: &mut S)
    where
        S: AlarmScheduler<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }

    /// Drop the bookkeeping once the alarm's callback has landed
    pub fn fired(&mut self) {
        self.pending = None;
    }
}
