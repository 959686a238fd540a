//! Platform-agnostic core logic for the Systole watchface
//!
//! This crate contains all watchface logic that does not depend on the
//! host display/event framework:
//!
//! - Heart-rate sample window with time-based retention
//! - Alert monitor (rolling swing detection, latched alert, auto-clear)
//! - Platform abstraction traits (sensor, alarm scheduling, vibration)
//! - User settings type definitions
//!
//! The UI layer owns one [`heart::AlertMonitor`], feeds it readings from a
//! [`traits::HeartRateSensor`], and reacts to the returned
//! [`heart::AlertEvent`]s by driving the vibration motor and the auto-clear
//! alarm. All operations take the current time in whole seconds; nothing in
//! this crate reads a clock or performs I/O.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod heart;
pub mod traits;
