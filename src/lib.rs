//! fittrack: daily wellness tracking.
//!
//! The [`tracker::Tracker`] owns the day's state (metrics, activity ledger,
//! meal plan) and keeps it in sync with a local [`storage::Storage`].
//! The `fittrack` binary is a command-line front end over it.

pub mod config;
pub mod model;
pub mod storage;
pub mod tracker;
