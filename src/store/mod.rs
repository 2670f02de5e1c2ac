//! File-backed stores: the pointer file and the per-day event logs.

pub mod day_log;
pub mod pointer;

pub use day_log::DayLog;
pub use pointer::{ActiveSession, PointerStore};
