//! Background Tasks Module
//!
//! Contains background tasks owned by long-lived client objects.
//!
//! # Tasks
//! - Cache Reaper: Removes expired cache entries at the configured sweep interval

mod reaper;

pub use reaper::spawn_reaper_task;
pub(crate) use reaper::sweep;
