//! Interactive terminal UI
//!
//! A ratatui host for [`Session`](crate::session::Session): keys drive the
//! session, timers drive the delayed word advance.

mod app;
mod rendering;

pub use app::{ADVANCE_DELAY, App, MessageStyle, NOTICE_DURATION, run_tui};
