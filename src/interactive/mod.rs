//! Interactive TUI interface
//!
//! Full-screen puzzle entry, solving, filtering and paging.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, SolveJob, TUI_PAGE_SIZE, run_tui};
