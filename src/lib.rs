//! Month-grid calendar library and terminal display.
//!
//! Features:
//! - Fixed 42-cell (6-week) month grids with adjacent-month filler days
//! - Customizable week start (Monday/Sunday)
//! - Pure, value-returning month navigation with year rollover
//! - Locale-aware month and weekday names

pub mod args;
pub mod formatter;
pub mod grid;
pub mod types;
