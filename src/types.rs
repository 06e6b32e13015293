//! Type definitions and constants for the month grid and its display.

use chrono::{NaiveDate, Weekday};

/// A single cell of the 42-cell month grid.
///
/// Filler cells (borrowed from the adjacent months to complete the
/// 7-column alignment) carry `is_current_month = false` and never set
/// `is_today`, even when their date matches the real current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day number within its own month (1-31).
    pub day_of_month: u32,
    /// Zero-based month index (0 = January ... 11 = December).
    pub month0: u32,
    /// Four-digit year.
    pub year: i32,
    /// True iff this cell is the displayed month's cell for today.
    pub is_today: bool,
    /// False for leading/trailing filler cells.
    pub is_current_month: bool,
}

/// A fully materialized grid for one displayed month.
///
/// Recomputed from scratch on every navigation step; never mutated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGridState {
    /// Human-readable "Month Year" header for the displayed month.
    pub month_label: String,
    /// Exactly [`CELLS_PER_GRID`] cells, row-major, 7 per week.
    pub days: Vec<CalendarDay>,
}

/// Column display mode for multi-month layouts.
#[derive(Debug, Clone, Copy)]
pub enum ColumnsMode {
    /// Fixed number of columns.
    Fixed(u32),
    /// Auto-detect from terminal width.
    Auto,
}

/// Display context passed explicitly to grid building and rendering.
///
/// Carries the clock and the week-start convention as plain values so
/// that grid construction stays a pure function of its inputs.
#[derive(Clone, Debug)]
pub struct GridContext {
    /// First day of the week (Monday or Sunday).
    pub week_start: Weekday,
    /// Today's date for the `is_today` flag and highlighting.
    pub today: NaiveDate,
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Width of gutter between months in multi-month display.
    pub gutter_width: usize,
    /// Column display mode.
    pub columns: ColumnsMode,
}

// Constants for grid geometry and formatting
pub const CELLS_PER_GRID: usize = 42; // 6 weeks × 7 days
pub const DAYS_PER_WEEK: usize = 7;
pub const MONTH_WIDTH: usize = 20; // 7 two-char cells + 6 separators
pub const GUTTER_WIDTH_REGULAR: usize = 2;

// Color is enabled by default for better user experience
pub const COLOR_ENABLED_BY_DEFAULT: bool = true;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_REVERSE: &str = "\x1b[7m";
pub const COLOR_DIM: &str = "\x1b[2m";
pub const COLOR_RED: &str = "\x1b[91m";
pub const COLOR_TEAL: &str = "\x1b[96m";
pub const COLOR_SAND_YELLOW: &str = "\x1b[93m";
