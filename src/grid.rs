//! Month-grid construction: 42 cells spanning the displayed month plus
//! filler days borrowed from the adjacent months.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::{CELLS_PER_GRID, CalendarDay, CalendarGridState, ColumnsMode, GridContext};

/// Check if a year is a leap year under Gregorian rules.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in a month, with `month0` zero-based (0 = January).
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        1 => 28,
        _ => 30,
    }
}

/// The reference month being displayed: the sole piece of navigation
/// state. Always holds a normalized zero-based month in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        // Normalize so callers can pass any month offset
        Self { year, month0: 0 }.advance(month0 as i32)
    }

    /// Cursor for the month containing `date` (day-of-month is ignored).
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// Shift by whole months, rolling the year over as needed
    /// (month 11 + 1 -> month 0 of year+1, month 0 - 1 -> month 11 of
    /// year-1). Returns a new cursor; nothing is mutated in place.
    #[must_use]
    pub fn advance(self, delta: i32) -> Self {
        let total = self.year * 12 + self.month0 as i32 + delta;
        Self {
            year: total.div_euclid(12),
            month0: total.rem_euclid(12) as u32,
        }
    }

    /// Weekday of day 1 of this month.
    pub fn first_weekday(&self) -> Weekday {
        // month0 is normalized, so the date is always representable
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .unwrap()
            .weekday()
    }

    /// Build the full 42-cell grid for this month.
    ///
    /// The grid starts on the week-start column: the last
    /// `leading` days of the previous month are prepended in ascending
    /// calendar order, then days 1..=N of this month, then days of the
    /// next month from 1 upward until the cell count reaches exactly
    /// [`CELLS_PER_GRID`].
    pub fn build(&self, ctx: &GridContext) -> CalendarGridState {
        let leading = match ctx.week_start {
            Weekday::Sun => self.first_weekday().num_days_from_sunday(),
            _ => self.first_weekday().num_days_from_monday(),
        };

        let mut days = Vec::with_capacity(CELLS_PER_GRID);

        let prev = self.advance(-1);
        let prev_len = days_in_month(prev.year, prev.month0);
        for day in (prev_len - leading + 1)..=prev_len {
            days.push(filler_day(day, &prev));
        }

        for day in 1..=days_in_month(self.year, self.month0) {
            let is_today = ctx.today.year() == self.year
                && ctx.today.month0() == self.month0
                && ctx.today.day() == day;
            days.push(CalendarDay {
                day_of_month: day,
                month0: self.month0,
                year: self.year,
                is_today,
                is_current_month: true,
            });
        }

        let next = self.advance(1);
        let mut day = 1;
        while days.len() < CELLS_PER_GRID {
            days.push(filler_day(day, &next));
            day += 1;
        }
        days.truncate(CELLS_PER_GRID);

        CalendarGridState {
            month_label: format!(
                "{} {}",
                crate::formatter::get_month_name(self.month0),
                self.year
            ),
            days,
        }
    }
}

/// Filler cells never carry the today flag, even on a date match:
/// they are not semantically part of the displayed month.
fn filler_day(day: u32, cursor: &MonthCursor) -> CalendarDay {
    CalendarDay {
        day_of_month: day,
        month0: cursor.month0,
        year: cursor.year,
        is_today: false,
        is_current_month: false,
    }
}

impl GridContext {
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        matches!(weekday, Weekday::Sat | Weekday::Sun)
    }

    pub fn months_per_row(&self) -> u32 {
        match self.columns {
            ColumnsMode::Fixed(n) => n,
            ColumnsMode::Auto => {
                let month_width = crate::types::MONTH_WIDTH + self.gutter_width;
                if let Some(term_width) = get_terminal_width() {
                    (term_width / month_width as u32).clamp(1, 3)
                } else {
                    3
                }
            }
        }
    }
}

/// Get terminal width using terminal_size crate.
fn get_terminal_width() -> Option<u32> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as u32)
}
