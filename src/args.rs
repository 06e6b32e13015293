//! Command-line argument parsing using clap.
//!
//! Positional arguments follow cal convention: `[month] [year]`

use chrono::Datelike;
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::types::{COLOR_ENABLED_BY_DEFAULT, ColumnsMode, GUTTER_WIDTH_REGULAR, GridContext};

#[derive(Parser, Debug)]
#[command(name = "monthgrid")]
#[command(about = "Displays a month grid with adjacent-month filler days", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Week starts on Sunday (default is Monday).
    #[arg(short = 's', long, help_heading = "Calendar options")]
    pub sunday: bool,

    /// Week starts on Monday (default).
    #[arg(short = 'm', long, help_heading = "Calendar options")]
    pub monday: bool,

    /// Navigate forward by this many months from the reference month.
    #[arg(
        short = 'f',
        long,
        default_value_t = 0,
        help_heading = "Calendar options",
        value_name = "num"
    )]
    pub forward: u32,

    /// Navigate backward by this many months from the reference month.
    #[arg(
        short = 'b',
        long,
        default_value_t = 0,
        help_heading = "Calendar options",
        value_name = "num"
    )]
    pub back: u32,

    /// Display three months (previous, current, next).
    #[arg(short = '3', long = "three", help_heading = "Display options")]
    pub three_months: bool,

    /// Number of consecutive months to display.
    #[arg(
        short = 'n',
        long = "months",
        help_heading = "Display options",
        value_name = "num"
    )]
    pub months_count: Option<u32>,

    /// Show only a single month (default).
    #[arg(short = '1', long = "one", help_heading = "Display options")]
    pub one_month: bool,

    /// Month (1-12 or name) - optional, used with year.
    #[arg(index = 1, default_value = None, value_name = "month", value_hint = ValueHint::Other)]
    pub month_arg: Option<String>,

    /// Year (1-9999).
    #[arg(index = 2, default_value = None, value_name = "year", value_hint = ValueHint::Other)]
    pub year_arg: Option<String>,

    /// Disable colorized output.
    #[arg(long, help_heading = "Output options")]
    pub no_color: bool,

    /// Number of columns for multiple months (or "auto" for terminal width).
    #[arg(
        short = 'c',
        long = "columns",
        help_heading = "Output options",
        value_name = "width"
    )]
    pub columns: Option<String>,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Display a 6-week month grid, or several of them.

Without any arguments, display the current month. Days borrowed from
the previous and next months fill the grid out to six full weeks.

Examples:
  monthgrid                 Display current month
  monthgrid 2 2026          Display February 2026
  monthgrid -3              Display three months (prev, current, next)
  monthgrid -n 6            Display six consecutive months
  monthgrid -f 1            Display next month
  monthgrid -b 2            Display the month before last
  monthgrid -s              Week starts on Sunday
  monthgrid --no-color      Disable colorized output";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl GridContext {
    pub fn new(args: &Args) -> Result<Self, String> {
        let today = get_today_date();

        let color =
            !args.no_color && COLOR_ENABLED_BY_DEFAULT && std::io::stdout().is_terminal();

        let columns = match args.columns.as_deref() {
            Some("auto") | None => ColumnsMode::Auto,
            Some(s) => {
                let n = s
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid columns value: {}", s))?;
                if n == 0 {
                    return Err("Columns must be positive".to_string());
                }
                ColumnsMode::Fixed(n)
            }
        };

        // Prevent conflicting display modes
        if args.three_months && args.months_count.is_some() {
            return Err("Options -3 and -n are mutually exclusive".to_string());
        }

        if let Some(count) = args.months_count
            && count == 0
        {
            return Err("Months count must be positive".to_string());
        }

        Ok(GridContext {
            week_start: if args.sunday {
                chrono::Weekday::Sun
            } else {
                chrono::Weekday::Mon
            },
            today,
            color,
            gutter_width: GUTTER_WIDTH_REGULAR,
            columns,
        })
    }
}

/// Get today's date, respecting MONTHGRID_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("MONTHGRID_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}

/// Calculate the reference month from positional arguments as
/// `(year, month0)`.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year (4 digits) or month (number or name)
/// - 2 args: month year
pub fn get_reference_month(args: &Args) -> Result<(i32, u32), String> {
    let today = get_today_date();

    match (&args.month_arg, &args.year_arg) {
        // One argument: could be year (4 digits) or month
        (Some(val), None) => {
            if let Ok(num) = val.parse::<i32>() {
                // 4 digits = year
                if (1000..=9999).contains(&num) {
                    return Ok((num, today.month0()));
                }
            }
            if let Some(month0) = crate::formatter::parse_month(val) {
                return Ok((today.year(), month0));
            }
            Err(format!("Invalid argument: {}", val))
        }
        // Two arguments: month year (e.g., monthgrid 2 2026)
        (Some(month_str), Some(year_str)) => {
            let month0 = crate::formatter::parse_month(month_str)
                .ok_or_else(|| format!("Invalid month: {}", month_str))?;
            let year = year_str
                .parse::<i32>()
                .map_err(|_| format!("Invalid year: {}", year_str))?;
            if !(1..=9999).contains(&year) {
                return Err(format!("Invalid year: {} (must be 1-9999)", year));
            }
            Ok((year, month0))
        }
        // No arguments: current month
        (None, None) => Ok((today.year(), today.month0())),
        _ => Err("Invalid argument combination".to_string()),
    }
}
