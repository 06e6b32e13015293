//! Month-grid CLI application.
//!
//! # Usage
//! ```ignore
//! monthgrid           // Current month
//! monthgrid 2 2026    // February 2026
//! monthgrid -3        // Three months
//! monthgrid -n 6      // Six consecutive months
//! monthgrid -f 1      // Next month
//! ```

use monthgrid::args::{Args, get_reference_month};
use monthgrid::formatter::{print_month, print_months_count, print_three_months};
use monthgrid::grid::MonthCursor;
use monthgrid::types::GridContext;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("monthgrid: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = GridContext::new(args)?;
    let (year, month0) = get_reference_month(args)?;

    // Resolve navigation in i64 month counts so extreme -f/-b values
    // cannot wrap, and keep the target within the supported year range.
    let delta = args.forward as i64 - args.back as i64;
    let months = year as i64 * 12 + month0 as i64 + delta;
    let target_year = months.div_euclid(12);
    if !(1..=9999).contains(&target_year) {
        return Err(format!(
            "Invalid target year: {} (must be 1-9999)",
            target_year
        ));
    }
    let cursor = MonthCursor::new(year, month0).advance(delta as i32);

    if args.three_months {
        print_three_months(&ctx, cursor);
    } else if let Some(count) = args.months_count {
        print_months_count(&ctx, cursor, count);
    } else {
        print_month(&ctx, cursor);
    }

    Ok(())
}
