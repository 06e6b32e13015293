//! Grid rendering and display with localization and color support.

use chrono::{Locale, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

use crate::grid::MonthCursor;
use crate::types::{
    COLOR_DIM, COLOR_RED, COLOR_RESET, COLOR_REVERSE, COLOR_SAND_YELLOW, COLOR_TEAL, CalendarDay,
    CalendarGridState, DAYS_PER_WEEK, GridContext, MONTH_WIDTH,
};

/// Get system locale from environment (LC_ALL > LC_TIME > LANG > en_US).
pub fn get_system_locale() -> Locale {
    std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_TIME"))
        .or_else(|_| std::env::var("LANG"))
        .unwrap_or_else(|_| "en_US.UTF-8".to_string())
        .split('.')
        .next()
        .unwrap_or("en_US")
        .split('@')
        .next()
        .unwrap_or("en_US")
        .parse()
        .unwrap_or(Locale::en_US)
}

/// Get month name for the current locale, `month0` zero-based (0-11).
pub fn get_month_name(month0: u32) -> String {
    let locale = get_system_locale();

    match locale {
        // chrono's ru_RU month names are genitive; headers need nominative
        Locale::ru_RU => [
            "Январь",
            "Февраль",
            "Март",
            "Апрель",
            "Май",
            "Июнь",
            "Июль",
            "Август",
            "Сентябрь",
            "Октябрь",
            "Ноябрь",
            "Декабрь",
        ][month0 as usize]
            .to_string(),
        _ => {
            let date = NaiveDate::from_ymd_opt(2000, month0 + 1, 1).unwrap();
            date.format_localized("%B", locale).to_string()
        }
    }
}

/// Parse a month from a string (numeric 1-12 or English name) into a
/// zero-based month index.
pub fn parse_month(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>()
        && (1..=12).contains(&n)
    {
        return Some(n - 1);
    }

    let s_lower = s.to_lowercase();
    let month_names: [(&str, u32); 23] = [
        ("january", 0),
        ("february", 1),
        ("march", 2),
        ("april", 3),
        ("may", 4),
        ("june", 5),
        ("july", 6),
        ("august", 7),
        ("september", 8),
        ("october", 9),
        ("november", 10),
        ("december", 11),
        // Short forms ("may" is covered above)
        ("jan", 0),
        ("feb", 1),
        ("mar", 2),
        ("apr", 3),
        ("jun", 5),
        ("jul", 6),
        ("aug", 7),
        ("sep", 8),
        ("oct", 9),
        ("nov", 10),
        ("dec", 11),
    ];
    month_names
        .iter()
        .find(|(name, _)| *name == s_lower)
        .map(|(_, num)| *num)
}

/// Format the "Month Year" header, centered and optionally colored.
pub fn format_month_header(label: &str, width: usize, color: bool) -> String {
    let centered = center_text(label, width);
    if color {
        format!("{}{}{}", COLOR_TEAL, centered, COLOR_RESET)
    } else {
        centered
    }
}

/// Center text within a specified width, accounting for Unicode character widths.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let total_padding = width - text_width;
    let left_padding = total_padding.div_ceil(2);
    let right_padding = total_padding - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Get weekday order based on week start day.
pub fn get_weekday_order(week_start: Weekday) -> [Weekday; 7] {
    match week_start {
        Weekday::Sun => [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ],
        _ => [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ],
    }
}

/// Get 2-character weekday abbreviation for the given locale.
pub fn get_weekday_short_name(weekday: Weekday, locale: Locale) -> String {
    let base_date = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap(); // a Monday
    let offset = weekday.num_days_from_monday() as i64;
    let date = base_date + chrono::Duration::days(offset);
    let day_name = date.format_localized("%a", locale).to_string();
    day_name.chars().take(2).collect()
}

/// Format the weekday header row with optional color.
pub fn format_weekday_headers(ctx: &GridContext) -> String {
    let locale = get_system_locale();
    let mut result = String::new();

    if ctx.color {
        result.push_str(COLOR_SAND_YELLOW);
    }

    let weekday_order = get_weekday_order(ctx.week_start);
    for (i, &weekday) in weekday_order.iter().enumerate() {
        let short_name = get_weekday_short_name(weekday, locale);
        if i < 6 {
            result.push_str(&format!("{} ", short_name));
        } else {
            result.push_str(&short_name);
        }
    }

    if ctx.color {
        result.push_str(COLOR_RESET);
    }

    result
}

/// Format one grid cell with color highlighting.
///
/// Color priority: today > filler (dim) > weekend > regular
fn format_day(ctx: &GridContext, cell: &CalendarDay, weekday: Weekday, is_last: bool) -> String {
    let day_str = format!("{:>2}", cell.day_of_month);

    let formatted = if !ctx.color {
        day_str
    } else if cell.is_today {
        format!("{}{}{}", COLOR_REVERSE, day_str, COLOR_RESET)
    } else if !cell.is_current_month {
        format!("{}{}{}", COLOR_DIM, day_str, COLOR_RESET)
    } else if ctx.is_weekend(weekday) {
        format!("{}{}{}", COLOR_RED, day_str, COLOR_RESET)
    } else {
        day_str
    };

    if is_last {
        formatted
    } else {
        format!("{} ", formatted)
    }
}

/// Format a grid as lines: header, weekday row, six week rows.
pub fn format_month_grid(ctx: &GridContext, grid: &CalendarGridState) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    lines.push(format_month_header(&grid.month_label, MONTH_WIDTH, ctx.color));
    lines.push(format_weekday_headers(ctx));

    let weekday_order = get_weekday_order(ctx.week_start);
    for week in grid.days.chunks(DAYS_PER_WEEK) {
        let mut line = String::new();
        for (col, cell) in week.iter().enumerate() {
            let is_last = col == DAYS_PER_WEEK - 1;
            line.push_str(&format_day(ctx, cell, weekday_order[col], is_last));
        }
        lines.push(line);
    }

    lines
}

/// Print a single month grid.
pub fn print_month(ctx: &GridContext, cursor: MonthCursor) {
    let grid = cursor.build(ctx);
    for line in format_month_grid(ctx, &grid) {
        println!("{}", line);
    }
}

/// Print three months side by side (previous, current, next).
pub fn print_three_months(ctx: &GridContext, cursor: MonthCursor) {
    let grids = vec![
        cursor.advance(-1).build(ctx),
        cursor.build(ctx),
        cursor.advance(1).build(ctx),
    ];
    print_months_side_by_side(ctx, &grids);
}

/// Print multiple month grids side by side.
pub fn print_months_side_by_side(ctx: &GridContext, grids: &[CalendarGridState]) {
    let rendered: Vec<Vec<String>> = grids.iter().map(|g| format_month_grid(ctx, g)).collect();
    let max_height = rendered.iter().map(|g| g.len()).max().unwrap_or(0);

    for row in 0..max_height {
        let mut line = String::new();
        for (i, month_lines) in rendered.iter().enumerate() {
            if row < month_lines.len() {
                let text = &month_lines[row];
                line.push_str(text);
                let padding = MONTH_WIDTH.saturating_sub(text.width());
                for _ in 0..padding {
                    line.push(' ');
                }
            } else {
                for _ in 0..MONTH_WIDTH {
                    line.push(' ');
                }
            }
            if i < rendered.len() - 1 {
                for _ in 0..ctx.gutter_width {
                    line.push(' ');
                }
            }
        }
        println!("{}", line.trim_end());
    }
}

/// Print a run of consecutive months (-n mode), wrapped into rows.
pub fn print_months_count(ctx: &GridContext, cursor: MonthCursor, count: u32) {
    let months_per_row = ctx.months_per_row();

    let grids = (0..count)
        .map(|i| cursor.advance(i as i32).build(ctx))
        .collect::<Vec<_>>();

    for chunk in grids.chunks(months_per_row as usize) {
        print_months_side_by_side(ctx, chunk);
    }
}
