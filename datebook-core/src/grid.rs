//! Month grid construction.
//!
//! Produces the 6×7 sheet of dates a month view renders: the active month's
//! days flanked by the trailing days of the previous month and the leading
//! days of the next. Pure date arithmetic; recurrence is evaluated elsewhere.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{DatebookError, DatebookResult};

/// Cells per grid: 6 weeks of 7 days.
pub const GRID_CELLS: usize = 42;

/// Days per row. Weeks start on Sunday.
pub const WEEK_COLUMNS: usize = 7;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// True for cells belonging to the previous or next month.
    pub muted: bool,
}

/// Build the 42-cell grid for `(year, month)`, `month` in 1..=12.
pub fn month_grid(year: i32, month: u32) -> DatebookResult<Vec<GridCell>> {
    let first = first_of_month(year, month)?;

    // Walk back to the Sunday on or before the 1st.
    let lead = first.weekday().num_days_from_sunday() as i64;
    let top_left = first - Duration::days(lead);

    let cells = (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = top_left + Duration::days(offset);
            GridCell {
                date,
                muted: date.month() != month || date.year() != year,
            }
        })
        .collect();

    Ok(cells)
}

/// Number of days in `(year, month)`.
pub fn days_in_month(year: i32, month: u32) -> DatebookResult<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> DatebookResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DatebookError::InvalidDate(format!("no such month: {year}-{month:02}")))
}
