//! Recurrence evaluation.
//!
//! Decides whether an item occurs on a queried calendar day. Pure date
//! arithmetic with no I/O; callers feed it the dates produced by the month
//! grid.

use chrono::{Datelike, NaiveDate};

use crate::item::{Item, Repeat};

/// Whether `item` occurs on `target`.
///
/// A non-repeating item occurs only on its anchor date. A repeating item
/// starts existing at its anchor date and never occurs before it. Monthly
/// and yearly rules match by strict field equality: a day-31 anchor skips
/// months with fewer days, and a Feb 29 anchor skips non-leap years.
pub fn occurs_on(item: &Item, target: NaiveDate) -> bool {
    let start = item.date;

    match item.repeat {
        Repeat::None => target == start,
        // The anchor check runs before any frequency rule.
        _ if target < start => false,
        Repeat::Daily => true,
        Repeat::Weekly => target.weekday() == start.weekday(),
        Repeat::Monthly => target.day() == start.day(),
        Repeat::Yearly => target.month() == start.month() && target.day() == start.day(),
        Repeat::Unrecognized => false,
    }
}

/// Filter `items` down to those occurring on `date`, preserving order.
pub fn occurrences_on<'a>(items: &'a [Item], date: NaiveDate) -> Vec<&'a Item> {
    items.iter().filter(|item| occurs_on(item, date)).collect()
}
