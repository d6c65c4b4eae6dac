//! Month grid view.
//!
//! The consumer wiring of grid → recurrence: every cell date is queried
//! against the store, muted cells are dimmed, today is highlighted, and days
//! with occurrences get a marker. The month's agenda follows the grid.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use datebook_core::datebook::Datebook;
use datebook_core::grid::{month_grid, GridCell, WEEK_COLUMNS};
use datebook_core::store::Store;
use owo_colors::OwoColorize;

use crate::dates::parse_month;
use crate::render::Render;

pub fn run(month_arg: Option<&str>) -> Result<()> {
    let today = Local::now().date_naive();
    let (year, month) = match month_arg {
        Some(arg) => parse_month(arg)?,
        None => (today.year(), today.month()),
    };

    let datebook = Datebook::load()?;
    let store = datebook.store();

    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("No such month: {}-{:02}", year, month))?;
    let cells = month_grid(year, month)?;

    println!();
    println!("  {}", first.format("%B %Y").to_string().bold());
    println!("  Su  Mo  Tu  We  Th  Fr  Sa");

    for week in cells.chunks(WEEK_COLUMNS) {
        let row: Vec<String> = week
            .iter()
            .map(|cell| render_cell(cell, today, &store))
            .collect();
        println!("  {}", row.join(" "));
    }

    let mut printed_any = false;
    for cell in cells.iter().filter(|c| !c.muted) {
        let occurrences = store.occurrences_on(cell.date);
        if occurrences.is_empty() {
            continue;
        }
        println!();
        println!("  {}", cell.date.format("%a %b %-d").to_string().bold());
        for item in occurrences {
            println!("    {}", item.render());
        }
        printed_any = true;
    }

    if !printed_any {
        println!();
        println!("  {}", "No items this month".dimmed());
    }

    Ok(())
}

fn render_cell(cell: &GridCell, today: NaiveDate, store: &Store) -> String {
    let day = format!("{:>2}", cell.date.day());

    let day = if cell.date == today {
        day.reversed().to_string()
    } else if cell.muted {
        day.dimmed().to_string()
    } else {
        day
    };

    if store.occurrences_on(cell.date).is_empty() {
        format!("{} ", day)
    } else {
        format!("{}{}", day, "*".cyan())
    }
}
