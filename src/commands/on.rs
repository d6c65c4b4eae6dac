//! List items occurring on a single date.

use anyhow::Result;
use chrono::Local;
use datebook_core::datebook::Datebook;
use owo_colors::OwoColorize;

use crate::dates::parse_date;
use crate::render::Render;

pub fn run(date_arg: Option<&str>, json: bool) -> Result<()> {
    let date = match date_arg {
        Some(arg) => parse_date(arg)?,
        None => Local::now().date_naive(),
    };

    let datebook = Datebook::load()?;
    let store = datebook.store();
    let occurrences = store.occurrences_on(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&occurrences)?);
        return Ok(());
    }

    println!("{}", date.format("%a %b %-d, %Y").to_string().bold());

    if occurrences.is_empty() {
        println!("{}", "No items".dimmed());
        return Ok(());
    }

    for item in occurrences {
        println!("  {}", item.render());
    }

    Ok(())
}
