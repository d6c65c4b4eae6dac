//! List the full stored collection.

use anyhow::Result;
use datebook_core::datebook::Datebook;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run() -> Result<()> {
    let datebook = Datebook::load()?;
    let store = datebook.store();

    if store.items().is_empty() {
        println!("{}", "No items yet".dimmed());
        println!("Add one with: datebook add \"Dentist\" --date 2026-08-10");
        return Ok(());
    }

    let mut items: Vec<_> = store.items().iter().collect();
    items.sort_by_key(|item| (item.date, item.time));

    for item in items {
        println!("{}  {}", item.date.to_string().bold(), item.render());
    }

    Ok(())
}
