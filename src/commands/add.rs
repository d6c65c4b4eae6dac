//! Create a new item.

use anyhow::Result;
use chrono::NaiveTime;
use datebook_core::datebook::Datebook;
use datebook_core::{Item, ItemKind, Repeat};
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::dates::parse_date;

pub fn run(
    title: Option<String>,
    date: Option<String>,
    kind: Option<String>,
    time: Option<String>,
    all_day: bool,
    repeat: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none();

    // --- Kind ---
    let kind = match kind {
        Some(k) => k.parse::<ItemKind>()?,
        None if interactive => prompt_kind()?,
        None => ItemKind::Schedule,
    };

    // --- Title ---
    let title = match title {
        Some(t) if !t.trim().is_empty() => t,
        Some(_) => anyhow::bail!("Title must not be empty"),
        None => prompt_title()?,
    };

    // --- Date ---
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => prompt_with_retry("  When?", parse_date)?,
    };

    // --- Time / all-day ---
    let (time, all_day) = resolve_time(time.as_deref(), all_day, interactive)?;

    // --- Repeat ---
    let repeat = match repeat {
        Some(r) => r.parse::<Repeat>()?,
        None if interactive => prompt_repeat(kind)?,
        None => Repeat::default_for(kind),
    };

    let mut item = Item::new(kind, title, date).with_repeat(repeat);
    if let Some(t) = time {
        item = item.with_time(t);
    }
    if all_day {
        item = item.with_all_day();
    }

    let datebook = Datebook::load()?;
    let mut store = datebook.store();
    store.append(item.clone())?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} on {}", item.title, item.date).green()
    );

    Ok(())
}

/// Prompt for a title, re-prompting until it is non-empty.
fn prompt_title() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Title")
            .allow_empty(true)
            .interact_text()?;
        if !input.trim().is_empty() {
            return Ok(input);
        }
        eprintln!("  {}", "Title must not be empty".red());
    }
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_kind() -> Result<ItemKind> {
    let kinds = [ItemKind::Schedule, ItemKind::Routine, ItemKind::Anniversary];
    let labels: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();

    let selection = Select::new()
        .with_prompt("  Kind")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(kinds[selection])
}

fn prompt_repeat(kind: ItemKind) -> Result<Repeat> {
    let repeats = [
        Repeat::None,
        Repeat::Daily,
        Repeat::Weekly,
        Repeat::Monthly,
        Repeat::Yearly,
    ];
    let labels: Vec<String> = repeats.iter().map(|r| r.to_string()).collect();
    let default = repeats
        .iter()
        .position(|r| *r == Repeat::default_for(kind))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Repeat")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(repeats[selection])
}

/// Resolve the time-of-day / all-day pair from flags or prompts.
fn resolve_time(
    time: Option<&str>,
    all_day: bool,
    interactive: bool,
) -> Result<(Option<NaiveTime>, bool)> {
    if all_day {
        if time.is_some() {
            anyhow::bail!("--all-day and --time are mutually exclusive");
        }
        return Ok((None, true));
    }

    if let Some(t) = time {
        return Ok((Some(parse_time(t)?), false));
    }

    if !interactive {
        return Ok((None, false));
    }

    if Confirm::new()
        .with_prompt("  All day?")
        .default(false)
        .interact()?
    {
        return Ok((None, true));
    }

    loop {
        let input: String = Input::new()
            .with_prompt("  Time? (HH:MM, skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.is_empty() {
            return Ok((None, false));
        }
        match parse_time(&input) {
            Ok(t) => return Ok((Some(t), false)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| anyhow::anyhow!("Could not parse time: \"{}\" (expected HH:MM)", input))
}
