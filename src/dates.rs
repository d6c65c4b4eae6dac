//! Date input parsing for the CLI.

use anyhow::Result;
use chrono::NaiveDate;

/// Abbreviated weekday/month names fuzzydate does not understand.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("tues", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("thur", "thursday"),
    ("thurs", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Parse a date argument: strict YYYY-MM-DD first, then natural language
/// ("tomorrow", "next friday", "mar 20") via fuzzydate.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse a YYYY-MM month argument.
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let (y, m) = input
        .split_once('-')
        .ok_or_else(|| anyhow::anyhow!("Expected YYYY-MM, got \"{}\"", input))?;

    let year: i32 = y
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid year in \"{}\"", input))?;
    let month: u32 = m
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid month in \"{}\"", input))?;

    if !(1..=12).contains(&month) {
        anyhow::bail!("Month out of range in \"{}\"", input);
    }

    Ok((year, month))
}

fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
