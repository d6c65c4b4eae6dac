//! Terminal rendering for datebook types.
//!
//! Extension traits that add colored terminal rendering to datebook-core
//! types using owo_colors.

use datebook_core::{Item, ItemKind, Repeat};
use owo_colors::OwoColorize;

/// Extension trait for rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Item {
    fn render(&self) -> String {
        let time = if self.all_day {
            "all-day".to_string()
        } else {
            match self.time {
                Some(t) => t.format("%H:%M").to_string(),
                None => String::new(),
            }
        };

        format!(
            "{:>7} {} {}{}",
            time,
            self.title,
            kind_tag(self.kind),
            repeat_suffix(self.repeat)
        )
    }
}

fn kind_tag(kind: ItemKind) -> String {
    match kind {
        ItemKind::Routine => "[routine]".cyan().to_string(),
        ItemKind::Schedule => "[schedule]".blue().to_string(),
        ItemKind::Anniversary => "[anniversary]".magenta().to_string(),
    }
}

fn repeat_suffix(repeat: Repeat) -> String {
    match repeat {
        Repeat::None | Repeat::Unrecognized => String::new(),
        _ => format!(" ({})", repeat).dimmed().to_string(),
    }
}
