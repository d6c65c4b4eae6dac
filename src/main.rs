mod commands;
mod dates;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "datebook")]
#[command(about = "Record dated items and view them on a month grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new item
    Add {
        /// Item title
        title: Option<String>,

        /// Anchor date (YYYY-MM-DD, or natural language like "next friday")
        #[arg(short, long)]
        date: Option<String>,

        /// Item kind: routine, schedule, or anniversary
        #[arg(short, long)]
        kind: Option<String>,

        /// Time of day (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Mark as an all-day item
        #[arg(long)]
        all_day: bool,

        /// Repeat rule: none, daily, weekly, monthly, or yearly
        #[arg(short, long)]
        repeat: Option<String>,
    },
    /// Show a month grid (default: the current month)
    Month {
        /// Month to show (YYYY-MM)
        month: Option<String>,
    },
    /// List items occurring on a date (default: today)
    On {
        /// Date to query (YYYY-MM-DD, or natural language)
        date: Option<String>,

        /// Print the items as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all stored items
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Add {
            title,
            date,
            kind,
            time,
            all_day,
            repeat,
        } => commands::add::run(title, date, kind, time, all_day, repeat),
        Commands::Month { month } => commands::month::run(month.as_deref()),
        Commands::On { date, json } => commands::on::run(date.as_deref(), json),
        Commands::List => commands::list::run(),
    }
}
