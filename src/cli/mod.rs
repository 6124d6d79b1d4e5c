//! Command-line interface handling using clap.

use crate::advice::Mood;
use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use clap::{Parser, Subcommand};

/// A reflective journal with daily mood tracking and advice
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Write today's entry, prompting for anything not given as a flag
    Write(WriteArgs),

    /// List past entries, newest first
    List {
        /// Print entries as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one past entry in full
    Show {
        /// Entry id, as printed by `list`
        id: i64,

        /// Print the entry as JSON
        #[clap(long)]
        json: bool,
    },

    /// Preview the advice for some text without saving anything
    Advice {
        /// Mood label (e.g. "Very Happy" or very-happy)
        #[clap(short = 'm', long)]
        mood: Option<Mood>,

        /// Text to analyse
        #[clap(required = true)]
        text: Vec<String>,
    },

    /// Print a journaling reminder at a fixed interval
    Remind {
        /// Seconds between reminders (overrides DAYBOOK_REMIND_INTERVAL)
        #[clap(short = 'i', long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,

        /// Stop after this many reminders
        #[clap(short = 'n', long)]
        count: Option<u64>,
    },
}

#[derive(clap::Args, Debug, Default, PartialEq)]
pub struct WriteArgs {
    /// Mood label (e.g. "Very Happy" or very-happy)
    #[clap(short = 'm', long)]
    pub mood: Option<Mood>,

    /// Answer to "What are you feeling right now?"
    #[clap(long)]
    pub feeling: Option<String>,

    /// Answer to "What is something that went well today?"
    #[clap(long)]
    pub went_well: Option<String>,

    /// Answer to "Is there anything bothering you at the moment?"
    #[clap(long)]
    pub bothering: Option<String>,
}

impl WriteArgs {
    /// True when at least one answer was given on the command line.
    ///
    /// In that case the entry is built from flags alone and no prompts are shown.
    pub fn has_answers(&self) -> bool {
        self.feeling.is_some() || self.went_well.is_some() || self.bothering.is_some()
    }

    /// The answers in question order, missing ones as empty strings.
    pub fn answers(&self) -> [String; 3] {
        [&self.feeling, &self.went_well, &self.bothering]
            .map(|answer| answer.clone().unwrap_or_default())
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
