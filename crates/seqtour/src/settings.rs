//! Command line and environment settings for the `seqtour` binary.

use std::path::PathBuf;

use clap::Parser;
use seqtour::Category;
use seqtour_render::{OutputDestination, OutputMode};

#[derive(Debug, Parser)]
#[command(name = "seqtour")]
#[command(about = "Walk through query-style sequence operations", long_about = None)]
pub struct Cli {
    /// Category to show (kebab-case), or `all`
    #[arg(env = "SEQTOUR_CATEGORY", default_value = "all")]
    pub category: Category,

    /// Output mode: auto, term, text, json, yaml or csv
    #[arg(long, env = "SEQTOUR_OUTPUT", default_value = "auto")]
    pub output: OutputMode,

    /// Write to this file instead of standard output
    #[arg(long, env = "SEQTOUR_OUT", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// List the categories instead of running them
    #[arg(long)]
    pub list: bool,
}

/// Everything a run needs, resolved from [`Cli`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub category: Category,
    pub mode: OutputMode,
    pub destination: OutputDestination,
    pub list: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            category: cli.category,
            mode: cli.output,
            destination: cli
                .out
                .map(OutputDestination::File)
                .unwrap_or_default(),
            list: cli.list,
        }
    }
}
