//! Player profile command
//!
//! Prints a player's category scores, key stats against positional peers,
//! every comparison stat and the touches heatmap.

mod table;

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use pitchscout_analysis::context::ScoutContext;

use crate::util::{self, Output};

#[derive(Debug, Clone, Args)]
pub(crate) struct ProfileArg {
    /// Club name
    #[arg(long)]
    pub club: String,

    /// Player name
    #[arg(long)]
    pub player: String,

    /// Key stats to show instead of the position's defaults (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub key_stats: Vec<String>,

    /// Write the profile as JSON
    #[arg(long)]
    pub json: bool,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(context: &ScoutContext, arg: &ProfileArg) -> anyhow::Result<()> {
    let row = util::find_player(context, &arg.club, &arg.player)?;
    let profile = if arg.key_stats.is_empty() {
        context.profile(row)
    } else {
        context.profile_with_key_stats(row, &arg.key_stats)
    }
    .with_context(|| format!("Failed to build profile of {}", arg.player))?;

    if arg.json {
        return Output::save_json(&profile, arg.output.clone());
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    table::write_profile(&mut output, &profile)
        .with_context(|| format!("Failed to write profile to {}", output.display_path()))?;
    output.finish()
}
