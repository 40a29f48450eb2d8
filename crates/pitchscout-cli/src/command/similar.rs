use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use pitchscout_analysis::context::{ScoutContext, SimilarPlayer};

use crate::{
    schema::config::ScoutConfig,
    util::{self, Output},
};

#[derive(Debug, Clone, Args)]
pub(crate) struct SimilarArg {
    /// Club name
    #[arg(long)]
    pub club: String,

    /// Player name
    #[arg(long)]
    pub player: String,

    /// Number of players to list, the player included (overrides the config file)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write the list as JSON
    #[arg(long)]
    pub json: bool,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(
    context: &ScoutContext,
    config: &ScoutConfig,
    arg: &SimilarArg,
) -> anyhow::Result<()> {
    let row = util::find_player(context, &arg.club, &arg.player)?;
    let limit = arg.limit.unwrap_or(config.similar_limit);
    let similar = context
        .similar_players(row, Some(limit))
        .with_context(|| format!("Failed to rank players similar to {}", arg.player))?;

    if arg.json {
        return Output::save_json(&similar, arg.output.clone());
    }

    let mut output = Output::from_output_path(arg.output.clone())?;
    write_similar_table(&mut output, &similar)
        .with_context(|| format!("Failed to write similar players to {}", output.display_path()))?;
    output.finish()
}

/// Ranks start at 1; the first row is the selected player.
fn write_similar_table<W>(w: &mut W, similar: &[SimilarPlayer<'_>]) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        w,
        "  {:>3} {:<28} {:<24} {:<4} {:>8}",
        "#", "Player", "Club", "Pos", "Distance"
    )?;
    // rank(3) + player(28) + club(24) + pos(4) + distance(8) + spaces(4)
    writeln!(w, "  {}", "-".repeat(71))?;
    for (rank, player) in (1..).zip(similar) {
        let id = player.identity;
        writeln!(
            w,
            "  {:>3} {:<28} {:<24} {:<4} {:>8.4}",
            rank,
            id.name,
            id.club,
            id.position.to_string(),
            player.distance,
        )?;
    }
    Ok(())
}
