use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{schema::config::ScoutConfig, util};

use self::{
    browse::{ClubsArg, PlayersArg},
    profile::ProfileArg,
    similar::SimilarArg,
};

mod browse;
mod profile;
mod similar;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the season player stats CSV file
    #[arg(long)]
    data: PathBuf,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum playing time in minutes (overrides the config file)
    #[arg(long)]
    min_minutes: Option<f64>,

    /// What to show
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List competitions
    Leagues,
    /// List clubs of a competition
    Clubs(#[clap(flatten)] ClubsArg),
    /// List players of a club
    Players(#[clap(flatten)] PlayersArg),
    /// Show category scores and stat percentiles of a player
    Profile(#[clap(flatten)] ProfileArg),
    /// Show the players most similar to a player
    Similar(#[clap(flatten)] SimilarArg),
}

impl CommandArgs {
    fn scout_config(&self) -> anyhow::Result<ScoutConfig> {
        let mut config = match &self.config {
            Some(path) => util::read_config_file(path)?,
            None => ScoutConfig::default(),
        };
        if let Some(min_minutes) = self.min_minutes {
            config.min_minutes = min_minutes;
        }
        Ok(config)
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let config = args.scout_config()?;
    let context = util::load_context(&args.data, &config)?;

    match args.mode {
        Mode::Leagues => browse::run_leagues(&context)?,
        Mode::Clubs(arg) => browse::run_clubs(&context, &arg)?,
        Mode::Players(arg) => browse::run_players(&context, &arg)?,
        Mode::Profile(arg) => profile::run(&context, &arg)?,
        Mode::Similar(arg) => similar::run(&context, &config, &arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_min_minutes_flag_overrides_default() {
        let args = CommandArgs::try_parse_from([
            "pitchscout",
            "--data",
            "season.csv",
            "--min-minutes",
            "900",
            "leagues",
        ])
        .unwrap();
        let config = args.scout_config().unwrap();
        assert_eq!(config.min_minutes, 900.0);
        assert_eq!(config.similar_limit, 11);
    }

    #[test]
    fn test_profile_key_stats_are_comma_separated() {
        let args = CommandArgs::try_parse_from([
            "pitchscout",
            "--data",
            "season.csv",
            "profile",
            "--club",
            "Arsenal",
            "--player",
            "Declan Rice",
            "--key-stats",
            "Int,Tkl+Int",
        ])
        .unwrap();
        let Mode::Profile(arg) = args.mode else {
            panic!("expected profile mode");
        };
        assert_eq!(arg.key_stats, ["Int", "Tkl+Int"]);
    }
}
