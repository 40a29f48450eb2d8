use clap::Args;
use pitchscout_analysis::context::ScoutContext;

#[derive(Debug, Clone, Args)]
pub(crate) struct ClubsArg {
    /// Competition name, as listed by `leagues`
    #[arg(long)]
    pub league: String,
}

#[derive(Debug, Clone, Args)]
pub(crate) struct PlayersArg {
    /// Competition name, as listed by `leagues`
    #[arg(long)]
    pub league: String,

    /// Club name, as listed by `clubs`
    #[arg(long)]
    pub club: String,
}

pub(crate) fn run_leagues(context: &ScoutContext) -> anyhow::Result<()> {
    print_names(&context.leagues());
    Ok(())
}

pub(crate) fn run_clubs(context: &ScoutContext, arg: &ClubsArg) -> anyhow::Result<()> {
    let clubs = context.clubs(&arg.league);
    if clubs.is_empty() {
        anyhow::bail!("No clubs found for competition {}", arg.league);
    }
    print_names(&clubs);
    Ok(())
}

pub(crate) fn run_players(context: &ScoutContext, arg: &PlayersArg) -> anyhow::Result<()> {
    let players = context.players(&arg.league, &arg.club);
    if players.is_empty() {
        anyhow::bail!("No players found for {} in {}", arg.club, arg.league);
    }
    print_names(&players);
    Ok(())
}

fn print_names(names: &[&str]) {
    for name in names {
        println!("{name}");
    }
}
