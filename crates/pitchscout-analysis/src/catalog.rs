//! Fixed stat catalog
//!
//! Column identifiers are the header names of the season file. Groups are
//! plain ordered lists of those names and may overlap.
//!
//! # Groups
//!
//! | group | use |
//! |---|---|
//! | [`DISPLAY_GROUPS`] | the seven display groups; concatenated they form the comparison projection |
//! | [`METRIC_GROUPS`] | the five category-score subgroups; concatenated they form the key-metrics projection |
//! | [`key_stats`] | per-position radar stats |

use serde::Serialize;

use crate::position::Position;

/// Identity and playing-time columns every input must carry.
pub mod identity {
    pub const PLAYER: &str = "Player";
    pub const NATION: &str = "Nation";
    pub const POSITION: &str = "Pos";
    pub const CLUB: &str = "Squad";
    pub const COMPETITION: &str = "Comp";
    pub const AGE: &str = "Age";
    pub const BORN: &str = "Born";
    pub const MINUTES: &str = "Playing Time Min";

    pub const ALL: &[&str] = &[
        PLAYER,
        NATION,
        POSITION,
        CLUB,
        COMPETITION,
        AGE,
        BORN,
        MINUTES,
    ];
}

/// A named ordered list of stat columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatGroup {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl StatGroup {
    #[must_use]
    pub const fn new(name: &'static str, columns: &'static [&'static str]) -> Self {
        Self { name, columns }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub const DEFENSE: StatGroup = StatGroup::new(
    "defense",
    &[
        "Tackles Tkl%",
        "Foul Prev%",
        "Deep DAs",
        "High DAs",
        "Tackles TklW",
        "Int",
        "Tackles Def 3rd",
        "Tackles Mid 3rd",
        "Tackles Att 3rd",
    ],
);

pub const AERIAL: StatGroup = StatGroup::new("aerial", &["Aerial Duels Won", "Aerial Duels Won%"]);

pub const PASSING: StatGroup = StatGroup::new(
    "passing",
    &[
        "Short Cmp%",
        "Medium Cmp%",
        "Long Cmp%",
        "Total Cmp",
        "Total PrgDist",
        "Progression PrgP",
        "%Short Att",
        "%Medium Att",
        "%Long Att",
    ],
);

pub const CARRYING: StatGroup = StatGroup::new(
    "carrying",
    &[
        "Take-Ons Succ%",
        "Carries Carries",
        "Carries PrgDist",
        "Carries PrgC",
    ],
);

pub const CREATION: StatGroup = StatGroup::new(
    "creation",
    &[
        "xAG",
        "Expected A-xAG",
        "SCA SCA",
        "KP",
        "1/3",
        "PPA",
        "CrsPA",
    ],
);

pub const SHOOTING: StatGroup = StatGroup::new(
    "shooting",
    &[
        "Expected np:G-xG",
        "Expected npxG/Sh",
        "Expected npxG",
        "Standard Gls",
        "Standard Sh",
    ],
);

/// Share of touches per pitch zone, own penalty area first.
pub const TOUCHES: StatGroup = StatGroup::new(
    "touches",
    &[
        "Touches %Def Pen",
        "Touches %Def 3rd",
        "Touches %Mid 3rd",
        "Touches %Att 3rd",
        "Touches %Att Pen",
    ],
);

pub const DISPLAY_GROUPS: [StatGroup; 7] =
    [DEFENSE, AERIAL, PASSING, CARRYING, CREATION, SHOOTING, TOUCHES];

pub const DEFENDING_METRICS: StatGroup = StatGroup::new(
    "defending",
    &[
        "Tackles Tkl%",
        "Foul Prev%",
        "Deep DAs",
        "High DAs",
        "Tackles TklW",
        "Int",
        "Aerial Duels Won%",
    ],
);

pub const PASSING_METRICS: StatGroup = StatGroup::new(
    "passing",
    &[
        "Short Cmp%",
        "Medium Cmp%",
        "Long Cmp%",
        "Total Cmp",
        "Total PrgDist",
        "Progression PrgP",
    ],
);

pub const CARRYING_METRICS: StatGroup = StatGroup::new(
    "carrying",
    &[
        "Take-Ons Succ%",
        "Carries Carries",
        "Carries PrgDist",
        "Carries PrgC",
    ],
);

pub const CREATION_METRICS: StatGroup = StatGroup::new(
    "creation",
    &["xAG", "Expected A-xAG", "SCA SCA", "KP", "1/3"],
);

pub const SHOOTING_METRICS: StatGroup = StatGroup::new(
    "shooting",
    &[
        "Expected np:G-xG",
        "Expected npxG/Sh",
        "Expected npxG",
        "Standard Gls",
    ],
);

pub const METRIC_GROUPS: [StatGroup; 5] = [
    DEFENDING_METRICS,
    PASSING_METRICS,
    CARRYING_METRICS,
    CREATION_METRICS,
    SHOOTING_METRICS,
];

const DEFENDER_KEY_STATS: StatGroup = StatGroup::new(
    "defender key stats",
    &[
        "Deep DAs",
        "Aerial Duels Won%",
        "High DAs",
        "Tackles Tkl%",
        "Total Cmp",
        "Progression PrgP",
        "Carries PrgC",
        "CrsPA",
    ],
);

const DEFENSIVE_MID_KEY_STATS: StatGroup = StatGroup::new(
    "defensive midfielder key stats",
    &[
        "High DAs",
        "Tackles Tkl%",
        "Total Cmp",
        "Progression PrgP",
        "Carries PrgC",
        "CrsPA",
        "KP",
    ],
);

const MIDFIELDER_KEY_STATS: StatGroup = StatGroup::new(
    "midfielder key stats",
    &[
        "High DAs",
        "Tackles Tkl%",
        "Total Cmp",
        "Progression PrgP",
        "Carries PrgC",
        "Take-Ons Succ%",
        "CrsPA",
        "KP",
        "xAG",
    ],
);

const ATTACKING_MID_KEY_STATS: StatGroup = StatGroup::new(
    "attacking midfielder key stats",
    &[
        "High DAs",
        "Total Cmp",
        "Progression PrgP",
        "Carries PrgC",
        "Take-Ons Succ%",
        "CrsPA",
        "KP",
        "xAG",
        "Expected npxG",
    ],
);

const FORWARD_KEY_STATS: StatGroup = StatGroup::new(
    "forward key stats",
    &[
        "High DAs",
        "Progression PrgP",
        "Carries PrgC",
        "Take-Ons Succ%",
        "KP",
        "xAG",
        "Expected npxG",
        "Expected np:G-xG",
    ],
);

/// Radar stats shown by default for a position bucket.
#[must_use]
pub const fn key_stats(position: Position) -> StatGroup {
    match position {
        Position::Defender => DEFENDER_KEY_STATS,
        Position::DefensiveMid => DEFENSIVE_MID_KEY_STATS,
        Position::Midfielder => MIDFIELDER_KEY_STATS,
        Position::AttackingMid => ATTACKING_MID_KEY_STATS,
        Position::Forward => FORWARD_KEY_STATS,
    }
}

/// Broad projection used for similarity and on-screen percentiles.
#[must_use]
pub fn comparison_columns() -> Vec<&'static str> {
    DISPLAY_GROUPS
        .iter()
        .flat_map(|group| group.columns.iter().copied())
        .collect()
}

/// Narrow projection feeding the category scores.
#[must_use]
pub fn key_metric_columns() -> Vec<&'static str> {
    METRIC_GROUPS
        .iter()
        .flat_map(|group| group.columns.iter().copied())
        .collect()
}

/// Every distinct stat column referenced anywhere in the catalog, in first
/// appearance order.
#[must_use]
pub fn required_stat_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = vec![];
    let all = comparison_columns()
        .into_iter()
        .chain(key_metric_columns())
        .chain(Position::ALL.iter().flat_map(|p| key_stats(*p).columns.iter().copied()));
    for column in all {
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
    columns
}
