//! Position label canonicalization
//!
//! Season files label positions with one or more comma separated roles
//! (`"DF"`, `"MF,FW"`, ...). Every outfield label is folded into one of five
//! buckets by looking at the *set* of roles, so `"DF,FW"` and `"FW,DF"` land
//! in the same bucket.
//!
//! | roles | bucket |
//! |---|---|
//! | DF | defender |
//! | MF | midfielder |
//! | FW | forward |
//! | DF + MF | defensive midfielder |
//! | DF + FW | defender |
//! | MF + FW | attacking midfielder |
//! | DF + MF + FW | midfielder |
//!
//! A goalkeeper token alongside outfield roles is ignored; a label made only
//! of goalkeeper tokens is [`Canonical::Goalkeeper`].

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown position label '{label}'")]
pub struct UnknownPositionError {
    #[error(not(source))]
    pub label: String,
}

/// Canonical outfield position bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
pub enum Position {
    #[display("DF")]
    #[serde(rename = "DF")]
    Defender,
    #[display("DM")]
    #[serde(rename = "DM")]
    DefensiveMid,
    #[display("MF")]
    #[serde(rename = "MF")]
    Midfielder,
    #[display("AM")]
    #[serde(rename = "AM")]
    AttackingMid,
    #[display("FW")]
    #[serde(rename = "FW")]
    Forward,
}

impl Position {
    pub const ALL: [Self; 5] = [
        Self::Defender,
        Self::DefensiveMid,
        Self::Midfielder,
        Self::AttackingMid,
        Self::Forward,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Defender => "defender",
            Self::DefensiveMid => "defensive midfielder",
            Self::Midfielder => "midfielder",
            Self::AttackingMid => "attacking midfielder",
            Self::Forward => "forward",
        }
    }
}

/// Result of canonicalizing a raw position label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Canonical {
    Goalkeeper,
    Outfield(Position),
}

#[derive(Debug, Default, Clone, Copy)]
struct Roles {
    goalkeeper: bool,
    defender: bool,
    midfielder: bool,
    forward: bool,
}

impl Roles {
    fn parse(label: &str) -> Option<Self> {
        let mut roles = Self::default();
        let mut any = false;
        for token in label.split([',', '+']).map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let slot = match token.to_ascii_lowercase().as_str() {
                "gk" | "goalkeeper" => &mut roles.goalkeeper,
                "df" | "defender" => &mut roles.defender,
                "mf" | "midfielder" => &mut roles.midfielder,
                "fw" | "forward" => &mut roles.forward,
                _ => return None,
            };
            *slot = true;
            any = true;
        }
        any.then_some(roles)
    }
}

/// Folds a raw position label into its bucket.
///
/// ```
/// use pitchscout_analysis::position::{canonicalize, Canonical, Position};
///
/// assert_eq!(canonicalize("DF,FW").unwrap(), Canonical::Outfield(Position::Defender));
/// assert_eq!(canonicalize("FW,DF").unwrap(), Canonical::Outfield(Position::Defender));
/// assert_eq!(canonicalize("MF,FW").unwrap(), Canonical::Outfield(Position::AttackingMid));
/// assert_eq!(canonicalize("GK").unwrap(), Canonical::Goalkeeper);
/// assert!(canonicalize("LB").is_err());
/// ```
pub fn canonicalize(label: &str) -> Result<Canonical, UnknownPositionError> {
    let roles = Roles::parse(label).ok_or_else(|| UnknownPositionError {
        label: label.to_owned(),
    })?;
    let position = match (roles.defender, roles.midfielder, roles.forward) {
        (false, false, false) => {
            debug_assert!(roles.goalkeeper);
            return Ok(Canonical::Goalkeeper);
        }
        (true, false, false) | (true, false, true) => Position::Defender,
        (false, true, false) | (true, true, true) => Position::Midfielder,
        (false, false, true) => Position::Forward,
        (true, true, false) => Position::DefensiveMid,
        (false, true, true) => Position::AttackingMid,
    };
    Ok(Canonical::Outfield(position))
}
