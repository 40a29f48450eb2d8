//! Season player analytics: cleaning, percentile normalization, category
//! scores and similar-player lookup
//!
//! # Overview
//!
//! Data flows one way:
//!
//! ```text
//! season CSV
//!     ↓  dataset::RawTable::from_csv_path
//! RawTable
//!     ↓  clean::clean
//! CleanedTable
//!     ↓  normalize::normalize (three views)
//! PercentileTable × 3
//!     ↓  context::ScoutContext
//! profile / category scores / similar players
//! ```
//!
//! 1. **Load** ([`dataset::RawTable`]): untyped named columns
//! 2. **Clean** ([`clean::clean`]): drop goalkeepers and low-minute rows,
//!    zero-fill, canonicalize positions ([`position`])
//! 3. **Normalize** ([`normalize::normalize`]): z-score per group, mapped
//!    through the standard normal CDF to a 0-100 percentile
//! 4. **Score** ([`scoring`]): affine-rescaled mean percentile per category
//! 5. **Compare** ([`similarity::rank_by_similarity`]): cosine distance
//!    against every player
//!
//! The stat columns and groups involved are fixed in [`catalog`].
//!
//! # Example
//!
//! ```no_run
//! use pitchscout_analysis::{
//!     clean::{CleanConfig, clean},
//!     context::ScoutContext,
//!     dataset::RawTable,
//!     scoring::ScoreScale,
//! };
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let raw = RawTable::from_csv_path("2324_top_8_raw.csv")?;
//! let cleaned = clean(&raw, &CleanConfig::default())?;
//! let ctx = ScoutContext::new(cleaned, ScoreScale::default())?;
//!
//! if let Some(row) = ctx.find_player("Arsenal", "Declan Rice") {
//!     let profile = ctx.profile(row)?;
//!     for score in &profile.scores {
//!         println!("{}: {}", score.category, score.score);
//!     }
//!     for similar in ctx.similar_players(row, Some(11))? {
//!         println!("{} ({:.3})", similar.identity.name, similar.distance);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod clean;
pub mod context;
pub mod dataset;
pub mod normalize;
pub mod position;
pub mod scoring;
pub mod similarity;
