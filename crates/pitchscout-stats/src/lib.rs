//! Numeric primitives for the pitchscout project.
//!
//! This crate provides the small set of statistical tools the analysis
//! pipeline is built on:
//!
//! - **Descriptive statistics**: mean, median, and variance under either a
//!   population or a sample divisor, plus z-scores with a defined result for
//!   datasets without spread
//! - **Normal distribution**: standard normal CDF (via `statrs`) used to
//!   map z-scores onto a 0-100 percentile scale
//! - **Distance**: cosine similarity and cosine distance with a defined
//!   result for zero-magnitude vectors
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`normal`]: Standard normal CDF and percentile mapping
//! - [`distance`]: Cosine similarity between stat vectors
//!
//! # Examples
//!
//! ## From raw values to percentiles
//!
//! ```
//! use pitchscout_stats::{
//!     descriptive::{DescriptiveStats, Dispersion},
//!     normal::z_to_percentile,
//! };
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! let z = stats.z_score(3.0, Dispersion::Population);
//! assert_eq!(z_to_percentile(z), 50.0);
//! ```
//!
//! ## Comparing two stat vectors
//!
//! ```
//! use pitchscout_stats::distance::cosine_distance;
//!
//! let a = [80.0, 12.0, 55.0];
//! let b = [78.0, 15.0, 50.0];
//! assert!(cosine_distance(&a, &b) < 0.01);
//! ```

pub mod descriptive;
pub mod distance;
pub mod normal;
