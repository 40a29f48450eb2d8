use pitchscout_analysis::{
    clean::{CleanConfig, DEFAULT_MIN_MINUTES},
    scoring::ScoreScale,
};
use serde::{Deserialize, Serialize};

/// Tunable settings, read from an optional JSON file.
///
/// Every field is optional in the file:
///
/// ```json
/// { "min_minutes": 450, "score": { "offset": 40, "slope": 0.6 }, "similar_limit": 11 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoutConfig {
    /// Rows need strictly more playing time than this
    pub min_minutes: f64,
    /// Mean percentile to category score mapping
    pub score: ScoreScale,
    /// Length of the similar players list, the player included
    pub similar_limit: usize,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            min_minutes: DEFAULT_MIN_MINUTES,
            score: ScoreScale::default(),
            similar_limit: 11,
        }
    }
}

impl ScoutConfig {
    pub fn clean_config(&self) -> CleanConfig {
        CleanConfig {
            min_minutes: self.min_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: ScoutConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScoutConfig::default());
        assert_eq!(config.min_minutes, 360.0);
        assert_eq!(config.score.offset, 40.0);
        assert_eq!(config.score.slope, 0.6);
        assert_eq!(config.similar_limit, 11);
    }

    #[test]
    fn test_partial_score_keeps_other_default() {
        let config: ScoutConfig =
            serde_json::from_str(r#"{ "min_minutes": 900, "score": { "slope": 0.5 } }"#).unwrap();
        assert_eq!(config.min_minutes, 900.0);
        assert_eq!(config.score.offset, 40.0);
        assert_eq!(config.score.slope, 0.5);
        assert_eq!(config.clean_config().min_minutes, 900.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(serde_json::from_str::<ScoutConfig>(r#"{ "min_minute": 900 }"#).is_err());
    }
}
