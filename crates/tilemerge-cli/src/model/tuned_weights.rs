use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tilemerge_solver::move_scorer::ScoreWeights;

/// Weights produced by a tuning run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TunedWeights {
    pub name: String,
    pub trained_at: DateTime<Utc>,
    /// Mean final score of the weights in their last generation.
    pub mean_score: f64,
    pub weights: ScoreWeights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "name": "tuned",
            "trained_at": "2024-05-01T12:00:00Z",
            "mean_score": 2345.5,
            "weights": { "empty_space": -5, "merge": 185 }
        }"#;
        let model: TunedWeights = serde_json::from_str(json).unwrap();
        assert_eq!(model.name, "tuned");
        assert_eq!(
            model.weights,
            ScoreWeights {
                empty_space: -5,
                merge: 185
            }
        );

        let back = serde_json::to_string(&model).unwrap();
        let again: TunedWeights = serde_json::from_str(&back).unwrap();
        assert_eq!(again, model);
    }
}
