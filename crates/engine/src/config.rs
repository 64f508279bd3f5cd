//! Scoring weight configuration.
//!
//! The proportional term weights for each ranking live here so deployments
//! can tune them; flat bonuses and penalties stay as constants next to the
//! scoring code. Each weight set must sum to 1.0.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 0.0001;

/// Weights for the proportional post-scoring terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostWeights {
    pub distance: f64,
    pub liked_tags: f64,
    pub food_type: f64,
    pub cuisine: f64,
    pub freshness: f64,
}

impl PostWeights {
    /// Validate that weights are non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), EngineError> {
        let terms = [
            self.distance,
            self.liked_tags,
            self.food_type,
            self.cuisine,
            self.freshness,
        ];
        validate_terms(&terms)
    }
}

impl Default for PostWeights {
    fn default() -> Self {
        Self {
            distance: 0.30,
            liked_tags: 0.25,
            food_type: 0.20,
            cuisine: 0.15,
            freshness: 0.10,
        }
    }
}

/// Weights for the baker-scoring terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BakerWeights {
    pub distance: f64,
    pub rating: f64,
    pub verified: f64,
    pub professional: f64,
}

impl BakerWeights {
    pub fn validate(&self) -> Result<(), EngineError> {
        let terms = [self.distance, self.rating, self.verified, self.professional];
        validate_terms(&terms)
    }
}

impl Default for BakerWeights {
    fn default() -> Self {
        Self {
            distance: 0.40,
            rating: 0.30,
            verified: 0.20,
            professional: 0.10,
        }
    }
}

fn validate_terms(terms: &[f64]) -> Result<(), EngineError> {
    if terms.iter().any(|w| *w < 0.0) {
        return Err(EngineError::InvalidWeights(
            "all weights must be non-negative".to_string(),
        ));
    }

    let sum: f64 = terms.iter().sum();
    if (sum - 1.0).abs() > EPSILON {
        return Err(EngineError::InvalidWeights(format!(
            "weights must sum to 1.0, got {:.4}",
            sum
        )));
    }

    Ok(())
}

/// Full engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub post_weights: PostWeights,
    #[serde(default)]
    pub baker_weights: BakerWeights,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.post_weights.validate()?;
        self.baker_weights.validate()?;
        Ok(())
    }
}
