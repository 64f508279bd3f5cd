//! xFood Recommendation & Filtering Engine
//!
//! Pure, deterministic scoring and filtering over three input collections:
//! the acting user, a candidate catalog (posts or bakers), and a log of past
//! interactions. No I/O, no clocks, no shared state — every result is a
//! function of its arguments, including an injected reference time.
//!
//! ## Modules
//!
//! - `types`: domain types (users, posts, bakers, interactions)
//! - `geo`: haversine distance
//! - `freshness`: recency decay tiers
//! - `posts`: post recommendation scoring
//! - `bakers`: baker recommendation scoring
//! - `filters`: boolean search filtering
//! - `config`: tunable scoring weights with validation

pub mod bakers;
pub mod config;
pub mod error;
pub mod filters;
pub mod freshness;
pub mod geo;
pub mod posts;
mod tags;
pub mod types;

pub use bakers::score_bakers;
pub use config::{BakerWeights, EngineConfig, PostWeights};
pub use error::EngineError;
pub use filters::{filter_posts, PriceRange, SearchCriteria};
pub use freshness::freshness_score;
pub use geo::haversine_distance;
pub use posts::score_posts;
pub use types::{
    Allergen, BakerProfile, Coordinates, Interaction, InteractionType, KitchenType, Post,
    Recommendation, SpecialTag, TasteProfile, UserProfile,
};

use chrono::{DateTime, Utc};

/// Engine instance carrying validated scoring weights
///
/// Thin wrapper over the pure module functions for callers that want one
/// configured entry point.
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine, rejecting invalid weight configurations
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_default_config() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn score_posts(
        &self,
        user: &UserProfile,
        posts: &[Post],
        interactions: &[Interaction],
        now: DateTime<Utc>,
    ) -> Vec<Recommendation> {
        posts::score_posts(user, posts, interactions, &self.config.post_weights, now)
    }

    pub fn score_bakers(&self, user: &UserProfile, bakers: &[BakerProfile]) -> Vec<Recommendation> {
        bakers::score_bakers(user, bakers, &self.config.baker_weights)
    }

    pub fn filter_posts(
        &self,
        posts: &[Post],
        criteria: &SearchCriteria,
        user_coordinates: Option<Coordinates>,
    ) -> Vec<Post> {
        filters::filter_posts(posts, criteria, user_coordinates)
    }
}
