//! Boolean search filtering over the post catalog.
//!
//! Independent of the scoring engine: used by explicit search, not implicit
//! ranking. All criteria are conjunctive, and each one is skipped entirely
//! when its field is absent or empty, so empty criteria is the identity.

use crate::geo::haversine_distance;
use crate::tags::any_substring_match;
use crate::types::{Allergen, Coordinates, Post, SpecialTag};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Search criteria; absent fields impose no constraint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub food_types: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Posts carrying any of these allergens are excluded
    #[serde(default)]
    pub allergen_tags: Vec<Allergen>,
    #[serde(default)]
    pub special_tags: Vec<SpecialTag>,
    #[serde(default)]
    pub min_rating: Option<f32>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
}

impl SearchCriteria {
    /// Check if any filters are active
    pub fn is_empty(&self) -> bool {
        self.radius_km.is_none()
            && self.food_types.is_empty()
            && self.cuisines.is_empty()
            && self.allergen_tags.is_empty()
            && self.special_tags.is_empty()
            && self.min_rating.is_none()
            && self.price_range.is_none()
    }
}

/// Filter a post catalog against search criteria
///
/// Returns the matching subsequence in input order.
#[instrument(skip_all, fields(candidates = posts.len()))]
pub fn filter_posts(
    posts: &[Post],
    criteria: &SearchCriteria,
    user_coordinates: Option<Coordinates>,
) -> Vec<Post> {
    let kept: Vec<Post> = posts
        .iter()
        .filter(|post| matches(post, criteria, user_coordinates))
        .cloned()
        .collect();

    debug!(kept = kept.len(), "filtered post catalog");
    kept
}

fn matches(post: &Post, criteria: &SearchCriteria, user_coordinates: Option<Coordinates>) -> bool {
    // Radius needs both endpoints; missing data skips the filter rather than
    // excluding the post
    if let Some(radius) = criteria.radius_km {
        let author_coords = post.author.as_ref().and_then(|a| a.coordinates);
        if let (Some(user_coords), Some(author_coords)) = (user_coordinates, author_coords) {
            if haversine_distance(user_coords, author_coords) > radius {
                return false;
            }
        }
    }

    if !criteria.food_types.is_empty() && !any_substring_match(&criteria.food_types, &post.tags) {
        return false;
    }

    if !criteria.cuisines.is_empty() && !any_substring_match(&criteria.cuisines, &post.tags) {
        return false;
    }

    // Safety exclusion, same semantics as the scoring engine's hard gate
    if post
        .allergen_tags
        .iter()
        .any(|a| criteria.allergen_tags.contains(a))
    {
        return false;
    }

    if !criteria.special_tags.is_empty()
        && !post
            .special_tags
            .iter()
            .any(|t| criteria.special_tags.contains(t))
    {
        return false;
    }

    // Posts without author data pass the rating bar; absence of data is not
    // treated as failing it
    if let Some(min_rating) = criteria.min_rating {
        if let Some(author) = &post.author {
            if author.rating < min_rating {
                return false;
            }
        }
    }

    if let Some(range) = criteria.price_range {
        if let Some(price) = post.price {
            if price < range.min || price > range.max {
                return false;
            }
        }
    }

    true
}
