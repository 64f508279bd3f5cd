//! Post recommendation scoring.
//!
//! Additive multi-factor scoring over a candidate post catalog: proximity,
//! taste-tag overlap, freshness decay, and social proof, with a hard allergen
//! veto and multiplicative dampening of previously-seen items. Pure function
//! of its inputs; the reference time is injected by the caller.

use crate::config::PostWeights;
use crate::freshness::freshness_score;
use crate::geo::haversine_distance;
use crate::tags::any_substring_match;
use crate::types::{
    Coordinates, Interaction, InteractionType, Post, Recommendation, TasteProfile, UserProfile,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

const DISLIKED_TAG_PENALTY: f64 = 0.15;
const RATING_BONUS: f64 = 0.05;
const RATING_BONUS_THRESHOLD: f32 = 4.5;
const SOCIAL_PROOF_BONUS: f64 = 0.05;
const SOCIAL_PROOF_THRESHOLD: u32 = 20;
const VIEW_DAMPENING: f64 = 0.8;
const LIKE_DAMPENING: f64 = 0.6;
const DEFAULT_SCORE: f64 = 0.5;

const ALLERGEN_REASON: &str = "Contains allergens you avoid";
const DEFAULT_REASON: &str = "Default recommendation";
const GENERAL_REASON: &str = "General recommendation";

/// Rank candidate posts for a user
///
/// Self-authored posts are always excluded. If the user has no taste profile
/// or no coordinates every remaining post gets a flat default score. Output
/// is sorted descending by score; ties keep input order.
#[instrument(skip_all, fields(user_id = %user.id, candidates = posts.len()))]
pub fn score_posts(
    user: &UserProfile,
    posts: &[Post],
    interactions: &[Interaction],
    weights: &PostWeights,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let candidates = posts.iter().filter(|p| p.author_id != user.id);

    let mut results: Vec<Recommendation> = match (user.coordinates, &user.taste_profile) {
        (Some(coords), Some(taste)) => {
            let seen = collapse_interactions(user.id, interactions);
            candidates
                .map(|post| score_post(post, coords, taste, &seen, weights, now))
                .collect()
        }
        // Degenerate case: no way to personalize, hand back a neutral default
        _ => candidates
            .map(|post| Recommendation {
                item_id: post.id,
                score: DEFAULT_SCORE,
                reasons: vec![DEFAULT_REASON.to_string()],
            })
            .collect(),
    };

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(results = results.len(), "scored post candidates");
    results
}

fn score_post(
    post: &Post,
    user_coords: Coordinates,
    taste: &TasteProfile,
    seen: &HashMap<Uuid, InteractionType>,
    weights: &PostWeights,
    now: DateTime<Utc>,
) -> Recommendation {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Distance: only contributes within the preferred radius, and only when
    // the author's location is known
    if let Some(author_coords) = post.author.as_ref().and_then(|a| a.coordinates) {
        let distance = haversine_distance(user_coords, author_coords);
        if taste.preferred_radius_km > 0.0 && distance <= taste.preferred_radius_km {
            score += (1.0 - distance / taste.preferred_radius_km) * weights.distance;
            reasons.push(format!("{:.1}km away", distance));
        }
    }

    // Tag overlap terms guard against an empty tag list
    if !post.tags.is_empty() {
        let total = post.tags.len() as f64;

        let liked = post
            .tags
            .iter()
            .filter(|t| taste.liked_tags.contains(t))
            .count();
        if liked > 0 {
            score += (liked as f64 / total) * weights.liked_tags;
            reasons.push("Matches your taste preferences".to_string());
        }

        let disliked = post
            .tags
            .iter()
            .filter(|t| taste.disliked_tags.contains(t))
            .count();
        score -= (disliked as f64 / total) * DISLIKED_TAG_PENALTY;
    }

    // Allergen gate: an absolute veto, never a soft penalty. All remaining
    // terms are skipped.
    if post.allergen_tags.iter().any(|a| taste.allergens.contains(a)) {
        return Recommendation {
            item_id: post.id,
            score: 0.0,
            reasons: vec![ALLERGEN_REASON.to_string()],
        };
    }

    if any_substring_match(&taste.favorite_food_types, &post.tags) {
        score += weights.food_type;
        reasons.push("One of your favorite food types".to_string());
    }

    if any_substring_match(&taste.preferred_cuisines, &post.tags) {
        score += weights.cuisine;
        reasons.push("Matches your preferred cuisine".to_string());
    }

    let freshness = freshness_score(post.date_posted, now);
    score += freshness * weights.freshness;
    if freshness > 0.8 {
        reasons.push("Fresh bake!".to_string());
    }

    if let Some(author) = &post.author {
        if author.rating >= RATING_BONUS_THRESHOLD {
            score += RATING_BONUS;
            reasons.push("Highly rated baker".to_string());
        }
    }

    if post.like_count > SOCIAL_PROOF_THRESHOLD {
        score += SOCIAL_PROOF_BONUS;
        reasons.push("Popular in the community".to_string());
    }

    // Dampen items the user has already interacted with, applied after all
    // additive terms
    match seen.get(&post.id) {
        Some(InteractionType::View) => score *= VIEW_DAMPENING,
        Some(InteractionType::Like) => score *= LIKE_DAMPENING,
        _ => {}
    }

    if reasons.is_empty() {
        reasons.push(GENERAL_REASON.to_string());
    }

    Recommendation {
        item_id: post.id,
        score: score.clamp(0.0, 1.0),
        reasons,
    }
}

/// Collapse the acting user's interactions into one entry per item, last
/// write wins. Other users' records never dampen this user's scores.
fn collapse_interactions(
    user_id: Uuid,
    interactions: &[Interaction],
) -> HashMap<Uuid, InteractionType> {
    let mut map = HashMap::new();
    for interaction in interactions {
        if interaction.user_id == user_id {
            map.insert(interaction.item_id, interaction.interaction_type);
        }
    }
    map
}
