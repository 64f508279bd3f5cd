//! Baker recommendation scoring.
//!
//! Simpler than post scoring: no allergen concept applies to a baker, so
//! every term is additive. Proximity dominates, with flat boosts for rating,
//! verification, and a professional kitchen.

use crate::config::BakerWeights;
use crate::geo::haversine_distance;
use crate::types::{BakerProfile, KitchenType, Recommendation, UserProfile};
use tracing::{debug, instrument};

const RATING_THRESHOLD: f32 = 4.5;
const DEFAULT_SCORE: f64 = 0.5;

const DEFAULT_REASON: &str = "Default recommendation";
const FALLBACK_REASON: &str = "Nearby baker";

/// Rank candidate bakers for a user
///
/// The user themself is always excluded. Missing taste profile or
/// coordinates degrades to a flat default, mirroring post scoring. Output is
/// sorted descending by score; ties keep input order.
#[instrument(skip_all, fields(user_id = %user.id, candidates = bakers.len()))]
pub fn score_bakers(
    user: &UserProfile,
    bakers: &[BakerProfile],
    weights: &BakerWeights,
) -> Vec<Recommendation> {
    let candidates = bakers.iter().filter(|b| b.id != user.id);

    let mut results: Vec<Recommendation> = match (user.coordinates, &user.taste_profile) {
        (Some(coords), Some(taste)) => candidates
            .map(|baker| {
                let mut score = 0.0;
                let mut reasons = Vec::new();

                if let Some(baker_coords) = baker.coordinates {
                    let distance = haversine_distance(coords, baker_coords);
                    if taste.preferred_radius_km > 0.0 && distance <= taste.preferred_radius_km {
                        score += (1.0 - distance / taste.preferred_radius_km) * weights.distance;
                        reasons.push(format!("{}km away", distance.round() as i64));
                    }
                }

                if baker.rating >= RATING_THRESHOLD {
                    score += weights.rating;
                    reasons.push(format!("{}⭐ rated baker", baker.rating));
                }

                if baker.is_verified {
                    score += weights.verified;
                    reasons.push("Verified baker".to_string());
                }

                if baker.kitchen_type == KitchenType::Professional {
                    score += weights.professional;
                    reasons.push("Professional baker".to_string());
                }

                if reasons.is_empty() {
                    reasons.push(FALLBACK_REASON.to_string());
                }

                Recommendation {
                    item_id: baker.id,
                    score: score.clamp(0.0, 1.0),
                    reasons,
                }
            })
            .collect(),
        _ => candidates
            .map(|baker| Recommendation {
                item_id: baker.id,
                score: DEFAULT_SCORE,
                reasons: vec![DEFAULT_REASON.to_string()],
            })
            .collect(),
    };

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    debug!(results = results.len(), "scored baker candidates");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinates, TasteProfile};
    use uuid::Uuid;

    fn user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            coordinates: Some(Coordinates {
                latitude: 45.5,
                longitude: -122.6,
            }),
            taste_profile: Some(TasteProfile {
                liked_tags: vec![],
                disliked_tags: vec![],
                preferred_cuisines: vec![],
                favorite_food_types: vec![],
                allergens: vec![],
                preferred_radius_km: 25.0,
            }),
        }
    }

    fn baker() -> BakerProfile {
        BakerProfile {
            id: Uuid::new_v4(),
            coordinates: Some(Coordinates {
                latitude: 45.52,
                longitude: -122.67,
            }),
            rating: 4.8,
            is_verified: true,
            kitchen_type: KitchenType::Professional,
        }
    }

    #[test]
    fn test_self_excluded() {
        let user = user();
        let mut me = baker();
        me.id = user.id;

        let results = score_bakers(&user, &[me], &BakerWeights::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_all_terms_accumulate() {
        let user = user();
        let b = baker();

        let results = score_bakers(&user, &[b.clone()], &BakerWeights::default());
        let rec = &results[0];

        // Distance (partial), rating 0.30, verified 0.20, professional 0.10
        assert!(rec.score > 0.6 && rec.score <= 1.0);
        assert!(rec.reasons.iter().any(|r| r.contains("km away")));
        assert!(rec.reasons.contains(&"4.8⭐ rated baker".to_string()));
        assert!(rec.reasons.contains(&"Verified baker".to_string()));
        assert!(rec.reasons.contains(&"Professional baker".to_string()));
    }

    #[test]
    fn test_no_matching_terms_gets_fallback_reason() {
        let user = user();
        let b = BakerProfile {
            id: Uuid::new_v4(),
            coordinates: None,
            rating: 3.0,
            is_verified: false,
            kitchen_type: KitchenType::Hobbyist,
        };

        let results = score_bakers(&user, &[b], &BakerWeights::default());
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[0].reasons, vec!["Nearby baker"]);
    }

    #[test]
    fn test_missing_profile_yields_default_score() {
        let mut user = user();
        user.taste_profile = None;

        let results = score_bakers(&user, &[baker()], &BakerWeights::default());
        assert_eq!(results[0].score, 0.5);
        assert_eq!(results[0].reasons, vec!["Default recommendation"]);
    }

    #[test]
    fn test_distance_reason_rounds_to_integer() {
        let user = user();
        let results = score_bakers(&user, &[baker()], &BakerWeights::default());

        let distance_reason = results[0]
            .reasons
            .iter()
            .find(|r| r.ends_with("km away"))
            .unwrap();
        // ~5.9km rounds to 6
        assert_eq!(distance_reason, "6km away");
    }

    #[test]
    fn test_sorted_descending() {
        let user = user();
        let strong = baker();
        let weak = BakerProfile {
            id: Uuid::new_v4(),
            coordinates: None,
            rating: 2.0,
            is_verified: false,
            kitchen_type: KitchenType::Hobbyist,
        };

        let results = score_bakers(&user, &[weak, strong.clone()], &BakerWeights::default());
        assert_eq!(results[0].item_id, strong.id);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}
