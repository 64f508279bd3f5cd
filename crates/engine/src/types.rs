//! Core domain types for the xFood recommendation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Allergen codes a user can declare and a post can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Nuts,
    Dairy,
    Eggs,
    Gluten,
    Soy,
    Shellfish,
}

/// Dietary/lifestyle labels attached to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialTag {
    Vegan,
    Halal,
    SugarFree,
    Organic,
    Keto,
    Paleo,
}

/// What kind of kitchen a baker operates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KitchenType {
    #[serde(rename = "Home Bakery")]
    HomeBakery,
    Hobbyist,
    Professional,
}

/// A user's declared food preferences
///
/// `liked_tags`/`disliked_tags` match post tags exactly;
/// `preferred_cuisines`/`favorite_food_types` match by case-insensitive
/// substring containment against post tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TasteProfile {
    #[serde(default)]
    pub liked_tags: Vec<String>,
    #[serde(default)]
    pub disliked_tags: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub favorite_food_types: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    /// Maximum acceptable distance in kilometers
    pub preferred_radius_km: f64,
}

/// The acting user requesting recommendations
///
/// Absent `coordinates` or `taste_profile` degrades scoring to a neutral
/// default rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub coordinates: Option<Coordinates>,
    pub taste_profile: Option<TasteProfile>,
}

/// A baker eligible for recommendation, also embedded in posts as `author`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BakerProfile {
    pub id: Uuid,
    pub coordinates: Option<Coordinates>,
    /// Community rating, 0.0-5.0
    pub rating: f32,
    pub is_verified: bool,
    pub kitchen_type: KitchenType,
}

/// A baked-goods post eligible for recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub allergen_tags: Vec<Allergen>,
    #[serde(default)]
    pub special_tags: Vec<SpecialTag>,
    pub date_posted: DateTime<Utc>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub author: Option<BakerProfile>,
}

/// Kind of past user action on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Like,
    Bookmark,
    Purchase,
}

/// A past user action, used only to dampen previously-seen items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub interaction_type: InteractionType,
    pub timestamp: DateTime<Utc>,
}

/// A ranked recommendation with human-readable explanations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub item_id: Uuid,
    /// Always in [0.0, 1.0]
    pub score: f64,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allergen_serde_lowercase() {
        let json = serde_json::to_string(&Allergen::Shellfish).unwrap();
        assert_eq!(json, "\"shellfish\"");

        let parsed: Allergen = serde_json::from_str("\"dairy\"").unwrap();
        assert_eq!(parsed, Allergen::Dairy);
    }

    #[test]
    fn test_special_tag_serde_kebab_case() {
        let json = serde_json::to_string(&SpecialTag::SugarFree).unwrap();
        assert_eq!(json, "\"sugar-free\"");
    }

    #[test]
    fn test_kitchen_type_serde() {
        let json = serde_json::to_string(&KitchenType::HomeBakery).unwrap();
        assert_eq!(json, "\"Home Bakery\"");

        let parsed: KitchenType = serde_json::from_str("\"Professional\"").unwrap();
        assert_eq!(parsed, KitchenType::Professional);
    }

    #[test]
    fn test_post_optional_fields_default() {
        let id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{}","author_id":"{}","date_posted":"2026-08-01T12:00:00Z"}}"#,
            id, author_id
        );

        let post: Post = serde_json::from_str(&json).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.allergen_tags.is_empty());
        assert!(post.price.is_none());
        assert!(post.author.is_none());
        assert_eq!(post.like_count, 0);
    }
}
