//! Backend Models
//!
//! Data structures matching the REST API's JSON.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::flavor::FlavorProfile;

/// Decimal columns arrive as JSON strings ("43.0"); plain numbers are accepted too
fn decimal_opt<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(n)) => Ok(Some(n)),
        Some(Decimal::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid decimal: {:?}", text))),
    }
}

/// Bottle lifecycle status (matches backend enum)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BottleStatus {
    #[default]
    Sealed,
    Opened,
    Finished,
}

impl BottleStatus {
    pub const ALL: [BottleStatus; 3] = [Self::Sealed, Self::Opened, Self::Finished];

    /// Wire value, also used as `<option value>`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sealed => "sealed",
            Self::Opened => "opened",
            Self::Finished => "finished",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sealed => "Sealed",
            Self::Opened => "Opened",
            Self::Finished => "Finished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistillerySummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub region: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistilleryDetail {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub region: String,
    pub country: String,
    #[serde(default, deserialize_with = "decimal_opt")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "decimal_opt")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub production_notes: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// A bottle in the user's collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    pub id: String,
    pub name: String,
    pub distillery_name: String,
    #[serde(default)]
    pub distillery: Option<DistillerySummary>,
    #[serde(default)]
    pub age_statement: Option<i32>,
    pub region: String,
    pub country: String,
    #[serde(default)]
    pub size_ml: Option<i32>,
    #[serde(default, deserialize_with = "decimal_opt")]
    pub abv: Option<f64>,
    #[serde(default)]
    pub flavor_profile: Option<FlavorProfile>,
    #[serde(default)]
    pub tasting_notes: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub status: BottleStatus,
    #[serde(default, deserialize_with = "decimal_opt")]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Bottle {
    /// True when the bottle carries a profile worth matching against
    pub fn has_flavor_profile(&self) -> bool {
        self.flavor_profile.as_ref().is_some_and(FlavorProfile::has_any)
    }
}

/// Catalog entry maintained by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceWhisky {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub distillery: Option<DistillerySummary>,
    #[serde(default)]
    pub age_statement: Option<i32>,
    pub region: String,
    pub country: String,
    #[serde(default)]
    pub flavor_profile: FlavorProfile,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub whisky: ReferenceWhisky,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
}

/// Request body for `POST /wishlist`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WishlistAdd<'a> {
    pub reference_whisky_id: &'a str,
    pub notes: Option<&'a str>,
}

/// Score is computed server-side, 0.0..=1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarWhisky {
    pub whisky: ReferenceWhisky,
    pub similarity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Cursor-paginated list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Bare `{ "items": [...] }` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantFlavor {
    pub flavor: String,
    pub average_intensity: f64,
}

/// Collection analysis from `GET /profile/taste`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasteProfile {
    pub total_bottles: u32,
    pub bottles_with_profiles: u32,
    #[serde(default)]
    pub average_profile: BTreeMap<String, f64>,
    #[serde(default)]
    pub dominant_flavors: Vec<DominantFlavor>,
    #[serde(default)]
    pub region_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub recommendations: Vec<SimilarWhisky>,
}

impl TasteProfile {
    /// Average profile rounded onto the 0..=5 slider scale
    pub fn rounded_average(&self) -> FlavorProfile {
        let mut profile = FlavorProfile::default();
        for (key, value) in &self.average_profile {
            profile.set(key, value.round() as u8);
        }
        profile
    }

    /// Regions ordered by bottle count, most first
    pub fn regions_by_count(&self) -> Vec<(&str, u32)> {
        let mut regions: Vec<_> = self
            .region_distribution
            .iter()
            .map(|(region, count)| (region.as_str(), *count))
            .collect();
        regions.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTTLE_JSON: &str = r#"{
        "id": "b1",
        "name": "Lagavulin 16",
        "distillery_name": "Lagavulin",
        "distillery": {"id": "d1", "slug": "lagavulin", "name": "Lagavulin", "region": "Islay", "country": "Scotland"},
        "age_statement": 16,
        "region": "Islay",
        "country": "Scotland",
        "size_ml": 700,
        "abv": "43.0",
        "flavor_profile": {
            "smoky_peaty": 5, "fruity": 1, "sherried": 2, "spicy": 1,
            "floral_grassy": 0, "maritime": 4, "honey_sweet": 1, "vanilla_caramel": 1,
            "oak_woody": 2, "nutty": 0, "malty_biscuity": 1, "medicinal_iodine": 4
        },
        "tasting_notes": null,
        "rating": 5,
        "status": "opened",
        "purchase_price": "89.99",
        "purchase_date": "2024-03-01",
        "purchase_location": null,
        "created_at": "2024-03-02T10:00:00Z",
        "updated_at": "2024-03-02T10:00:00Z"
    }"#;

    #[test]
    fn test_decode_bottle() {
        let bottle: Bottle = serde_json::from_str(BOTTLE_JSON).unwrap();
        assert_eq!(bottle.status, BottleStatus::Opened);
        assert_eq!(bottle.rating, Some(5));
        assert_eq!(bottle.distillery.as_ref().map(|d| d.slug.as_str()), Some("lagavulin"));
        assert_eq!(bottle.tasting_notes, None);
        assert_eq!(bottle.abv, Some(43.0));
        assert_eq!(bottle.purchase_price, Some(89.99));
        assert!(bottle.has_flavor_profile());
    }

    #[test]
    fn test_decimal_fields_accept_numbers_and_null() {
        let json = BOTTLE_JSON
            .replace(r#""abv": "43.0""#, r#""abv": 46"#)
            .replace(r#""purchase_price": "89.99""#, r#""purchase_price": null"#);
        let bottle: Bottle = serde_json::from_str(&json).unwrap();
        assert_eq!(bottle.abv, Some(46.0));
        assert_eq!(bottle.purchase_price, None);
    }

    #[test]
    fn test_decimal_field_rejects_garbage() {
        let json = BOTTLE_JSON.replace(r#""abv": "43.0""#, r#""abv": "strong""#);
        assert!(serde_json::from_str::<Bottle>(&json).is_err());
    }

    #[test]
    fn test_decode_distillery_with_coordinates() {
        let json = r#"{
            "id": "d1", "slug": "lagavulin", "name": "Lagavulin",
            "region": "Islay", "country": "Scotland",
            "latitude": "55.640700", "longitude": "-6.126400",
            "founded": 1816, "owner": "Diageo",
            "history": null, "production_notes": null,
            "website": "https://www.malts.com"
        }"#;
        let distillery: DistilleryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(distillery.latitude, Some(55.6407));
        assert_eq!(distillery.longitude, Some(-6.1264));
        assert_eq!(distillery.founded, Some(1816));
    }

    #[test]
    fn test_decode_distillery_without_coordinates() {
        let json = r#"{"id": "d2", "slug": "nikka", "name": "Nikka", "region": "Japan", "country": "Japan"}"#;
        let distillery: DistilleryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(distillery.latitude, None);
        assert_eq!(distillery.longitude, None);
    }

    #[test]
    fn test_bottle_without_profile_is_not_matchable() {
        let mut bottle: Bottle = serde_json::from_str(BOTTLE_JSON).unwrap();
        bottle.flavor_profile = Some(FlavorProfile::default());
        assert!(!bottle.has_flavor_profile());
        bottle.flavor_profile = None;
        assert!(!bottle.has_flavor_profile());
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&BottleStatus::Finished).unwrap(), "\"finished\"");
        assert_eq!(BottleStatus::parse("sealed"), Some(BottleStatus::Sealed));
        assert_eq!(BottleStatus::parse("Sealed"), None);
    }

    #[test]
    fn test_decode_paginated_wishlist() {
        let json = r#"{
            "items": [{
                "id": "w1",
                "whisky": {
                    "id": "r1", "slug": "ardbeg-10", "name": "Ardbeg 10",
                    "distillery": null, "age_statement": 10,
                    "region": "Islay", "country": "Scotland",
                    "flavor_profile": {"smoky_peaty": 5},
                    "description": null
                },
                "notes": "Birthday",
                "created_at": "2024-01-01T00:00:00Z"
            }],
            "next_cursor": null,
            "has_more": false
        }"#;
        let page: Paginated<WishlistItem> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);
        let whisky = &page.items[0].whisky;
        assert_eq!(whisky.flavor_profile.smoky_peaty, 5);
        assert_eq!(whisky.flavor_profile.fruity, 0);
    }

    #[test]
    fn test_taste_profile_helpers() {
        let json = r#"{
            "total_bottles": 4,
            "bottles_with_profiles": 2,
            "average_profile": {"smoky_peaty": 3.5, "fruity": 1.2},
            "dominant_flavors": [{"flavor": "smoky_peaty", "average_intensity": 3.5}],
            "region_distribution": {"Islay": 2, "Speyside": 1, "Highland": 1},
            "recommendations": []
        }"#;
        let profile: TasteProfile = serde_json::from_str(json).unwrap();
        let avg = profile.rounded_average();
        assert_eq!(avg.smoky_peaty, 4);
        assert_eq!(avg.fruity, 1);
        assert_eq!(
            profile.regions_by_count(),
            vec![("Islay", 2), ("Highland", 1), ("Speyside", 1)]
        );
    }
}
