//! Flavor Profile
//!
//! Twelve tasting dimensions, each scored 0..=5.

use serde::{Deserialize, Serialize};

/// Highest intensity a slider can take
pub const MAX_INTENSITY: u8 = 5;

/// Wire key and display label, in display order
pub const FLAVOR_LABELS: &[(&str, &str)] = &[
    ("smoky_peaty", "Smoky / Peaty"),
    ("fruity", "Fruity"),
    ("sherried", "Sherried"),
    ("spicy", "Spicy"),
    ("floral_grassy", "Floral / Grassy"),
    ("maritime", "Maritime"),
    ("honey_sweet", "Honey / Sweet"),
    ("vanilla_caramel", "Vanilla / Caramel"),
    ("oak_woody", "Oak / Woody"),
    ("nutty", "Nutty"),
    ("malty_biscuity", "Malty / Biscuity"),
    ("medicinal_iodine", "Medicinal / Iodine"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlavorProfile {
    pub smoky_peaty: u8,
    pub fruity: u8,
    pub sherried: u8,
    pub spicy: u8,
    pub floral_grassy: u8,
    pub maritime: u8,
    pub honey_sweet: u8,
    pub vanilla_caramel: u8,
    pub oak_woody: u8,
    pub nutty: u8,
    pub malty_biscuity: u8,
    pub medicinal_iodine: u8,
}

impl FlavorProfile {
    fn slot(&mut self, key: &str) -> Option<&mut u8> {
        let slot = match key {
            "smoky_peaty" => &mut self.smoky_peaty,
            "fruity" => &mut self.fruity,
            "sherried" => &mut self.sherried,
            "spicy" => &mut self.spicy,
            "floral_grassy" => &mut self.floral_grassy,
            "maritime" => &mut self.maritime,
            "honey_sweet" => &mut self.honey_sweet,
            "vanilla_caramel" => &mut self.vanilla_caramel,
            "oak_woody" => &mut self.oak_woody,
            "nutty" => &mut self.nutty,
            "malty_biscuity" => &mut self.malty_biscuity,
            "medicinal_iodine" => &mut self.medicinal_iodine,
            _ => return None,
        };
        Some(slot)
    }

    pub fn get(&self, key: &str) -> Option<u8> {
        let mut copy = *self;
        copy.slot(key).map(|v| *v)
    }

    /// Set one dimension, clamped to the slider range. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: u8) {
        if let Some(slot) = self.slot(key) {
            *slot = value.min(MAX_INTENSITY);
        }
    }

    /// Copy with one dimension replaced
    pub fn with(mut self, key: &str, value: u8) -> Self {
        self.set(key, value);
        self
    }

    /// Any dimension above zero
    pub fn has_any(&self) -> bool {
        self.entries().iter().any(|(_, _, v)| *v > 0)
    }

    /// (key, label, value) in display order
    pub fn entries(&self) -> Vec<(&'static str, &'static str, u8)> {
        FLAVOR_LABELS
            .iter()
            .map(|(key, label)| (*key, *label, self.get(key).unwrap_or_default()))
            .collect()
    }
}

/// Display label for a wire key, falling back to the key itself
pub fn flavor_label(key: &str) -> &str {
    FLAVOR_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_has_nothing() {
        let profile = FlavorProfile::default();
        assert!(!profile.has_any());
        assert_eq!(profile.entries().len(), 12);
    }

    #[test]
    fn test_set_clamps_and_ignores_unknown() {
        let profile = FlavorProfile::default()
            .with("maritime", 9)
            .with("umami", 3);
        assert_eq!(profile.maritime, MAX_INTENSITY);
        assert_eq!(profile.get("umami"), None);
        assert!(profile.has_any());
    }

    #[test]
    fn test_entries_follow_label_order() {
        let profile = FlavorProfile::default().with("nutty", 2);
        let entries = profile.entries();
        assert_eq!(entries[0], ("smoky_peaty", "Smoky / Peaty", 0));
        assert_eq!(entries[9], ("nutty", "Nutty", 2));
    }

    #[test]
    fn test_flavor_label_lookup() {
        assert_eq!(flavor_label("honey_sweet"), "Honey / Sweet");
        assert_eq!(flavor_label("mystery"), "mystery");
    }

    #[test]
    fn test_partial_json_fills_zeroes() {
        let profile: FlavorProfile = serde_json::from_str(r#"{"sherried": 4}"#).unwrap();
        assert_eq!(profile, FlavorProfile::default().with("sherried", 4));
    }
}
