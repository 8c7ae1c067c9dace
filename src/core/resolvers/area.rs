use super::NEUTRAL_FACTOR;
use std::collections::HashMap;

/// (key, display label, complexity factor)
const AREA_SEEDS: &[(&str, &str, f64)] = &[
    ("closet", "Closet", 0.4),
    ("powder_room", "Powder Room", 0.6),
    ("hallway", "Hallway", 0.7),
    ("patio", "Patio", 0.8),
    ("bedroom", "Bedroom", 0.9),
    ("guest_bath", "Guest Bathroom", 0.9),
    ("living_room", "Living Room", 1.0),
    ("dining_room", "Dining Room", 1.0),
    ("garage", "Garage", 1.0),
    ("front_yard", "Front Yard", 1.0),
    ("driveway", "Driveway", 1.0),
    ("single_story_exterior", "Single-Story Exterior", 1.0),
    ("single_slope_roof", "Low-Slope Roof", 1.0),
    ("basement", "Basement", 1.1),
    ("family_room", "Family Room", 1.1),
    ("kitchen", "Kitchen", 1.2),
    ("back_yard", "Back Yard", 1.2),
    ("master_bath", "Primary Bathroom", 1.3),
    ("steep_pitch_roof", "Steep-Pitch Roof", 1.4),
    ("stairwell", "Stairwell", 1.6),
    ("two_story_exterior", "Two-Story Exterior", 1.6),
    ("full_perimeter", "Full Property Perimeter", 2.0),
    ("whole_house", "Whole House", 3.5),
];

#[derive(Debug, Clone, PartialEq)]
pub struct AreaEntry {
    pub label: String,
    pub factor: f64,
}

/// Area/complexity factor table. Unknown or unset keys resolve to 1.0.
#[derive(Debug, Clone)]
pub struct AreaFactors {
    entries: HashMap<String, AreaEntry>,
}

impl AreaFactors {
    pub fn builtin() -> Self {
        Self::from_entries(
            AREA_SEEDS
                .iter()
                .map(|&(key, label, factor)| (key.to_string(), label.to_string(), factor)),
        )
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f64)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, label, factor)| (key, AreaEntry { label, factor }))
                .collect(),
        }
    }

    pub fn factor(&self, key: Option<&str>) -> f64 {
        key.and_then(|k| self.entries.get(k))
            .map(|e| e.factor)
            .unwrap_or(NEUTRAL_FACTOR)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.label.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Default for AreaFactors {
    fn default() -> Self {
        Self::builtin()
    }
}
