use super::NEUTRAL_FACTOR;
use crate::domain::model::RegionInfo;
use regex::Regex;
use std::collections::HashMap;

struct StateSeed {
    name: &'static str,
    abbreviation: &'static str,
    region: &'static str,
    multiplier: f64,
}

const fn state(
    name: &'static str,
    abbreviation: &'static str,
    region: &'static str,
    multiplier: f64,
) -> StateSeed {
    StateSeed {
        name,
        abbreviation,
        region,
        multiplier,
    }
}

const NORTHEAST: &str = "Northeast";
const SOUTHEAST: &str = "Southeast";
const MIDWEST: &str = "Midwest";
const SOUTHWEST: &str = "Southwest";
const MOUNTAIN: &str = "Mountain West";
const PACIFIC: &str = "Pacific";

const STATE_SEEDS: &[StateSeed] = &[
    state("Alabama", "AL", SOUTHEAST, 0.87),
    state("Alaska", "AK", PACIFIC, 1.25),
    state("Arizona", "AZ", SOUTHWEST, 0.97),
    state("Arkansas", "AR", SOUTHEAST, 0.86),
    state("California", "CA", PACIFIC, 1.3),
    state("Colorado", "CO", MOUNTAIN, 1.05),
    state("Connecticut", "CT", NORTHEAST, 1.15),
    state("Delaware", "DE", SOUTHEAST, 1.05),
    state("District of Columbia", "DC", SOUTHEAST, 1.25),
    state("Florida", "FL", SOUTHEAST, 1.0),
    state("Georgia", "GA", SOUTHEAST, 0.95),
    state("Hawaii", "HI", PACIFIC, 1.35),
    state("Idaho", "ID", MOUNTAIN, 0.95),
    state("Illinois", "IL", MIDWEST, 1.08),
    state("Indiana", "IN", MIDWEST, 0.93),
    state("Iowa", "IA", MIDWEST, 0.92),
    state("Kansas", "KS", MIDWEST, 0.9),
    state("Kentucky", "KY", SOUTHEAST, 0.9),
    state("Louisiana", "LA", SOUTHEAST, 0.9),
    state("Maine", "ME", NORTHEAST, 0.98),
    state("Maryland", "MD", SOUTHEAST, 1.1),
    state("Massachusetts", "MA", NORTHEAST, 1.2),
    state("Michigan", "MI", MIDWEST, 0.98),
    state("Minnesota", "MN", MIDWEST, 1.03),
    state("Mississippi", "MS", SOUTHEAST, 0.85),
    state("Missouri", "MO", MIDWEST, 0.93),
    state("Montana", "MT", MOUNTAIN, 0.97),
    state("Nebraska", "NE", MIDWEST, 0.92),
    state("Nevada", "NV", MOUNTAIN, 1.02),
    state("New Hampshire", "NH", NORTHEAST, 1.05),
    state("New Jersey", "NJ", NORTHEAST, 1.18),
    state("New Mexico", "NM", SOUTHWEST, 0.92),
    state("New York", "NY", NORTHEAST, 1.25),
    state("North Carolina", "NC", SOUTHEAST, 0.92),
    state("North Dakota", "ND", MIDWEST, 0.95),
    state("Ohio", "OH", MIDWEST, 0.95),
    state("Oklahoma", "OK", SOUTHWEST, 0.87),
    state("Oregon", "OR", PACIFIC, 1.1),
    state("Pennsylvania", "PA", NORTHEAST, 1.05),
    state("Rhode Island", "RI", NORTHEAST, 1.1),
    state("South Carolina", "SC", SOUTHEAST, 0.9),
    state("South Dakota", "SD", MIDWEST, 0.9),
    state("Tennessee", "TN", SOUTHEAST, 0.9),
    state("Texas", "TX", SOUTHWEST, 0.93),
    state("Utah", "UT", MOUNTAIN, 0.98),
    state("Vermont", "VT", NORTHEAST, 1.0),
    state("Virginia", "VA", SOUTHEAST, 1.0),
    state("Washington", "WA", PACIFIC, 1.15),
    state("West Virginia", "WV", SOUTHEAST, 0.88),
    state("Wisconsin", "WI", MIDWEST, 0.98),
    state("Wyoming", "WY", MOUNTAIN, 0.95),
];

/// Three-digit postal prefix ranges. Deliberately coarse.
const POSTAL_PREFIX_RULES: &[(u16, u16, &str)] = &[
    (10, 27, "MA"),
    (100, 149, "NY"),
    (150, 196, "PA"),
    (320, 349, "FL"),
    (600, 629, "IL"),
    (750, 799, "TX"),
    (800, 816, "CO"),
    (850, 865, "AZ"),
    (900, 961, "CA"),
    (980, 994, "WA"),
];

/// State/region lookup for addresses and postal codes.
#[derive(Debug, Clone)]
pub struct RegionTable {
    states: Vec<RegionInfo>,
    by_abbreviation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    abbreviation_pattern: Regex,
    name_pattern: Regex,
}

impl RegionTable {
    pub fn builtin() -> Self {
        let states: Vec<RegionInfo> = STATE_SEEDS
            .iter()
            .map(|s| RegionInfo {
                state: s.name.to_string(),
                abbreviation: s.abbreviation.to_string(),
                region: s.region.to_string(),
                multiplier: s.multiplier,
            })
            .collect();

        let by_abbreviation = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.abbreviation.clone(), i))
            .collect();
        let by_name = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.state.to_lowercase(), i))
            .collect();

        // 長的名稱先比對，避免 "West Virginia" 被當成 "Virginia"
        let mut names: Vec<&str> = STATE_SEEDS.iter().map(|s| s.name).collect();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            states,
            by_abbreviation,
            by_name,
            abbreviation_pattern: Regex::new(r",\s*([A-Z]{2})(?:\s+\d{5}(?:-\d{4})?)?\s*(?:,|$)")
                .unwrap(),
            name_pattern: Regex::new(&format!(r"(?i)\b({})\b", alternation)).unwrap(),
        }
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&RegionInfo> {
        self.by_abbreviation
            .get(&abbreviation.to_ascii_uppercase())
            .map(|&i| &self.states[i])
    }

    /// Matches a free-form address. A `", XX"` state code wins over a spelled-out
    /// state name; among several candidates the last one in the string is used.
    pub fn match_address(&self, address: &str) -> Option<RegionInfo> {
        let by_code = self
            .abbreviation_pattern
            .captures_iter(address)
            .filter_map(|caps| self.by_abbreviation.get(&caps[1]).copied())
            .last();

        let index = by_code.or_else(|| {
            self.name_pattern
                .find_iter(address)
                .filter_map(|m| self.by_name.get(&m.as_str().to_lowercase()).copied())
                .last()
        })?;

        Some(self.states[index].clone())
    }

    /// Coarse postal-code heuristic used by the quick estimator.
    pub fn match_postal_code(&self, postal_code: &str) -> Option<RegionInfo> {
        let prefix = postal_code.trim().get(..3)?;
        if !prefix.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let prefix: u16 = prefix.parse().ok()?;

        POSTAL_PREFIX_RULES
            .iter()
            .find(|(low, high, _)| (*low..=*high).contains(&prefix))
            .and_then(|(_, _, abbreviation)| self.by_abbreviation(abbreviation))
            .cloned()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn regional_multiplier(region: Option<&RegionInfo>) -> f64 {
    region.map(|r| r.multiplier).unwrap_or(NEUTRAL_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_address_by_code() {
        let table = RegionTable::builtin();

        let info = table
            .match_address("1200 Congress Ave, Austin, TX 78701")
            .unwrap();
        assert_eq!(info.abbreviation, "TX");
        assert_eq!(info.region, "Southwest");
        assert_eq!(info.multiplier, 0.93);

        let info = table
            .match_address("55 Water St, Brooklyn, NY 11201-1234, USA")
            .unwrap();
        assert_eq!(info.state, "New York");
    }

    #[test]
    fn test_match_address_by_name() {
        let table = RegionTable::builtin();

        let info = table.match_address("14 Elm Road, Charleston, West Virginia").unwrap();
        assert_eq!(info.abbreviation, "WV");

        let info = table.match_address("Little Rock, arkansas").unwrap();
        assert_eq!(info.abbreviation, "AR");
    }

    #[test]
    fn test_code_wins_over_street_name() {
        let table = RegionTable::builtin();
        let info = table.match_address("900 Washington Blvd, Denver, CO 80203").unwrap();
        assert_eq!(info.abbreviation, "CO");
    }

    #[test]
    fn test_unmatched_address_is_neutral() {
        let table = RegionTable::builtin();
        let info = table.match_address("221B Baker Street, London");
        assert!(info.is_none());
        assert_eq!(regional_multiplier(info.as_ref()), 1.0);
    }

    #[test]
    fn test_match_postal_code() {
        let table = RegionTable::builtin();

        assert_eq!(table.match_postal_code("94110").unwrap().abbreviation, "CA");
        assert_eq!(table.match_postal_code("10001").unwrap().abbreviation, "NY");
        assert_eq!(table.match_postal_code("02139").unwrap().abbreviation, "MA");
        assert_eq!(table.match_postal_code(" 78701 ").unwrap().abbreviation, "TX");

        assert!(table.match_postal_code("59801").is_none());
        assert!(table.match_postal_code("9a110").is_none());
        assert!(table.match_postal_code("12").is_none());
    }
}
