use crate::domain::model::RateRange;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootageUnit {
    SquareFoot,
    LinearFoot,
}

impl FootageUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            FootageUnit::SquareFoot => "sq ft",
            FootageUnit::LinearFoot => "lin ft",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitPrice {
    pub unit: FootageUnit,
    pub range: RateRange,
}

const FOOTAGE_SEEDS: &[(&str, FootageUnit, f64, f64)] = &[
    ("flooring", FootageUnit::SquareFoot, 6.0, 12.0),
    ("roofing", FootageUnit::SquareFoot, 4.0, 7.5),
    ("drywall", FootageUnit::SquareFoot, 2.5, 4.5),
    ("concrete", FootageUnit::SquareFoot, 6.0, 10.0),
    ("fencing", FootageUnit::LinearFoot, 25.0, 45.0),
];

/// Per-unit price ranges for footage-billed trades, keyed by trade id.
#[derive(Debug, Clone)]
pub struct FootagePricing {
    prices: HashMap<String, UnitPrice>,
}

impl FootagePricing {
    pub fn builtin() -> Self {
        let mut pricing = Self::empty();
        for &(trade_id, unit, low, high) in FOOTAGE_SEEDS {
            pricing.insert(trade_id, unit, RateRange::new(low, high));
        }
        pricing
    }

    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    pub fn insert(&mut self, trade_id: &str, unit: FootageUnit, range: RateRange) {
        self.prices
            .insert(trade_id.to_string(), UnitPrice { unit, range });
    }

    /// `None` means footage pricing does not apply to this trade.
    pub fn unit_price(&self, trade_id: &str) -> Option<UnitPrice> {
        self.prices.get(trade_id).copied()
    }
}

impl Default for FootagePricing {
    fn default() -> Self {
        Self::builtin()
    }
}
