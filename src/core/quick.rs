//! Standalone quick estimate from a measured area and a postal code.

use crate::core::calculator::{resolve_duration, round_to_hundred};
use crate::core::engine::EstimationEngine;
use crate::core::resolvers::{continuous_size_factor, regional_multiplier, tier_for_area, NEUTRAL_FACTOR};
use crate::domain::model::{DayRange, PriceRange, RegionInfo, SizeTier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickEstimateRequest {
    pub trade_id: String,
    pub job_type_id: String,
    pub area_sqft: f64,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default = "neutral")]
    pub tenant_multiplier: f64,
}

fn neutral() -> f64 {
    NEUTRAL_FACTOR
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickEstimate {
    pub trade_name: String,
    pub job_type_name: String,
    pub area_sqft: f64,
    pub size_factor: f64,
    pub size: SizeTier,
    pub region: Option<RegionInfo>,
    pub price: PriceRange,
    pub days: DayRange,
}

impl EstimationEngine {
    /// `None` when the trade or job type is unknown.
    pub fn quick_estimate(&self, request: &QuickEstimateRequest) -> Option<QuickEstimate> {
        let Some((trade, job_type)) = self
            .catalog()
            .resolve(&request.trade_id, &request.job_type_id)
        else {
            tracing::debug!(
                trade = %request.trade_id,
                job_type = %request.job_type_id,
                "quick estimate skipped, selection incomplete"
            );
            return None;
        };

        let area = request.area_sqft.max(0.0);
        let size_factor = continuous_size_factor(area);
        let region = request
            .postal_code
            .as_deref()
            .and_then(|zip| self.regions().match_postal_code(zip));
        let multiplier = request.tenant_multiplier * regional_multiplier(region.as_ref());

        let base = job_type.base_price;
        let price = PriceRange::new(
            round_to_hundred(base.low * size_factor * multiplier),
            round_to_hundred(base.high * size_factor * multiplier),
        );

        let size = tier_for_area(area);
        let days = resolve_duration(job_type.base_days, size, NEUTRAL_FACTOR);

        Some(QuickEstimate {
            trade_name: trade.name.clone(),
            job_type_name: job_type.name.clone(),
            area_sqft: area,
            size_factor,
            size,
            region,
            price,
            days,
        })
    }
}
