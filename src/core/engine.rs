use crate::catalog::Catalog;
use crate::core::aggregator::aggregate;
use crate::core::calculator::{calculate_line_item, ResolvedFactors};
use crate::core::overlay::ScopeOverlay;
use crate::core::resolvers::{
    tier_size_factor, AreaFactors, FootagePricing, RegionTable, NEUTRAL_FACTOR,
};
use crate::domain::model::{
    LineItem, PricingOverrides, ProposalEstimate, ProposalRequest, RegionInfo, ServiceSelection,
    Trade,
};

/// Selections -> catalog lookup -> resolvers -> calculator -> overlay -> aggregator.
///
/// Holds only read-only tables, so one engine can serve any number of estimates.
#[derive(Debug, Clone)]
pub struct EstimationEngine {
    catalog: Catalog,
    areas: AreaFactors,
    footage: FootagePricing,
    regions: RegionTable,
    enforce_area_allow_list: bool,
}

impl EstimationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            areas: AreaFactors::builtin(),
            footage: FootagePricing::builtin(),
            regions: RegionTable::builtin(),
            enforce_area_allow_list: true,
        }
    }

    pub fn with_area_allow_list(mut self, enforce: bool) -> Self {
        self.enforce_area_allow_list = enforce;
        self
    }

    pub fn with_area_factors(mut self, areas: AreaFactors) -> Self {
        self.areas = areas;
        self
    }

    pub fn with_footage_pricing(mut self, footage: FootagePricing) -> Self {
        self.footage = footage;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    pub fn resolve_region(&self, address: Option<&str>) -> Option<RegionInfo> {
        let address = address.map(str::trim).filter(|a| !a.is_empty())?;
        let region = self.regions.match_address(address);
        if region.is_none() {
            tracing::debug!(address, "no region matched, using neutral multiplier");
        }
        region
    }

    fn area_factor(&self, trade: &Trade, selection: &ServiceSelection) -> f64 {
        let key = selection.area.as_deref().filter(|k| !k.is_empty());

        match key {
            Some(k) if self.enforce_area_allow_list && !self.catalog.is_area_allowed(&trade.id, k) => {
                tracing::debug!(
                    service = %selection.id,
                    trade = %trade.id,
                    area = k,
                    "area not offered for trade, using neutral factor"
                );
                NEUTRAL_FACTOR
            }
            Some(k) if !self.areas.contains(k) => {
                tracing::debug!(service = %selection.id, area = k, "unknown area, using neutral factor");
                NEUTRAL_FACTOR
            }
            _ => self.areas.factor(key),
        }
    }

    /// One line item per resolvable selection. Incomplete selections are skipped.
    pub fn line_items(
        &self,
        services: &[ServiceSelection],
        region: Option<&RegionInfo>,
        overrides: &PricingOverrides,
    ) -> Vec<LineItem> {
        services
            .iter()
            .filter_map(|selection| {
                let resolved = selection
                    .trade_id
                    .as_deref()
                    .zip(selection.job_type_id.as_deref())
                    .and_then(|(trade_id, job_type_id)| self.catalog.resolve(trade_id, job_type_id));

                let Some((trade, job_type)) = resolved else {
                    tracing::debug!(service = %selection.id, "incomplete selection skipped");
                    return None;
                };

                let factors = ResolvedFactors {
                    size: tier_size_factor(selection.size),
                    area: self.area_factor(trade, selection),
                    unit_price: self.footage.unit_price(&trade.id),
                    region: region.cloned(),
                };

                Some(calculate_line_item(
                    selection, trade, job_type, &factors, overrides,
                ))
            })
            .collect()
    }

    pub fn estimate(
        &self,
        request: &ProposalRequest,
        overrides: &PricingOverrides,
        overlay: &ScopeOverlay,
    ) -> ProposalEstimate {
        let region = self.resolve_region(request.address.as_deref());

        let mut line_items = self.line_items(&request.services, region.as_ref(), overrides);
        overlay.apply(&mut line_items);

        let skipped = request.services.len() - line_items.len();
        let estimate = aggregate(line_items);

        tracing::info!(
            label = %estimate.label,
            services = estimate.line_items.len(),
            skipped,
            price_low = estimate.price.low,
            price_high = estimate.price.high,
            "estimate complete"
        );

        estimate
    }
}

impl Default for EstimationEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
