//! Per-service price and duration calculation.

use crate::core::resolvers::{regional_multiplier, UnitPrice};
use crate::domain::model::{
    CostBreakdown, DayRange, JobOption, JobType, LineItem, OptionValue, PriceRange,
    PricingOverrides, RegionInfo, ServiceSelection, SizeTier, Trade,
};

/// Resolver outputs for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFactors {
    pub size: f64,
    pub area: f64,
    pub unit_price: Option<UnitPrice>,
    pub region: Option<RegionInfo>,
}

/// Price delta and scope lines contributed by the selected options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionContribution {
    pub extra_cost: f64,
    pub scope_additions: Vec<String>,
}

/// Folds the selected option values in catalog order.
pub fn resolve_options(job_type: &JobType, selection: &ServiceSelection) -> OptionContribution {
    let mut contribution = OptionContribution::default();

    for option in &job_type.options {
        match option {
            JobOption::Toggle {
                id,
                price_delta,
                scope_addition,
                ..
            } => {
                if selection.options.get(id) != Some(&OptionValue::Flag(true)) {
                    continue;
                }
                contribution.extra_cost += price_delta.unwrap_or(0.0);
                if let Some(text) = scope_addition {
                    contribution.scope_additions.push(text.clone());
                }
            }
            JobOption::Choice { id, choices, .. } => {
                let Some(OptionValue::Choice(value)) = selection.options.get(id) else {
                    continue;
                };
                let Some(choice) = choices.iter().find(|c| &c.value == value) else {
                    tracing::debug!(option = %id, value = %value, "unknown choice value ignored");
                    continue;
                };
                contribution.extra_cost += choice.price_delta;
                if let Some(text) = &choice.scope_addition {
                    contribution.scope_additions.push(text.clone());
                }
            }
        }
    }

    contribution
}

/// Dampened area penalty for footage-billed work.
pub fn complexity_factor(area_factor: f64) -> f64 {
    if area_factor <= 1.2 {
        1.0
    } else {
        1.0 + (area_factor - 1.0) * 0.3
    }
}

pub fn round_to_hundred(amount: f64) -> i64 {
    ((amount / 100.0).round() * 100.0) as i64
}

/// Size adjustment first, then area adjustment on its result.
pub fn resolve_duration(base: DayRange, size: SizeTier, area_factor: f64) -> DayRange {
    let mut low = base.low as f64;
    let mut high = base.high as f64;

    match size {
        SizeTier::Small => {
            low = (low * 0.8).floor().max(1.0);
            high = (high * 0.8).floor().max(1.0);
        }
        SizeTier::Large => {
            low = (low * 1.3).ceil();
            high = (high * 1.3).ceil();
        }
        SizeTier::Medium => {}
    }

    if area_factor > 1.5 {
        low = (low * 1.2).ceil();
        high = (high * 1.3).ceil();
    } else if area_factor < 0.7 {
        low = (low * 0.8).floor().max(1.0);
        high = (high * 0.9).floor().max(1.0);
    }

    DayRange::new(low.max(1.0) as u32, high.max(1.0) as u32)
}

fn split_cost(price: PriceRange, materials_ratio: f64) -> CostBreakdown {
    let materials_low = (price.low as f64 * materials_ratio).round() as i64;
    let materials_high = (price.high as f64 * materials_ratio).round() as i64;

    CostBreakdown {
        materials: PriceRange::new(materials_low, materials_high),
        labor: PriceRange::new(price.low - materials_low, price.high - materials_high),
    }
}

/// Computes the unrounded `{low, high}` price before tenant and regional multipliers.
fn base_price(
    trade: &Trade,
    job_type: &JobType,
    selection: &ServiceSelection,
    factors: &ResolvedFactors,
    extra_cost: f64,
) -> (f64, f64) {
    let footage = selection.footage.filter(|f| *f > 0.0);

    match (trade.billing.is_footage(), footage, factors.unit_price) {
        (true, Some(footage), Some(unit_price)) => {
            let complexity = complexity_factor(factors.area);
            tracing::debug!(
                service = %selection.id,
                footage,
                unit = unit_price.unit.abbreviation(),
                complexity,
                "pricing by footage"
            );
            (
                footage * unit_price.range.low * factors.size * complexity + extra_cost,
                footage * unit_price.range.high * factors.size * complexity + extra_cost,
            )
        }
        (is_footage, _, _) => {
            if is_footage {
                tracing::debug!(
                    service = %selection.id,
                    "footage pricing unavailable, using base price range"
                );
            }
            let base = job_type.base_price;
            (
                base.low * factors.size * factors.area + extra_cost,
                base.high * factors.size * factors.area + extra_cost,
            )
        }
    }
}

/// Builds the line item for one resolved selection.
pub fn calculate_line_item(
    selection: &ServiceSelection,
    trade: &Trade,
    job_type: &JobType,
    factors: &ResolvedFactors,
    overrides: &PricingOverrides,
) -> LineItem {
    let options = resolve_options(job_type, selection);
    let (low, high) = base_price(trade, job_type, selection, factors, options.extra_cost);

    let multiplier = overrides.price_multiplier
        * overrides.trade_multiplier(&trade.id)
        * regional_multiplier(factors.region.as_ref());

    let price = PriceRange::new(
        round_to_hundred(low * multiplier).max(0),
        round_to_hundred(high * multiplier).max(0),
    );
    let days = resolve_duration(job_type.base_days, selection.size, factors.area);

    let scope = match &selection.scope_override {
        Some(lines) if !lines.is_empty() => lines.clone(),
        _ => job_type
            .scope
            .iter()
            .cloned()
            .chain(options.scope_additions)
            .collect(),
    };

    LineItem {
        service_id: selection.id.clone(),
        trade_id: trade.id.clone(),
        trade_name: trade.name.clone(),
        job_type_id: job_type.id.clone(),
        job_type_name: job_type.name.clone(),
        size: selection.size,
        scope,
        price,
        days,
        breakdown: split_cost(price, trade.materials_ratio),
        warranty: job_type.warranty.clone(),
        exclusions: job_type.exclusions.clone(),
        region: factors.region.clone(),
        footage: selection.footage,
        area: selection.area.clone(),
    }
}
