//! Folds line items into one proposal estimate.

use crate::core::calculator::round_to_hundred;
use crate::domain::model::{DayRange, LineItem, PriceRange, ProposalEstimate};
use std::collections::HashSet;

pub fn proposal_label(line_items: &[LineItem]) -> String {
    match line_items {
        [only] => only.job_type_name.clone(),
        items => format!("Multi-Service Proposal ({} services)", items.len()),
    }
}

/// Keeps the first occurrence of each string, in order.
fn dedup_preserving_order<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for value in values {
        if seen.insert(value.as_str()) {
            unique.push(value.clone());
        }
    }
    unique
}

/// Totals are plain sums of the line items; the summed price is rounded again.
pub fn aggregate(line_items: Vec<LineItem>) -> ProposalEstimate {
    // Saturating: oversized footage can already push item prices to i64::MAX.
    let price_low = line_items.iter().fold(0i64, |acc, i| acc.saturating_add(i.price.low));
    let price_high = line_items.iter().fold(0i64, |acc, i| acc.saturating_add(i.price.high));
    let days_low = line_items.iter().fold(0u32, |acc, i| acc.saturating_add(i.days.low));
    let days_high = line_items.iter().fold(0u32, |acc, i| acc.saturating_add(i.days.high));

    let scope = line_items
        .iter()
        .flat_map(|i| i.scope.iter().cloned())
        .collect();
    let exclusions = dedup_preserving_order(line_items.iter().flat_map(|i| i.exclusions.iter()));
    let warranty = dedup_preserving_order(line_items.iter().filter_map(|i| i.warranty.as_ref()))
        .join(" ");
    let region = line_items.iter().find_map(|i| i.region.clone());

    ProposalEstimate {
        label: proposal_label(&line_items),
        price: PriceRange {
            low: round_to_hundred(price_low as f64),
            high: round_to_hundred(price_high as f64),
        },
        days: DayRange {
            low: days_low,
            high: days_high,
        },
        scope,
        exclusions,
        warranty,
        region,
        line_items,
    }
}
