//! Flattening an estimate into the saved-draft row.

use crate::domain::model::{DraftRecord, OptionValue, ProposalEstimate, ProposalRequest};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub const DRAFT_STATUS: &str = "draft";

/// Flattens only the first valid service. Choice values, footage and area are
/// not part of the saved row.
pub fn flatten_draft(
    request: &ProposalRequest,
    estimate: &ProposalEstimate,
    created_at: DateTime<Utc>,
) -> Option<DraftRecord> {
    let item = estimate.line_items.first()?;

    let options: BTreeMap<String, bool> = request
        .services
        .iter()
        .find(|s| s.id == item.service_id)
        .map(|selection| {
            selection
                .options
                .iter()
                .filter_map(|(id, value)| match value {
                    OptionValue::Flag(enabled) => Some((id.clone(), *enabled)),
                    OptionValue::Choice(_) => None,
                })
                .collect()
        })
        .unwrap_or_default();

    Some(DraftRecord {
        client_name: request.client_name.clone(),
        address: request.address.clone().unwrap_or_default(),
        trade_id: item.trade_id.clone(),
        job_type_id: item.job_type_id.clone(),
        job_type_name: item.job_type_name.clone(),
        job_size: item.size,
        scope: item.scope.clone(),
        options,
        price_low: item.price.low,
        price_high: item.price.high,
        status: DRAFT_STATUS.to_string(),
        unlocked: false,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::EstimationEngine;
    use crate::core::overlay::ScopeOverlay;
    use crate::domain::model::{PricingOverrides, ServiceSelection, SizeTier};

    #[test]
    fn test_flattens_first_valid_service_only() {
        let request = ProposalRequest {
            client_name: "Pat Homeowner".to_string(),
            address: Some("12 Oak Lane, Columbus, OH 43004".to_string()),
            services: vec![
                ServiceSelection::new("ghost", "landscaping", "sod"),
                ServiceSelection::new("paint", "painting", "single-room")
                    .with_size(SizeTier::Large)
                    .with_footage(320.0)
                    .with_area("bedroom")
                    .with_option("ceiling", OptionValue::Flag(true))
                    .with_option("trim", OptionValue::Flag(false))
                    .with_option("paint_grade", OptionValue::Choice("premium".to_string())),
                ServiceSelection::new("floor", "flooring", "lvp-install"),
            ],
        };
        let estimate = EstimationEngine::default().estimate(
            &request,
            &PricingOverrides::default(),
            &ScopeOverlay::new(),
        );

        let draft = flatten_draft(&request, &estimate, Utc::now()).unwrap();

        assert_eq!(draft.client_name, "Pat Homeowner");
        assert_eq!(draft.trade_id, "painting");
        assert_eq!(draft.job_type_id, "single-room");
        assert_eq!(draft.job_size, SizeTier::Large);
        assert_eq!(draft.price_low, estimate.line_items[0].price.low);
        assert_eq!(draft.price_high, estimate.line_items[0].price.high);
        assert_eq!(draft.status, "draft");
        assert!(!draft.unlocked);

        let expected: BTreeMap<String, bool> =
            [("ceiling".to_string(), true), ("trim".to_string(), false)]
                .into_iter()
                .collect();
        assert_eq!(draft.options, expected);
    }

    #[test]
    fn test_no_valid_service_means_no_draft() {
        let request = ProposalRequest {
            client_name: "Pat".to_string(),
            address: None,
            services: vec![ServiceSelection::new("ghost", "landscaping", "sod")],
        };
        let estimate = EstimationEngine::default().estimate(
            &request,
            &PricingOverrides::default(),
            &ScopeOverlay::new(),
        );

        assert!(flatten_draft(&request, &estimate, Utc::now()).is_none());
    }
}
