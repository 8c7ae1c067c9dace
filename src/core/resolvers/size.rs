use crate::domain::model::SizeTier;

pub fn tier_size_factor(tier: SizeTier) -> f64 {
    match tier {
        SizeTier::Small => 0.8,
        SizeTier::Medium => 1.0,
        SizeTier::Large => 1.3,
    }
}

/// Size factor from a measured area in square feet.
///
/// Steps below 400 sq ft, then keeps growing by 0.4 per additional 400 sq ft
/// so very large jobs are not capped at the "large" factor.
pub fn continuous_size_factor(area_sqft: f64) -> f64 {
    if area_sqft < 100.0 {
        0.75
    } else if area_sqft <= 200.0 {
        1.0
    } else if area_sqft <= 400.0 {
        1.4
    } else {
        1.4 + ((area_sqft - 400.0) / 400.0) * 0.4
    }
}

/// Buckets a measured area into a tier for duration scaling.
pub fn tier_for_area(area_sqft: f64) -> SizeTier {
    if area_sqft < 100.0 {
        SizeTier::Small
    } else if area_sqft <= 400.0 {
        SizeTier::Medium
    } else {
        SizeTier::Large
    }
}
