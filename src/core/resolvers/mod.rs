//! Independent multiplier resolvers. Each one is a pure lookup with a neutral fallback.

pub mod area;
pub mod footage;
pub mod region;
pub mod size;

pub use area::AreaFactors;
pub use footage::{FootagePricing, FootageUnit, UnitPrice};
pub use region::{regional_multiplier, RegionTable};
pub use size::{continuous_size_factor, tier_for_area, tier_size_factor};

/// Factor used whenever a key or address does not resolve.
pub const NEUTRAL_FACTOR: f64 = 1.0;
