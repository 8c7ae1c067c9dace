pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use catalog::Catalog;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::EstimationEngine, overlay::ScopeOverlay};
pub use domain::model::{
    LineItem, OptionValue, PricingOverrides, ProposalEstimate, ProposalRequest, ServiceSelection,
    SizeTier,
};
pub use utils::error::{EstimatorError, Result};
