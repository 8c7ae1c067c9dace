pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bid-estimator")]
#[command(about = "Turn contractor service selections into a proposal price and duration estimate")]
pub struct CliConfig {
    /// Path to the proposal TOML file
    #[arg(short, long, default_value = "proposal.toml")]
    pub config: String,

    /// Override output.output_path from the config
    #[arg(long)]
    pub output_path: Option<String>,

    /// Override output.formats from the config (json, csv)
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Save the first valid service as a draft
    #[arg(long)]
    pub save_draft: bool,

    /// Print the trade catalog (the config's catalog_path when set) and exit
    #[arg(long)]
    pub list_catalog: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
