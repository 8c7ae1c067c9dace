use bid_estimator::core::quick::QuickEstimateRequest;
use bid_estimator::utils::logger;
use bid_estimator::utils::validation::{validate_multiplier, validate_non_negative};
use bid_estimator::EstimationEngine;
use clap::Parser;

#[derive(Parser)]
#[command(name = "quick-estimate")]
#[command(about = "Single-service estimate from a measured area and postal code")]
struct QuickArgs {
    /// Trade id (e.g. painting, flooring)
    #[arg(short, long)]
    trade: String,

    /// Job type id within the trade
    #[arg(short, long)]
    job_type: String,

    /// Measured area in square feet
    #[arg(short, long, default_value_t = 0.0)]
    sqft: f64,

    /// Postal code used for the regional multiplier
    #[arg(short, long)]
    zip: Option<String>,

    /// Tenant price multiplier
    #[arg(long, default_value_t = 1.0)]
    tenant_multiplier: f64,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = QuickArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    validate_non_negative("sqft", args.sqft)?;
    validate_multiplier("tenant_multiplier", args.tenant_multiplier)?;

    let request = QuickEstimateRequest {
        trade_id: args.trade.clone(),
        job_type_id: args.job_type.clone(),
        area_sqft: args.sqft,
        postal_code: args.zip.clone(),
        tenant_multiplier: args.tenant_multiplier,
    };

    let engine = EstimationEngine::default();
    let Some(estimate) = engine.quick_estimate(&request) else {
        eprintln!(
            "❌ Unknown service '{}/{}', run `bid-estimator --list-catalog` to see what is offered",
            args.trade, args.job_type
        );
        std::process::exit(1);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("📋 {} / {}", estimate.trade_name, estimate.job_type_name);
    println!(
        "  Area: {} sq ft ({}, x{:.2})",
        estimate.area_sqft, estimate.size, estimate.size_factor
    );
    if let Some(region) = &estimate.region {
        println!("  Region: {} ({}), x{}", region.state, region.region, region.multiplier);
    }
    println!(
        "  Price: ${} - ${}",
        estimate.price.low, estimate.price.high
    );
    println!("  Duration: {}-{} days", estimate.days.low, estimate.days.high);

    Ok(())
}
