use bid_estimator::app::report;
use bid_estimator::core::draft::flatten_draft;
use bid_estimator::core::DraftStore;
use bid_estimator::utils::error::{EstimatorError, ErrorSeverity};
use bid_estimator::utils::{logger, validation::Validate};
use bid_estimator::{Catalog, CliConfig, LocalStorage, TomlConfig};
use clap::Parser;
use std::path::Path;

fn main() {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let result = if args.list_catalog {
        list_catalog(&args)
    } else {
        run(&args)
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Estimate failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

/// 有提案檔時列出其目錄（含自訂 catalog_path），否則列出內建目錄
fn list_catalog(args: &CliConfig) -> Result<(), EstimatorError> {
    let catalog = if Path::new(&args.config).exists() {
        TomlConfig::from_file(&args.config)?.catalog()?
    } else {
        tracing::debug!("{} not found, listing built-in catalog", args.config);
        Catalog::builtin()
    };
    print_catalog(&catalog);
    Ok(())
}

fn run(args: &CliConfig) -> Result<(), EstimatorError> {
    tracing::info!("📁 Loading proposal from: {}", args.config);
    let mut config = TomlConfig::from_file(&args.config)?;

    // 套用命令列覆蓋設定
    if args.output_path.is_some() || !args.format.is_empty() || args.save_draft {
        let output = config.output.get_or_insert_with(Default::default);
        if let Some(path) = &args.output_path {
            output.output_path = Some(path.clone());
        }
        if !args.format.is_empty() {
            output.formats = Some(args.format.clone());
        }
        if args.save_draft {
            output.save_draft = Some(true);
        }
    }

    config.validate()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    let engine = config.build_engine()?;
    let request = config.request();
    let estimate = engine.estimate(&request, &config.overrides(), &config.overlay());

    println!("{}", report::render_summary(&estimate));

    let storage = LocalStorage::new(config.output_path().to_string());
    for path in report::write_reports(&estimate, &storage, &config.formats())? {
        println!("📁 Output saved to: {}", path);
    }

    if config.save_draft() {
        let drafts = LocalStorage::new(config.draft_path().to_string());
        match flatten_draft(&request, &estimate, chrono::Utc::now()) {
            Some(record) => {
                let location = drafts.save_draft(&record)?;
                println!("📝 Draft saved to: {}", location);
            }
            None => tracing::warn!("No valid service selected, draft not saved"),
        }
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for trade in catalog.trades() {
        println!(
            "{} ({}) materials {:.0}% / labor {:.0}%",
            trade.name,
            trade.id,
            trade.materials_ratio * 100.0,
            trade.labor_ratio * 100.0
        );
        for job in &trade.job_types {
            println!(
                "  {:<22} {:<38} ${}-${}  {}-{} days",
                job.id,
                job.name,
                job.base_price.low,
                job.base_price.high,
                job.base_days.low,
                job.base_days.high
            );
        }
        if !trade.area_keys.is_empty() {
            println!("  areas: {}", trade.area_keys.join(", "));
        }
    }
}
