use anyhow::Result;
use bid_estimator::app::report;
use bid_estimator::core::draft::flatten_draft;
use bid_estimator::core::DraftStore;
use bid_estimator::domain::model::{DayRange, PriceRange};
use bid_estimator::utils::validation::Validate;
use bid_estimator::{
    Catalog, EstimationEngine, LocalStorage, PricingOverrides, ServiceSelection, SizeTier,
    TomlConfig,
};
use chrono::Utc;
use tempfile::TempDir;

/// 測試完整流程：TOML 提案 -> 估價 -> 報表 -> 草稿
#[test]
fn test_proposal_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap();
    let normalized_path = temp_path.replace('\\', "/");

    let config_content = format!(
        r#"
[proposal]
client_name = "Casey Morgan"
address = "2200 N High St, Columbus, OH 43201"

[tenant]
name = "Buckeye Home Services"
price_multiplier = 1.0

[[services]]
id = "living"
trade = "painting"
job_type = "single-room"
size = "medium"
area = "living_room"

[services.options]
ceiling = true
paint_grade = "standard"

[[services]]
id = "walls"
trade = "drywall"
job_type = "new-install"
footage = 300.0

[[services]]
id = "ghost"
trade = "landscaping"
job_type = "sod"

[scope_overlay]
walls = ["Hang and finish basement drywall", "Prime for paint"]

[output]
output_path = "{path}/reports"
draft_path = "{path}/drafts"
formats = ["json", "csv"]
save_draft = true
"#,
        path = normalized_path
    );

    let config_path = format!("{}/proposal.toml", temp_path);
    std::fs::write(&config_path, config_content)?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let engine = config.build_engine()?;
    let request = config.request();
    let estimate = engine.estimate(&request, &config.overrides(), &config.overlay());

    assert_eq!(estimate.line_items.len(), 2);
    assert_eq!(estimate.label, "Multi-Service Proposal (2 services)");
    assert_eq!(estimate.region.as_ref().unwrap().abbreviation, "OH");

    // (450 + 200) * 0.95 = 617.5, (850 + 200) * 0.95 = 997.5
    assert_eq!(estimate.line_items[0].price, PriceRange { low: 600, high: 1000 });
    // 300 sq ft: 750 * 0.95 = 712.5, 1350 * 0.95 = 1282.5
    assert_eq!(estimate.line_items[1].price, PriceRange { low: 700, high: 1300 });
    assert_eq!(estimate.price, PriceRange { low: 1300, high: 2300 });
    assert_eq!(
        estimate.line_items[1].scope,
        vec!["Hang and finish basement drywall", "Prime for paint"]
    );

    let storage = LocalStorage::new(config.output_path().to_string());
    let written = report::write_reports(&estimate, &storage, &config.formats())?;
    assert_eq!(written.len(), 2);

    let json = std::fs::read_to_string(temp_dir.path().join("reports/estimate.json"))?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed["price"]["low"], 1300);
    assert_eq!(parsed["line_items"].as_array().unwrap().len(), 2);

    let csv = std::fs::read_to_string(temp_dir.path().join("reports/estimate.csv"))?;
    assert!(csv.lines().last().unwrap().starts_with("TOTAL,"));

    assert!(config.save_draft());
    let drafts = LocalStorage::new(config.draft_path().to_string());
    let record = flatten_draft(&request, &estimate, Utc::now()).unwrap();
    let location = drafts.save_draft(&record)?;
    let loaded = drafts.load_draft(&location)?;

    assert_eq!(loaded.client_name, "Casey Morgan");
    assert_eq!(loaded.trade_id, "painting");
    assert_eq!(loaded.job_size, SizeTier::Medium);
    assert_eq!(loaded.price_low, 600);
    assert_eq!(loaded.price_high, 1000);
    assert_eq!(loaded.options.get("ceiling"), Some(&true));
    assert!(!loaded.options.contains_key("paint_grade"));
    assert_eq!(loaded.status, "draft");

    Ok(())
}

/// 自訂目錄：catalog_path 指向 TOML 目錄檔
#[test]
fn test_custom_catalog_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let catalog_content = r#"
[[trades]]
id = "gutters"
name = "Gutters"
materials_ratio = 0.4
labor_ratio = 0.6
billing = "flat"
area_keys = []

[[trades.job_types]]
id = "cleaning"
name = "Gutter Cleaning"
base_price = { low = 150.0, high = 350.0 }
base_days = { low = 1, high = 1 }
exclusions = []
scope = ["Clear debris from gutters", "Flush downspouts"]
options = []
"#;
    let catalog_path = format!("{}/catalog.toml", temp_path);
    std::fs::write(&catalog_path, catalog_content)?;

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[proposal]
client_name = "Drew"

[engine]
catalog_path = "{}"

[[services]]
id = "gutters"
trade = "gutters"
job_type = "cleaning"
size = "small"

[[services]]
id = "paint"
trade = "painting"
job_type = "single-room"
"#,
        catalog_path
    ))?;
    config.validate()?;

    let engine = config.build_engine()?;
    let estimate = engine.estimate(&config.request(), &config.overrides(), &config.overlay());

    // painting is not in the custom catalog
    assert_eq!(estimate.line_items.len(), 1);
    assert_eq!(estimate.label, "Gutter Cleaning");
    // 150 * 0.8 = 120, 350 * 0.8 = 280
    assert_eq!(estimate.price, PriceRange { low: 100, high: 300 });
    assert!(estimate.warranty.is_empty());

    Ok(())
}

#[test]
fn test_area_allow_list_can_be_disabled() -> Result<()> {
    let base = r#"
[proposal]
client_name = "Drew"

[[services]]
id = "vanity"
trade = "bathroom"
job_type = "vanity-replacement"
area = "kitchen"
"#;

    let strict = TomlConfig::from_toml_str(base)?;
    let strict_estimate = strict.build_engine()?.estimate(
        &strict.request(),
        &strict.overrides(),
        &strict.overlay(),
    );
    assert_eq!(strict_estimate.price, PriceRange { low: 800, high: 2500 });

    let lenient = TomlConfig::from_toml_str(&format!(
        "{}\n[engine]\nenforce_area_allow_list = false\n",
        base
    ))?;
    let lenient_estimate = lenient.build_engine()?.estimate(
        &lenient.request(),
        &lenient.overrides(),
        &lenient.overlay(),
    );
    // 800 * 1.2 = 960, 2500 * 1.2 = 3000
    assert_eq!(lenient_estimate.price, PriceRange { low: 1000, high: 3000 });

    Ok(())
}

#[test]
fn test_missing_draft_is_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    let drafts = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());

    let err = drafts.load_draft("draft-missing.json").unwrap_err();
    assert!(matches!(
        err,
        bid_estimator::EstimatorError::StorageError { .. }
    ));
}

/// 自訂目錄未列 area_keys 時，區域係數照常套用
#[test]
fn test_custom_trade_without_area_keys_applies_area_factor() -> Result<()> {
    let catalog = Catalog::from_toml_str(
        r#"
[[trades]]
id = "siding"
name = "Siding"
materials_ratio = 0.5
labor_ratio = 0.5

[[trades.job_types]]
id = "vinyl"
name = "Vinyl Siding"
base_price = { low = 1000.0, high = 2000.0 }
base_days = { low = 2, high = 4 }
"#,
    )?;
    let engine = EstimationEngine::new(catalog);

    let items = engine.line_items(
        &[ServiceSelection::new("house", "siding", "vinyl").with_area("whole_house")],
        None,
        &PricingOverrides::default(),
    );

    // 1000 * 3.5 = 3500, 2000 * 3.5 = 7000
    assert_eq!(items[0].price, PriceRange { low: 3500, high: 7000 });
    // ceil(2 * 1.2) = 3, ceil(4 * 1.3) = 6
    assert_eq!(items[0].days, DayRange { low: 3, high: 6 });

    Ok(())
}
