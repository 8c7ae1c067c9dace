pub mod data;

use crate::domain::model::{JobOption, JobType, Trade};
use crate::utils::error::{EstimatorError, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Read-only trade catalog with O(1) lookups by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    trades: Vec<Trade>,
    trade_index: HashMap<String, usize>,
    job_index: HashMap<String, HashMap<String, usize>>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    trades: Vec<Trade>,
}

impl Catalog {
    /// 內建目錄
    pub fn builtin() -> Self {
        Self::index(data::builtin_trades())
    }

    /// 建立目錄並檢查資料是否合理
    pub fn new(trades: Vec<Trade>) -> Result<Self> {
        validate_trades(&trades)?;
        Ok(Self::index(trades))
    }

    /// 從 TOML 檔案載入自訂目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| EstimatorError::CatalogError {
            message: format!("TOML parsing error: {}", e),
        })?;
        Self::new(file.trades)
    }

    fn index(trades: Vec<Trade>) -> Self {
        let mut trade_index = HashMap::new();
        let mut job_index = HashMap::new();

        for (i, trade) in trades.iter().enumerate() {
            trade_index.insert(trade.id.clone(), i);
            let jobs: HashMap<String, usize> = trade
                .job_types
                .iter()
                .enumerate()
                .map(|(j, job)| (job.id.clone(), j))
                .collect();
            job_index.insert(trade.id.clone(), jobs);
        }

        Self {
            trades,
            trade_index,
            job_index,
        }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn find_trade(&self, trade_id: &str) -> Option<&Trade> {
        self.trade_index.get(trade_id).map(|&i| &self.trades[i])
    }

    pub fn find_job_type<'a>(&self, trade: &'a Trade, job_type_id: &str) -> Option<&'a JobType> {
        let j = *self.job_index.get(&trade.id)?.get(job_type_id)?;
        trade.job_types.get(j)
    }

    /// Resolves both ids at once. `None` means the selection is incomplete.
    pub fn resolve(&self, trade_id: &str, job_type_id: &str) -> Option<(&Trade, &JobType)> {
        let trade = self.find_trade(trade_id)?;
        let job_type = self.find_job_type(trade, job_type_id)?;
        Some((trade, job_type))
    }

    pub fn allowed_area_keys(&self, trade_id: &str) -> &[String] {
        self.find_trade(trade_id)
            .map(|t| t.area_keys.as_slice())
            .unwrap_or(&[])
    }

    /// A trade without an `area_keys` list accepts every area key.
    pub fn is_area_allowed(&self, trade_id: &str, area_key: &str) -> bool {
        self.find_trade(trade_id).is_some_and(|trade| {
            trade.area_keys.is_empty() || trade.area_keys.iter().any(|k| k == area_key)
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn catalog_error(message: String) -> EstimatorError {
    EstimatorError::CatalogError { message }
}

fn validate_trades(trades: &[Trade]) -> Result<()> {
    let mut trade_ids = HashSet::new();

    for trade in trades {
        if !trade_ids.insert(trade.id.as_str()) {
            return Err(catalog_error(format!("duplicate trade id '{}'", trade.id)));
        }
        for (name, ratio) in [
            ("materials_ratio", trade.materials_ratio),
            ("labor_ratio", trade.labor_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(catalog_error(format!(
                    "trade '{}' has {} {} outside 0..=1",
                    trade.id, name, ratio
                )));
            }
        }

        let mut job_ids = HashSet::new();
        for job in &trade.job_types {
            if !job_ids.insert(job.id.as_str()) {
                return Err(catalog_error(format!(
                    "duplicate job type id '{}' in trade '{}'",
                    job.id, trade.id
                )));
            }
            validate_job_type(&trade.id, job)?;
        }
    }

    Ok(())
}

fn validate_job_type(trade_id: &str, job: &JobType) -> Result<()> {
    let price = job.base_price;
    if price.low < 0.0 || price.low > price.high {
        return Err(catalog_error(format!(
            "job type '{}/{}' has invalid base price {{{}, {}}}",
            trade_id, job.id, price.low, price.high
        )));
    }

    let days = job.base_days;
    if days.low < 1 || days.low > days.high {
        return Err(catalog_error(format!(
            "job type '{}/{}' has invalid base duration {{{}, {}}}",
            trade_id, job.id, days.low, days.high
        )));
    }

    let mut option_ids = HashSet::new();
    for option in &job.options {
        if !option_ids.insert(option.id()) {
            return Err(catalog_error(format!(
                "duplicate option id '{}' in job type '{}/{}'",
                option.id(),
                trade_id,
                job.id
            )));
        }
        if let JobOption::Choice { id, choices, .. } = option {
            let mut values = HashSet::new();
            if let Some(dup) = choices.iter().find(|c| !values.insert(c.value.as_str())) {
                return Err(catalog_error(format!(
                    "option '{}' lists choice '{}' twice",
                    id, dup.value
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Billing;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CUSTOM_CATALOG: &str = r#"
[[trades]]
id = "siding"
name = "Siding"
materials_ratio = 0.5
labor_ratio = 0.5
billing = "square_foot"
area_keys = ["single_story_exterior", "two_story_exterior"]

[[trades.job_types]]
id = "vinyl-siding"
name = "Vinyl Siding"
base_price = { low = 6000.0, high = 14000.0 }
base_days = { low = 3, high = 6 }
warranty = "5-year workmanship warranty."
exclusions = ["Sheathing replacement"]
scope = ["Remove old siding", "Install house wrap", "Install vinyl siding"]

[[trades.job_types.options]]
kind = "toggle"
id = "trim_wrap"
label = "Wrap trim"
price_delta = 800.0
scope_addition = "Wrap window and door trim in aluminum"

[[trades.job_types.options]]
kind = "choice"
id = "profile"
label = "Profile"
choices = [
    { value = "dutch_lap", label = "Dutch lap" },
    { value = "board_batten", label = "Board and batten", price_delta = 1200.0 },
]
"#;

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();

        let trade = catalog.find_trade("painting").unwrap();
        assert_eq!(trade.materials_ratio, 0.25);
        assert_eq!(trade.labor_ratio, 0.75);

        let job = catalog.find_job_type(trade, "single-room").unwrap();
        assert_eq!(job.base_price.low, 450.0);
        assert_eq!(job.base_price.high, 850.0);

        assert!(catalog.find_trade("landscaping").is_none());
        assert!(catalog.find_job_type(trade, "mural").is_none());
        assert!(catalog.resolve("painting", "mural").is_none());
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        assert!(Catalog::new(data::builtin_trades()).is_ok());
    }

    #[test]
    fn test_area_allow_list() {
        let catalog = Catalog::builtin();

        assert!(catalog.is_area_allowed("bathroom", "master_bath"));
        assert!(!catalog.is_area_allowed("bathroom", "kitchen"));
        assert!(!catalog.is_area_allowed("unknown", "kitchen"));
        assert!(catalog.allowed_area_keys("unknown").is_empty());
    }

    #[test]
    fn test_trade_without_area_keys_accepts_any_area() {
        let content = CUSTOM_CATALOG.replace(
            "area_keys = [\"single_story_exterior\", \"two_story_exterior\"]\n",
            "",
        );
        let catalog = Catalog::from_toml_str(&content).unwrap();

        assert!(catalog.allowed_area_keys("siding").is_empty());
        assert!(catalog.is_area_allowed("siding", "whole_house"));
        assert!(catalog.is_area_allowed("siding", "kitchen"));
    }

    #[test]
    fn test_custom_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(CUSTOM_CATALOG.as_bytes()).unwrap();

        let catalog = Catalog::from_file(temp_file.path()).unwrap();
        let (trade, job) = catalog.resolve("siding", "vinyl-siding").unwrap();

        assert_eq!(trade.billing, Billing::SquareFoot);
        assert_eq!(job.options.len(), 2);
        match &job.options[1] {
            JobOption::Choice { choices, .. } => {
                assert_eq!(choices[0].price_delta, 0.0);
                assert_eq!(choices[1].price_delta, 1200.0);
            }
            other => panic!("expected choice option, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_catalog_rejects_inverted_price() {
        let content = CUSTOM_CATALOG.replace("low = 6000.0, high = 14000.0", "low = 9000.0, high = 100.0");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, EstimatorError::CatalogError { .. }));
    }

    #[test]
    fn test_custom_catalog_rejects_zero_day_duration() {
        let content = CUSTOM_CATALOG.replace("low = 3, high = 6", "low = 0, high = 6");
        assert!(Catalog::from_toml_str(&content).is_err());
    }
}
