use crate::catalog::Catalog;
use crate::core::engine::EstimationEngine;
use crate::core::overlay::ScopeOverlay;
use crate::domain::model::{PricingOverrides, ProposalRequest, ServiceSelection};
use crate::utils::error::{EstimatorError, Result};
use crate::utils::validation::{
    validate_allowed_values, validate_multiplier, validate_non_empty_string,
    validate_non_negative, validate_path, validate_unique, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const OUTPUT_FORMATS: &[&str] = &["json", "csv"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub proposal: ProposalSection,
    pub tenant: Option<TenantConfig>,
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub services: Vec<ServiceSelection>,
    #[serde(default)]
    pub scope_overlay: HashMap<String, Vec<String>>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSection {
    pub client_name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantConfig {
    pub name: Option<String>,
    pub price_multiplier: Option<f64>,
    pub trade_multipliers: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub enforce_area_allow_list: Option<bool>,
    pub catalog_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: Option<String>,
    pub formats: Option<Vec<String>>,
    pub save_draft: Option<bool>,
    pub draft_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EstimatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EstimatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CLIENT_ADDRESS})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("proposal.client_name", &self.proposal.client_name)?;

        let overrides = self.overrides();
        validate_multiplier("tenant.price_multiplier", overrides.price_multiplier)?;
        for (trade_id, multiplier) in &overrides.trade_multipliers {
            validate_multiplier(&format!("tenant.trade_multipliers.{}", trade_id), *multiplier)?;
        }

        validate_unique("services.id", self.services.iter().map(|s| s.id.as_str()))?;
        for service in &self.services {
            validate_non_empty_string("services.id", &service.id)?;
            if let Some(footage) = service.footage {
                validate_non_negative(&format!("services.{}.footage", service.id), footage)?;
            }
        }

        if let Some(path) = self.engine.as_ref().and_then(|e| e.catalog_path.as_deref()) {
            validate_path("engine.catalog_path", path)?;
        }

        validate_path("output.output_path", self.output_path())?;
        validate_path("output.draft_path", self.draft_path())?;
        validate_allowed_values("output.formats", &self.formats(), OUTPUT_FORMATS)?;

        Ok(())
    }

    pub fn request(&self) -> ProposalRequest {
        ProposalRequest {
            client_name: self.proposal.client_name.clone(),
            address: self.proposal.address.clone(),
            services: self.services.clone(),
        }
    }

    /// 取得租戶乘數，未設定時為 1.0
    pub fn overrides(&self) -> PricingOverrides {
        let tenant = self.tenant.as_ref();
        PricingOverrides {
            price_multiplier: tenant.and_then(|t| t.price_multiplier).unwrap_or(1.0),
            trade_multipliers: tenant
                .and_then(|t| t.trade_multipliers.clone())
                .unwrap_or_default(),
        }
    }

    pub fn overlay(&self) -> ScopeOverlay {
        ScopeOverlay::from(self.scope_overlay.clone())
    }

    pub fn enforce_area_allow_list(&self) -> bool {
        self.engine
            .as_ref()
            .and_then(|e| e.enforce_area_allow_list)
            .unwrap_or(true)
    }

    /// 有設定 catalog_path 時載入自訂目錄，否則使用內建目錄
    pub fn catalog(&self) -> Result<Catalog> {
        match self.engine.as_ref().and_then(|e| e.catalog_path.as_deref()) {
            Some(path) => {
                tracing::info!("📚 Loading catalog from: {}", path);
                Catalog::from_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn build_engine(&self) -> Result<EstimationEngine> {
        Ok(EstimationEngine::new(self.catalog()?)
            .with_area_allow_list(self.enforce_area_allow_list()))
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.output_path.as_deref())
            .unwrap_or("./output")
    }

    pub fn draft_path(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.draft_path.as_deref())
            .unwrap_or("./drafts")
    }

    pub fn formats(&self) -> Vec<String> {
        self.output
            .as_ref()
            .and_then(|o| o.formats.clone())
            .unwrap_or_else(|| vec!["json".to_string()])
    }

    pub fn save_draft(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.save_draft)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OptionValue, SizeTier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[proposal]
client_name = "Morgan Lee"
address = "77 Pine St, Portland, OR 97204"

[tenant]
name = "Northwest Painting Co"
price_multiplier = 1.1

[tenant.trade_multipliers]
painting = 1.05

[[services]]
id = "living"
trade = "painting"
job_type = "single-room"
size = "large"
area = "living_room"

[services.options]
ceiling = true
paint_grade = "premium"

[[services]]
id = "floor"
trade = "flooring"
job_type = "lvp-install"
size = 1
footage = 250.0

[output]
formats = ["json", "csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.services.len(), 2);
        let living = &config.services[0];
        assert_eq!(living.trade_id.as_deref(), Some("painting"));
        assert_eq!(living.size, SizeTier::Large);
        assert_eq!(living.options.get("ceiling"), Some(&OptionValue::Flag(true)));
        assert_eq!(
            living.options.get("paint_grade"),
            Some(&OptionValue::Choice("premium".to_string()))
        );
        assert_eq!(config.services[1].size, SizeTier::Small);
        assert_eq!(config.services[1].footage, Some(250.0));

        let overrides = config.overrides();
        assert_eq!(overrides.price_multiplier, 1.1);
        assert_eq!(overrides.trade_multiplier("painting"), 1.05);
        assert_eq!(overrides.trade_multiplier("flooring"), 1.0);

        assert_eq!(config.formats(), vec!["json", "csv"]);
        assert_eq!(config.output_path(), "./output");
        assert!(!config.save_draft());
        assert!(config.enforce_area_allow_list());
    }

    #[test]
    fn test_defaults_without_optional_sections() {
        let config = TomlConfig::from_toml_str(
            r#"
[proposal]
client_name = "Sam"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert!(config.services.is_empty());
        assert_eq!(config.overrides(), PricingOverrides::default());
        assert!(config.overlay().is_empty());
        assert_eq!(config.formats(), vec!["json"]);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BID_ESTIMATOR_TEST_ADDRESS", "9 Bay Rd, Tampa, FL 33602");

        let toml_content = r#"
[proposal]
client_name = "Jordan"
address = "${BID_ESTIMATOR_TEST_ADDRESS}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.proposal.address.as_deref(),
            Some("9 Bay Rd, Tampa, FL 33602")
        );

        std::env::remove_var("BID_ESTIMATOR_TEST_ADDRESS");
    }

    #[test]
    fn test_config_validation() {
        let negative_multiplier = r#"
[proposal]
client_name = "Jordan"

[tenant]
price_multiplier = -1.0
"#;
        let config = TomlConfig::from_toml_str(negative_multiplier).unwrap();
        assert!(config.validate().is_err());

        let duplicate_ids = r#"
[proposal]
client_name = "Jordan"

[[services]]
id = "a"
trade = "painting"
job_type = "single-room"

[[services]]
id = "a"
trade = "painting"
job_type = "exterior"
"#;
        let config = TomlConfig::from_toml_str(duplicate_ids).unwrap();
        assert!(config.validate().is_err());

        let bad_format = r#"
[proposal]
client_name = "Jordan"

[output]
formats = ["pdf"]
"#;
        let config = TomlConfig::from_toml_str(bad_format).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_size_tier_is_a_parse_error() {
        let content = r#"
[proposal]
client_name = "Jordan"

[[services]]
id = "a"
trade = "painting"
job_type = "single-room"
size = 7
"#;
        let err = TomlConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, EstimatorError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[proposal]
client_name = "File Client"

[scope_overlay]
svc = ["Rewritten scope"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.proposal.client_name, "File Client");
        assert_eq!(config.overlay().get("svc").unwrap(), ["Rewritten scope"]);
    }

    #[test]
    fn test_catalog_follows_catalog_path() {
        let mut catalog_file = NamedTempFile::new().unwrap();
        catalog_file
            .write_all(
                br#"
[[trades]]
id = "gutters"
name = "Gutters"
materials_ratio = 0.4
labor_ratio = 0.6

[[trades.job_types]]
id = "cleaning"
name = "Gutter Cleaning"
base_price = { low = 150.0, high = 350.0 }
base_days = { low = 1, high = 1 }
"#,
            )
            .unwrap();
        let catalog_path = catalog_file.path().to_string_lossy().replace('\\', "/");

        let config = TomlConfig::from_toml_str(&format!(
            "[proposal]\nclient_name = \"Jordan\"\n\n[engine]\ncatalog_path = \"{}\"\n",
            catalog_path
        ))
        .unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.trades().len(), 1);
        assert!(catalog.find_trade("gutters").is_some());
        assert!(catalog.find_trade("painting").is_none());

        let builtin = TomlConfig::from_toml_str("[proposal]\nclient_name = \"Jordan\"\n")
            .unwrap()
            .catalog()
            .unwrap();
        assert!(builtin.find_trade("painting").is_some());
    }
}
