use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Inclusive `{low, high}` range of currency amounts before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateRange {
    pub low: f64,
    pub high: f64,
}

impl RateRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }
}

/// Rounded price range. Bounds are whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: i64,
    pub high: i64,
}

impl PriceRange {
    /// Keeps `low <= high` regardless of argument order.
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
        }
    }
}

/// Duration range in whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub low: u32,
    pub high: u32,
}

impl DayRange {
    pub fn new(low: u32, high: u32) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    #[default]
    Flat,
    SquareFoot,
    LinearFoot,
}

impl Billing {
    pub fn is_footage(&self) -> bool {
        !matches!(self, Billing::Flat)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub name: String,
    pub materials_ratio: f64,
    pub labor_ratio: f64,
    #[serde(default)]
    pub billing: Billing,
    /// Area context keys offered for this trade. Empty means unrestricted.
    #[serde(default)]
    pub area_keys: Vec<String>,
    pub job_types: Vec<JobType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobType {
    pub id: String,
    pub name: String,
    pub base_price: RateRange,
    pub base_days: DayRange,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub options: Vec<JobOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobOption {
    Toggle {
        id: String,
        label: String,
        #[serde(default)]
        price_delta: Option<f64>,
        #[serde(default)]
        scope_addition: Option<String>,
    },
    Choice {
        id: String,
        label: String,
        choices: Vec<Choice>,
    },
}

impl JobOption {
    pub fn id(&self) -> &str {
        match self {
            JobOption::Toggle { id, .. } | JobOption::Choice { id, .. } => id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub price_delta: f64,
    #[serde(default)]
    pub scope_addition: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SizeRepr", into = "u8")]
pub enum SizeTier {
    Small,
    #[default]
    Medium,
    Large,
}

impl SizeTier {
    pub fn as_u8(&self) -> u8 {
        match self {
            SizeTier::Small => 1,
            SizeTier::Medium => 2,
            SizeTier::Large => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<SizeTier> for u8 {
    fn from(tier: SizeTier) -> Self {
        tier.as_u8()
    }
}

impl TryFrom<u8> for SizeTier {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(SizeTier::Small),
            2 => Ok(SizeTier::Medium),
            3 => Ok(SizeTier::Large),
            other => Err(format!("size tier must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl std::str::FromStr for SizeTier {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "small" => Ok(SizeTier::Small),
            "2" | "medium" => Ok(SizeTier::Medium),
            "3" | "large" => Ok(SizeTier::Large),
            other => Err(format!("unknown size tier '{}'", other)),
        }
    }
}

/// Size tiers may be written as `2` or `"medium"` in config files.
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Tier(u8),
    Name(String),
}

impl TryFrom<SizeRepr> for SizeTier {
    type Error = String;

    fn try_from(repr: SizeRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            SizeRepr::Tier(n) => SizeTier::try_from(n),
            SizeRepr::Name(name) => name.parse(),
        }
    }
}

/// Selected value for one option: a toggle flag or a choice value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Choice(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSelection {
    pub id: String,
    #[serde(default, alias = "trade")]
    pub trade_id: Option<String>,
    #[serde(default, alias = "job_type")]
    pub job_type_id: Option<String>,
    #[serde(default)]
    pub size: SizeTier,
    #[serde(default)]
    pub footage: Option<f64>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub options: BTreeMap<String, OptionValue>,
    #[serde(default)]
    pub scope_override: Option<Vec<String>>,
}

impl ServiceSelection {
    pub fn new(id: impl Into<String>, trade_id: &str, job_type_id: &str) -> Self {
        Self {
            id: id.into(),
            trade_id: Some(trade_id.to_string()),
            job_type_id: Some(job_type_id.to_string()),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: SizeTier) -> Self {
        self.size = size;
        self
    }

    pub fn with_footage(mut self, footage: f64) -> Self {
        self.footage = Some(footage);
        self
    }

    pub fn with_area(mut self, area: &str) -> Self {
        self.area = Some(area.to_string());
        self
    }

    pub fn with_option(mut self, option_id: &str, value: OptionValue) -> Self {
        self.options.insert(option_id.to_string(), value);
        self
    }
}

/// Everything the form collects for one proposal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub state: String,
    pub abbreviation: String,
    pub region: String,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub materials: PriceRange,
    pub labor: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service_id: String,
    pub trade_id: String,
    pub trade_name: String,
    pub job_type_id: String,
    pub job_type_name: String,
    pub size: SizeTier,
    pub scope: Vec<String>,
    pub price: PriceRange,
    pub days: DayRange,
    pub breakdown: CostBreakdown,
    pub warranty: Option<String>,
    pub exclusions: Vec<String>,
    pub region: Option<RegionInfo>,
    pub footage: Option<f64>,
    pub area: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalEstimate {
    pub label: String,
    pub line_items: Vec<LineItem>,
    pub scope: Vec<String>,
    pub price: PriceRange,
    pub days: DayRange,
    pub exclusions: Vec<String>,
    pub warranty: String,
    pub region: Option<RegionInfo>,
}

/// Tenant-level multipliers, passed explicitly into the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingOverrides {
    #[serde(default = "neutral_multiplier")]
    pub price_multiplier: f64,
    #[serde(default)]
    pub trade_multipliers: HashMap<String, f64>,
}

fn neutral_multiplier() -> f64 {
    1.0
}

impl Default for PricingOverrides {
    fn default() -> Self {
        Self {
            price_multiplier: 1.0,
            trade_multipliers: HashMap::new(),
        }
    }
}

impl PricingOverrides {
    pub fn trade_multiplier(&self, trade_id: &str) -> f64 {
        self.trade_multipliers.get(trade_id).copied().unwrap_or(1.0)
    }
}

/// Flattened proposal row written when a draft is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub client_name: String,
    pub address: String,
    pub trade_id: String,
    pub job_type_id: String,
    pub job_type_name: String,
    pub job_size: SizeTier,
    pub scope: Vec<String>,
    pub options: BTreeMap<String, bool>,
    pub price_low: i64,
    pub price_high: i64,
    pub status: String,
    pub unlocked: bool,
    pub created_at: DateTime<Utc>,
}
