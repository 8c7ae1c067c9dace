use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Catalog,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EstimatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EstimatorError::ConfigValidationError { .. }
            | EstimatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EstimatorError::CatalogError { .. } => ErrorCategory::Catalog,
            EstimatorError::IoError(_) | EstimatorError::StorageError { .. } => ErrorCategory::Io,
            EstimatorError::SerializationError(_) | EstimatorError::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Catalog => ErrorSeverity::Critical,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EstimatorError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the proposal file"
            }
            EstimatorError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the proposal file and run again"
            }
            EstimatorError::CatalogError { .. } => {
                "Verify the custom catalog file or remove engine.catalog_path to use the built-in catalog"
            }
            EstimatorError::IoError(_) | EstimatorError::StorageError { .. } => {
                "Make sure the path exists and is writable"
            }
            EstimatorError::SerializationError(_) | EstimatorError::CsvError(_) => {
                "Retry with a different output format"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EstimatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            EstimatorError::CatalogError { message } => {
                format!("The pricing catalog could not be loaded: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
