use crate::core::DraftStore;
use crate::domain::model::DraftRecord;
use crate::utils::error::{EstimatorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Local filesystem storage for reports and drafts, rooted at a base directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn file_name(record: &DraftRecord) -> String {
        format!(
            "draft-{}-{}-{}.json",
            record.created_at.format("%Y%m%dT%H%M%S%3f"),
            record.trade_id,
            record.job_type_id
        )
    }

    /// 寫入任意輸出檔，必要時建立目錄
    pub fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.to_string_lossy().into_owned())
    }
}

impl DraftStore for LocalStorage {
    fn save_draft(&self, record: &DraftRecord) -> Result<String> {
        let data = serde_json::to_vec_pretty(record)?;
        self.write_file(&Self::file_name(record), &data)
    }

    fn load_draft(&self, location: &str) -> Result<DraftRecord> {
        let path = PathBuf::from(location);
        let full_path = if path.is_absolute() || path.exists() {
            path
        } else {
            Path::new(&self.base_path).join(location)
        };

        let data = fs::read(&full_path).map_err(|e| EstimatorError::StorageError {
            message: format!("cannot read draft '{}': {}", full_path.display(), e),
        })?;
        Ok(serde_json::from_slice(&data)?)
    }
}
