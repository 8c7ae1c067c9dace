use crate::domain::model::DraftRecord;
use crate::utils::error::Result;

/// Persistence collaborator for saved drafts.
pub trait DraftStore {
    /// Stores the record and returns the location it was written to.
    fn save_draft(&self, record: &DraftRecord) -> Result<String>;
    fn load_draft(&self, location: &str) -> Result<DraftRecord>;
}
