//! Externally supplied scope replacements, keyed by service id.

use crate::domain::model::LineItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeOverlay {
    replacements: HashMap<String, Vec<String>>,
}

impl ScopeOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, service_id: impl Into<String>, scope: Vec<String>) {
        self.replacements.insert(service_id.into(), scope);
    }

    pub fn get(&self, service_id: &str) -> Option<&[String]> {
        self.replacements.get(service_id).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Replaces the scope of every item with a non-empty entry. Never merges.
    pub fn apply(&self, line_items: &mut [LineItem]) {
        for item in line_items.iter_mut() {
            match self.get(&item.service_id) {
                Some(scope) if !scope.is_empty() => {
                    tracing::debug!(service = %item.service_id, lines = scope.len(), "scope replaced");
                    item.scope = scope.to_vec();
                }
                _ => {}
            }
        }
    }
}

impl From<HashMap<String, Vec<String>>> for ScopeOverlay {
    fn from(replacements: HashMap<String, Vec<String>>) -> Self {
        Self { replacements }
    }
}
