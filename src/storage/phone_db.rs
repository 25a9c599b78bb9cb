//! Bundled phone specification database.
//!
//! The asset is a CSV file with a `name,cpu,ram` header. It is read once and
//! searched in memory.

use std::path::Path;

use tracing::{debug, warn};

use super::error::StorageError;
use crate::model::PhoneDbItem;

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_CHARS: usize = 2;

/// Read-only list of known phones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneDatabase {
    phones: Vec<PhoneDbItem>,
}

impl PhoneDatabase {
    /// Parses CSV content. Rows that do not deserialize, or that have an
    /// empty name, are skipped with a warning.
    pub fn parse_csv(content: &str) -> Result<Self, StorageError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        if !reader.headers()?.iter().any(|h| h == "name") {
            warn!("phone database has no name column");
        }

        let mut phones = Vec::new();
        for result in reader.deserialize::<PhoneDbItem>() {
            match result {
                Ok(phone) if !phone.name.is_empty() => phones.push(phone),
                Ok(_) => warn!("skipping phone database row without a name"),
                Err(e) => warn!("skipping malformed phone database row: {e}"),
            }
        }
        debug!(count = phones.len(), "parsed phone database");
        Ok(Self { phones })
    }

    /// Loads the database asset from disk.
    pub async fn load(path: &Path) -> Result<Self, StorageError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse_csv(&content)
    }

    pub fn phones(&self) -> &[PhoneDbItem] {
        &self.phones
    }

    /// Case-insensitive substring search on phone names, capped at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&PhoneDbItem> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.phones
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }
}
