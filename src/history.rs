// src/history.rs
//! Recent profile searches, kept by the command line front end in a JSON file

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

use crate::types::ProfileSearchFilters;
use crate::utils::{read_file_content, write_file_content};

pub const MAX_HISTORY_ENTRIES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub searched_at: DateTime<Utc>,
    pub filters: ProfileSearchFilters,
    pub results: Vec<Value>,
}

pub struct SearchHistory {
    path: PathBuf,
}

impl SearchHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Newest first; a missing file is an empty history
    pub async fn load(&self) -> Result<Vec<HistoryEntry>> {
        if tokio::fs::metadata(&self.path).await.is_err() {
            return Ok(Vec::new());
        }

        let content = read_file_content(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse search history: {}", self.path.display()))
    }

    /// Prepend a search and keep only the most recent entries
    pub async fn record(
        &self,
        filters: &ProfileSearchFilters,
        results: &[Value],
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            searched_at: Utc::now(),
            filters: filters.clone(),
            results: results.to_vec(),
        };

        let mut entries = self.load().await?;
        entries.insert(0, entry.clone());
        entries.truncate(MAX_HISTORY_ENTRIES);

        self.save(&entries).await?;
        debug!(
            "Recorded search {} ({} entries kept)",
            entry.id,
            entries.len()
        );
        Ok(entry)
    }

    pub async fn clear(&self) -> Result<()> {
        if tokio::fs::metadata(&self.path).await.is_ok() {
            tokio::fs::remove_file(&self.path)
                .await
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        info!("Search history cleared");
        Ok(())
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize search history")?;
        write_file_content(&self.path, &content).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn history_in(dir: &TempDir) -> SearchHistory {
        SearchHistory::new(dir.path().join("history").join("searches.json"))
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(history_in(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_newest_first() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        let first = ProfileSearchFilters::default().with_name("Ann");
        let second = ProfileSearchFilters::default().with_name("Ben");
        history.record(&first, &[json!({ "full_name": "Ann A" })]).await.unwrap();
        let latest = history.record(&second, &[]).await.unwrap();

        let entries = history.load().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, latest.id);
        assert_eq!(entries[0].filters.name, "Ben");
        assert_eq!(entries[1].results[0]["full_name"], "Ann A");
    }

    #[tokio::test]
    async fn test_keeps_ten_most_recent() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        for i in 0..12 {
            let filters = ProfileSearchFilters::default().with_name(format!("person-{}", i));
            history.record(&filters, &[]).await.unwrap();
        }

        let entries = history.load().await.unwrap();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries[0].filters.name, "person-11");
        assert_eq!(entries[9].filters.name, "person-2");
    }

    #[tokio::test]
    async fn test_clear() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        history
            .record(&ProfileSearchFilters::default(), &[])
            .await
            .unwrap();
        history.clear().await.unwrap();
        assert!(history.load().await.unwrap().is_empty());
        history.clear().await.unwrap();
    }
}
