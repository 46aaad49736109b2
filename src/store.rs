//! Game data store
//!
//! One JSON file holds both the level layouts and the record table. Levels
//! are read-only at runtime; only the records section is rewritten on save.
//! Fields this build does not know about are carried through untouched so a
//! newer file survives a round trip.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sim::level::Layout;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    levels: BTreeMap<String, Layout>,
    #[serde(default)]
    records: Vec<(u32, String)>,
    /// Unknown sections, preserved verbatim
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Loaded game data bound to its backing file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    file: StoreFile,
}

impl Store {
    /// Load and parse the data file. Missing or malformed data is fatal at
    /// startup; the session cannot run without levels.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading game data from {}", path.display()))?;
        let file: StoreFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing game data in {}", path.display()))?;
        anyhow::ensure!(
            !file.levels.is_empty(),
            "{} contains no levels",
            path.display()
        );
        log::info!(
            "loaded {} levels and {} records from {}",
            file.levels.len(),
            file.records.len(),
            path.display()
        );
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn levels(&self) -> &BTreeMap<String, Layout> {
        &self.file.levels
    }

    pub fn records(&self) -> &[(u32, String)] {
        &self.file.records
    }

    /// Replace the records section and rewrite the file. Levels and any
    /// unknown sections are written back as loaded.
    pub fn save_records(&mut self, records: Vec<(u32, String)>) -> Result<()> {
        self.file.records = records;
        let json = serde_json::to_string_pretty(&self.file)
            .context("serializing game data")?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing game data to {}", self.path.display()))?;
        log::debug!("saved {} records", self.file.records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("brickbreak-{}-{}.json", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    const SAMPLE: &str = r#"{
        "levels": {"level_1": [[1], [0, 2, 0]]},
        "records": [[500, "ace"], [100, "bo"]],
        "theme": {"accent": "orange"}
    }"#;

    #[test]
    fn test_load_reads_levels_and_records() {
        let path = temp_file("load", SAMPLE);
        let store = Store::load(&path).unwrap();
        assert_eq!(store.levels().len(), 1);
        assert_eq!(store.levels()["level_1"], vec![vec![1], vec![0, 2, 0]]);
        assert_eq!(store.records(), &[(500, "ace".to_string()), (100, "bo".to_string())]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("brickbreak-does-not-exist.json");
        assert!(Store::load(path).is_err());
    }

    #[test]
    fn test_empty_levels_is_an_error() {
        let path = temp_file("empty", r#"{"levels": {}, "records": []}"#);
        assert!(Store::load(&path).is_err());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_records_absent_defaults_empty() {
        let path = temp_file("norecords", r#"{"levels": {"a": [[1]]}}"#);
        let store = Store::load(&path).unwrap();
        assert!(store.records().is_empty());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_save_rewrites_records_and_keeps_the_rest() {
        let path = temp_file("save", SAMPLE);
        let mut store = Store::load(&path).unwrap();
        store.save_records(vec![(900, "zed".to_string())]).unwrap();

        let reread = Store::load(&path).unwrap();
        assert_eq!(reread.records(), &[(900, "zed".to_string())]);
        assert_eq!(reread.levels().len(), 1, "levels untouched by a records save");

        // The unknown section survives the round trip
        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"]["accent"], "orange");
        fs::remove_file(path).unwrap();
    }
}
