use std::fs;
use std::path::{Path, PathBuf};

use azmoon_core::models::TestDefinition;

use crate::error::StorageError;
use crate::json;

/// Handle over the web app's questionnaire data directory.
pub struct TestStore {
    dir: PathBuf,
}

impl TestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<data-dir>/<slug>.json`
    pub fn path_for(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{slug}.json"))
    }

    pub fn exists(&self, slug: &str) -> bool {
        self.path_for(slug).is_file()
    }

    pub fn load(&self, slug: &str) -> Result<TestDefinition, StorageError> {
        let path = self.path_for(slug);
        if !path.is_file() {
            return Err(StorageError::NotFound {
                path: path.display().to_string(),
            });
        }
        let def = json::read_json(&path)?;
        tracing::debug!(slug, "questionnaire loaded");
        Ok(def)
    }

    pub fn save(&self, slug: &str, def: &TestDefinition) -> Result<(), StorageError> {
        let path = self.path_for(slug);
        json::write_json_atomic(&path, def)?;
        tracing::debug!(slug, path = %path.display(), "questionnaire saved");
        Ok(())
    }

    /// Sorted `.json` stems in the data directory.
    pub fn list_slugs(&self) -> Result<Vec<String>, StorageError> {
        let mut slugs = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                slugs.push(stem.to_string());
            }
        }
        slugs.sort();
        Ok(slugs)
    }
}
