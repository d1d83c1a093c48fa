//! Resolves a named flashcard set to its backing file.
//!
//! A set called `capitals` lives at `<base>/capitals.csv`. The default base
//! directories cover running from the project root (`Cards/`) and from a
//! subdirectory of it (`../Cards/`).

use crate::error::{DeckError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

const SET_EXTENSION: &str = "csv";

#[derive(Clone, Debug)]
pub struct SetLocator {
    base_dirs: Vec<PathBuf>,
}

impl Default for SetLocator {
    fn default() -> Self {
        Self::new(vec![PathBuf::from("Cards"), PathBuf::from("../Cards")])
    }
}

impl SetLocator {
    /// `base_dirs` are searched in order; new sets go into the first one.
    pub fn new(base_dirs: Vec<PathBuf>) -> Self {
        Self { base_dirs }
    }

    pub fn base_dirs(&self) -> &[PathBuf] {
        &self.base_dirs
    }

    fn candidates(&self, name: &str) -> impl Iterator<Item = PathBuf> + '_ {
        let file_name = format!("{}.{}", name, SET_EXTENSION);
        self.base_dirs
            .iter()
            .map(move |dir| dir.join(&file_name))
    }

    /// Returns the first existing file for `name`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let name = trimmed_name(name)?;

        if let Some(path) = self.candidates(name).find(|p| p.is_file()) {
            log::info!("Resolved set '{}' to {}", name, path.display());
            return Ok(path);
        }

        let searched = self
            .candidates(name)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(DeckError::SetNotFound {
            name: name.to_string(),
            searched,
        })
    }

    /// Path a new set called `name` would be saved to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = trimmed_name(name)?;
        let dir = self
            .base_dirs
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join(format!("{}.{}", name, SET_EXTENSION)))
    }

    /// Existing set, or the path a new one would be created at.
    pub fn resolve_or_new(&self, name: &str) -> Result<PathBuf> {
        match self.resolve(name) {
            Err(DeckError::SetNotFound { .. }) => self.path_for(name),
            other => other,
        }
    }

    /// Names of every set found under the base directories, sorted.
    pub fn list_sets(&self) -> Vec<String> {
        let mut names = BTreeSet::new();

        for dir in &self.base_dirs {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    log::debug!("Skipping {}: {}", dir.display(), e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                let is_set = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case(SET_EXTENSION))
                    .unwrap_or(false);
                if !is_set || !path.is_file() {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.insert(stem.to_string());
                }
            }
        }

        names.into_iter().collect()
    }
}

fn trimmed_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DeckError::EmptySetName);
    }
    Ok(name)
}
