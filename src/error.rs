//! Error type shared by the deck, its codecs and the set locator.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("term not found: {0}")]
    TermNotFound(String),

    #[error("flashcard set name is empty")]
    EmptySetName,

    #[error("flashcard set '{name}' not found (searched: {searched})")]
    SetNotFound { name: String, searched: String },
}

pub type Result<T> = std::result::Result<T, DeckError>;
