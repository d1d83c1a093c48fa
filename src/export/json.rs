//! JSON import/export module for flashcard decks.
//! Lets a set travel between machines independent of the CSV backing file.

use crate::error::{DeckError, Result};
use crate::models::{CardRecord, FlashcardDeck};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct DeckExport {
    name: String,
    flashcards: Vec<CardRecord>,
}

/// Exports a deck to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(deck: &FlashcardDeck, name: &str, path: &Path) -> Result<()> {
    let export = DeckExport {
        name: name.to_string(),
        flashcards: deck.records().to_vec(),
    };
    let json_string = serde_json::to_string_pretty(&export)?;
    fs::write(path, json_string).map_err(|source| DeckError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Deck '{}' exported to {}", name, path.display());
    Ok(())
}

/// Imports a deck from a JSON file and binds it to `target`.
///
/// The deck is left unsaved; repeated questions collapse into one record.
pub fn import_json(path: &Path, target: impl Into<PathBuf>) -> Result<FlashcardDeck> {
    let contents = fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let export: DeckExport = serde_json::from_str(&contents)?;

    let mut deck = FlashcardDeck::new(target);
    for card in &export.flashcards {
        deck.add(card.question(), card.answer());
    }

    log::info!(
        "Deck '{}' imported from {} ({} cards)",
        export.name,
        path.display(),
        deck.len()
    );
    Ok(deck)
}
