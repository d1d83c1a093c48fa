//! Deck is an ordered set of question/answer records backed by one CSV file.
//!
//! Records are unique by question (exact, case-sensitive match) but keep
//! their insertion order, which drives navigation and positional lookup.
//! Mutations stay in memory until [`FlashcardDeck::save`] is called.
//!
//! A deck is not synchronized. Callers sharing one across threads must wrap
//! every load/save/mutation/shuffle in their own lock.

use super::CardRecord;
use crate::error::{DeckError, Result};
use crate::storage::csv as codec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

pub use crate::storage::csv::SkippedRow;

/// What `add` ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The question already existed; its answer was replaced in place.
    Updated,
}

/// Details of a load that did not fail outright.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// The backing file did not exist.
    pub missing: bool,
    pub skipped: Vec<SkippedRow>,
    /// Rows whose question repeated an earlier row and updated it instead.
    pub merged_duplicates: usize,
}

#[derive(Clone, Debug)]
pub struct FlashcardDeck {
    source_path: PathBuf,
    records: Vec<CardRecord>,
    score: u32,
    dirty: bool,
    rng: ChaCha8Rng,
}

impl FlashcardDeck {
    /// Empty deck bound to `path`. Nothing is read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: path.into(),
            records: Vec::new(),
            score: 0,
            dirty: false,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Replaces the shuffle generator with one seeded from `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Loads `path`, degrading to an empty deck on any read failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(&path) {
            Ok((deck, report)) => {
                if report.missing {
                    log::warn!("{} does not exist, starting empty", path.display());
                }
                deck
            }
            Err(e) => {
                log::warn!("{}, starting empty", e);
                Self::new(path)
            }
        }
    }

    /// Same as [`FlashcardDeck::load`] with a reproducible shuffle order.
    pub fn load_seeded(path: impl Into<PathBuf>, seed: u64) -> Self {
        Self::load(path).with_seed(seed)
    }

    /// Loads `path`, telling a missing file apart from an unreadable one.
    ///
    /// A missing file yields an empty deck and `report.missing`. Malformed
    /// rows are skipped and listed in the report.
    pub fn try_load(path: impl Into<PathBuf>) -> Result<(Self, LoadReport)> {
        let mut deck = Self::new(path);
        let report = deck.reload()?;
        Ok((deck, report))
    }

    /// Re-reads the backing file, replacing all records. Score is kept.
    pub fn reload(&mut self) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        let decoded = match File::open(&self.source_path) {
            Ok(file) => codec::decode(BufReader::new(file)).map_err(|e| match e {
                DeckError::Csv(err) if err.is_io_error() => DeckError::Read {
                    path: self.source_path.clone(),
                    source: err.into(),
                },
                other => other,
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                report.missing = true;
                codec::DecodedRows::default()
            }
            Err(e) => {
                return Err(DeckError::Read {
                    path: self.source_path.clone(),
                    source: e,
                });
            }
        };

        for row in &decoded.skipped {
            match row.line {
                Some(line) => log::warn!(
                    "{}:{}: skipping row ({})",
                    self.source_path.display(),
                    line,
                    row.reason
                ),
                None => log::warn!(
                    "{}: skipping row ({})",
                    self.source_path.display(),
                    row.reason
                ),
            }
        }
        report.skipped = decoded.skipped;

        self.records.clear();
        for record in decoded.records {
            if self.upsert(record) == AddOutcome::Updated {
                report.merged_duplicates += 1;
            }
        }
        self.dirty = false;

        log::debug!(
            "Loaded {} records from {}",
            self.records.len(),
            self.source_path.display()
        );
        Ok(report)
    }

    /// Writes every record, in order, over the backing file.
    ///
    /// On failure the in-memory records and the dirty flag are untouched.
    pub fn save(&mut self) -> Result<()> {
        let bytes = codec::encode_to_vec(&self.records)?;

        let write_err = |source| DeckError::Write {
            path: self.source_path.clone(),
            source,
        };

        if let Some(parent) = self.source_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(&self.source_path, bytes).map_err(write_err)?;

        self.dirty = false;
        log::debug!(
            "Saved {} records to {}",
            self.records.len(),
            self.source_path.display()
        );
        Ok(())
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CardRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when there are mutations `save` has not written yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn position(&self, question: &str) -> Option<usize> {
        self.records.iter().position(|r| r.question() == question)
    }

    fn upsert(&mut self, record: CardRecord) -> AddOutcome {
        match self.position(record.question()) {
            Some(idx) => {
                self.records[idx] = record;
                AddOutcome::Updated
            }
            None => {
                self.records.push(record);
                AddOutcome::Added
            }
        }
    }

    /// Appends a record, or updates the answer if `question` already exists.
    pub fn add(&mut self, question: &str, answer: &str) -> AddOutcome {
        let outcome = self.upsert(CardRecord::new(question, answer));
        self.dirty = true;
        outcome
    }

    /// Replaces the answer of `question`, keeping its position.
    pub fn edit(&mut self, question: &str, answer: &str) -> Result<()> {
        let idx = self
            .position(question)
            .ok_or_else(|| DeckError::TermNotFound(question.to_string()))?;
        self.records[idx].set_answer(answer.to_string());
        self.dirty = true;
        Ok(())
    }

    /// Deletes `question` and hands back the removed record.
    pub fn remove(&mut self, question: &str) -> Result<CardRecord> {
        let idx = self
            .position(question)
            .ok_or_else(|| DeckError::TermNotFound(question.to_string()))?;
        self.dirty = true;
        Ok(self.records.remove(idx))
    }

    pub fn is_term(&self, question: &str) -> bool {
        self.position(question).is_some()
    }

    /// Question of the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn term_at(&self, index: usize) -> &str {
        self.records[index].question()
    }

    /// Uniformly permutes the records using the deck's own generator.
    pub fn shuffle(&mut self) {
        self.records.shuffle(&mut self.rng);
        self.dirty = true;
        log::debug!("Shuffled {} records", self.records.len());
    }

    /// Uniformly permutes the records using `rng`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
        self.dirty = true;
        log::debug!("Shuffled {} records", self.records.len());
    }

    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl<'a> IntoIterator for &'a FlashcardDeck {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
