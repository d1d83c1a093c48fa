pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{DeckError, Result};
pub use models::{
    AddOutcome, CardRecord, FlashcardDeck, LoadReport, QuizOutcome, QuizSession, QuizSummary,
    ReviewSession,
};
pub use storage::sets::SetLocator;
