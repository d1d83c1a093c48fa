pub mod card_record;
pub mod deck;
pub mod quiz_session;
pub mod review_session;

pub use card_record::CardRecord;
pub use deck::{AddOutcome, FlashcardDeck, LoadReport, SkippedRow};
pub use quiz_session::{QuizOutcome, QuizSession, QuizSummary, answers_match};
pub use review_session::ReviewSession;
