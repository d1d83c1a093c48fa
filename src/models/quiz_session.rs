//! Self-graded quiz over a deck.
//! The answer side is shown and the user has to name the question it belongs
//! to. The running score lives on the deck; this type only walks the cards.

use super::FlashcardDeck;
use chrono::{DateTime, Local};

/// Compares typed input against a term, ignoring surrounding whitespace and case.
pub fn answers_match(input: &str, term: &str) -> bool {
    input.trim().to_lowercase() == term.trim().to_lowercase()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Correct,
    Incorrect { expected: String },
    /// Every card has already been asked.
    Finished,
}

#[derive(Clone, Debug)]
pub struct QuizSummary {
    pub correct: u32,
    pub total: usize,
    pub started_at: DateTime<Local>,
}

impl QuizSummary {
    pub fn message(&self) -> String {
        format!(
            "Quiz started {}: {} / {} correct",
            self.started_at.format("%Y-%m-%d %H:%M"),
            self.correct,
            self.total
        )
    }
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    pub current_index: usize,
    pub started_at: DateTime<Local>,
}

impl QuizSession {
    /// Starts a pass over `deck` from its first card with the score cleared.
    pub fn start(deck: &mut FlashcardDeck) -> Self {
        deck.reset_score();
        Self {
            current_index: 0,
            started_at: Local::now(),
        }
    }

    /// Answer text the user has to match, or `None` once finished.
    pub fn prompt<'a>(&self, deck: &'a FlashcardDeck) -> Option<&'a str> {
        deck.get(self.current_index).map(|r| r.answer())
    }

    pub fn submit(&mut self, deck: &mut FlashcardDeck, input: &str) -> QuizOutcome {
        if self.is_finished(deck) {
            return QuizOutcome::Finished;
        }

        let term = deck.term_at(self.current_index);
        let outcome = if answers_match(input, term) {
            QuizOutcome::Correct
        } else {
            QuizOutcome::Incorrect {
                expected: term.to_string(),
            }
        };

        if outcome == QuizOutcome::Correct {
            deck.increment_score();
        }
        self.current_index += 1;
        outcome
    }

    pub fn is_finished(&self, deck: &FlashcardDeck) -> bool {
        self.current_index >= deck.len()
    }

    pub fn remaining(&self, deck: &FlashcardDeck) -> usize {
        deck.len().saturating_sub(self.current_index)
    }

    pub fn summary(&self, deck: &FlashcardDeck) -> QuizSummary {
        QuizSummary {
            correct: deck.score(),
            total: deck.len(),
            started_at: self.started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capitals() -> FlashcardDeck {
        let mut deck = FlashcardDeck::new("unused.csv");
        deck.add("Paris", "capital of France");
        deck.add("Tokyo", "capital of Japan");
        deck.add("Berlin", "capital of Germany");
        deck
    }

    #[test]
    fn test_answers_match() {
        assert!(answers_match("  paris ", "Paris"));
        assert!(answers_match("TOKYO", "Tokyo"));
        assert!(!answers_match("Pari", "Paris"));
        assert!(answers_match("", ""));
    }

    #[test]
    fn test_full_pass() {
        let mut deck = capitals();
        deck.increment_score();
        let mut quiz = QuizSession::start(&mut deck);
        assert_eq!(deck.score(), 0);

        assert_eq!(quiz.prompt(&deck), Some("capital of France"));
        assert_eq!(quiz.submit(&mut deck, "paris"), QuizOutcome::Correct);

        assert_eq!(quiz.prompt(&deck), Some("capital of Japan"));
        assert_eq!(
            quiz.submit(&mut deck, "Kyoto"),
            QuizOutcome::Incorrect {
                expected: "Tokyo".to_string()
            }
        );

        assert_eq!(quiz.remaining(&deck), 1);
        assert_eq!(quiz.submit(&mut deck, " Berlin "), QuizOutcome::Correct);

        assert!(quiz.is_finished(&deck));
        assert_eq!(quiz.prompt(&deck), None);
        assert_eq!(quiz.submit(&mut deck, "Paris"), QuizOutcome::Finished);

        let summary = quiz.summary(&deck);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.total, 3);
        assert!(summary.message().ends_with("2 / 3 correct"));
    }

    #[test]
    fn test_restart_clears_score() {
        let mut deck = capitals();
        let mut quiz = QuizSession::start(&mut deck);
        quiz.submit(&mut deck, "Paris");
        assert_eq!(deck.score(), 1);

        let quiz = QuizSession::start(&mut deck);
        assert_eq!(deck.score(), 0);
        assert_eq!(quiz.current_index, 0);
    }

    #[test]
    fn test_empty_deck_is_finished() {
        let mut deck = FlashcardDeck::new("unused.csv");
        let mut quiz = QuizSession::start(&mut deck);

        assert!(quiz.is_finished(&deck));
        assert_eq!(quiz.submit(&mut deck, "anything"), QuizOutcome::Finished);
        assert_eq!(deck.score(), 0);
    }
}
