//! Review state for flipping through a deck.
//!
//! The session only keeps a cursor and which side is showing; the deck is
//! passed in on every call, so one deck can back several views.

use super::FlashcardDeck;

#[derive(Clone, Debug)]
pub struct ReviewSession {
    pub current_index: usize,
    pub show_question: bool,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            current_index: 0,
            show_question: true,
        }
    }

    /// Back to the first card, question side up.
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.show_question = true;
    }

    pub fn next(&mut self, deck: &FlashcardDeck) {
        if deck.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % deck.len();
        self.show_question = true;
    }

    pub fn previous(&mut self, deck: &FlashcardDeck) {
        if deck.is_empty() {
            return;
        }
        let len = deck.len();
        self.current_index = (self.current_index % len + len - 1) % len;
        self.show_question = true;
    }

    pub fn flip(&mut self) {
        self.show_question = !self.show_question;
    }

    pub fn shuffle(&mut self, deck: &mut FlashcardDeck) {
        if deck.is_empty() {
            return;
        }
        deck.shuffle();
        self.reset();
    }

    /// Pulls the cursor back in range after the deck shrank.
    pub fn sync(&mut self, deck: &FlashcardDeck) {
        if self.current_index >= deck.len() {
            self.current_index = deck.len().saturating_sub(1);
            self.show_question = true;
        }
    }

    pub fn current_term<'a>(&self, deck: &'a FlashcardDeck) -> Option<&'a str> {
        deck.get(self.current_index).map(|r| r.question())
    }

    /// Text of whichever side is showing.
    pub fn current_face<'a>(&self, deck: &'a FlashcardDeck) -> Option<&'a str> {
        deck.get(self.current_index).map(|r| {
            if self.show_question {
                r.question()
            } else {
                r.answer()
            }
        })
    }

    /// "3 / 10" style counter, "0 / 0" for an empty deck.
    pub fn progress(&self, deck: &FlashcardDeck) -> String {
        if deck.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current_index.min(deck.len() - 1) + 1, deck.len())
    }
}
