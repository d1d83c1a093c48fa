//! CardRecord is a pair <question, answer>. Only text is used on either side
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRecord {
    question: String,
    answer: String,
}

impl CardRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub(crate) fn set_answer(&mut self, answer: String) {
        self.answer = answer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let card = CardRecord::new("Paris", "capital of France");

        assert_eq!(card.question(), "Paris");
        assert_eq!(card.answer(), "capital of France");
    }

    #[test]
    fn test_record_allows_empty_fields() {
        let card = CardRecord::new("", "");
        assert_eq!(card.question(), "");
        assert_eq!(card.answer(), "");
    }

    #[test]
    fn test_record_clone() {
        let card1 = CardRecord::new("hello", "cześć");
        let card2 = card1.clone();
        assert_eq!(card1, card2);
    }
}
