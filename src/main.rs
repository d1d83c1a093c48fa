use flashcards_app::{AddOutcome, FlashcardDeck, QuizOutcome, QuizSession, ReviewSession, SetLocator};

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

const HELP: &str = "commands: n next | p previous | f flip | s shuffle | \
a question;answer | e question;answer | r question | q quiz | l list | w save | x quit";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let locator = SetLocator::default();
    let Some(name) = env::args().nth(1) else {
        println!("usage: flashcards <set-name>");
        println!("available sets: {}", locator.list_sets().join(", "));
        return Ok(());
    };

    let path = locator.resolve_or_new(&name)?;
    let mut deck = FlashcardDeck::load(path);
    let mut review = ReviewSession::new();

    if deck.is_empty() {
        println!("'{}' has no cards yet. Add some with: a question;answer", name);
    } else {
        println!("Loaded '{}' ({} cards)", name, deck.len());
    }
    println!("{}", HELP);
    show_card(&review, &deck);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut warned_unsaved = false;

    while let Some(line) = prompt(&mut lines)? {
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match command {
            "n" => review.next(&deck),
            "p" => review.previous(&deck),
            "f" => review.flip(),
            "s" => review.shuffle(&mut deck),
            "a" | "e" => {
                let Some((question, answer)) = split_pair(rest) else {
                    println!("expected question;answer");
                    continue;
                };
                if command == "a" {
                    if deck.add(question, answer) == AddOutcome::Updated {
                        println!("'{}' already existed, answer updated", question);
                    }
                } else if let Err(e) = deck.edit(question, answer) {
                    println!("{}", e);
                }
            }
            "r" => match deck.remove(rest.trim()) {
                Ok(_) => review.sync(&deck),
                Err(e) => println!("{}", e),
            },
            "q" => run_quiz(&mut deck, &mut lines)?,
            "l" => {
                for (i, record) in deck.iter().enumerate() {
                    println!("{}. {} -> {}", i + 1, record.question(), record.answer());
                }
                continue;
            }
            "w" => match deck.save() {
                Ok(()) => println!("Saved {} cards", deck.len()),
                Err(e) => println!("Save failed: {}", e),
            },
            "x" => {
                if deck.is_dirty() && !warned_unsaved {
                    warned_unsaved = true;
                    println!("Unsaved changes. Press w to save or x again to quit.");
                    continue;
                }
                break;
            }
            _ => {
                println!("{}", HELP);
                continue;
            }
        }
        show_card(&review, &deck);
    }

    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>) -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn split_pair(input: &str) -> Option<(&str, &str)> {
    let (question, answer) = input.split_once(';')?;
    let (question, answer) = (question.trim(), answer.trim());
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question, answer))
}

fn show_card(review: &ReviewSession, deck: &FlashcardDeck) {
    match review.current_face(deck) {
        Some(face) => println!("[{}] {}", review.progress(deck), face),
        None => println!("[0 / 0] No cards available"),
    }
}

fn run_quiz<B: BufRead>(deck: &mut FlashcardDeck, lines: &mut io::Lines<B>) -> io::Result<()> {
    if deck.is_empty() {
        println!("No cards to quiz on");
        return Ok(());
    }

    let mut quiz = QuizSession::start(deck);
    while let Some(clue) = quiz.prompt(deck) {
        println!("Which term means: {}", clue);
        let Some(input) = prompt(lines)? else {
            break;
        };
        match quiz.submit(deck, &input) {
            QuizOutcome::Correct => println!("Correct!"),
            QuizOutcome::Incorrect { expected } => println!("Wrong, it was '{}'", expected),
            QuizOutcome::Finished => break,
        }
    }
    println!("{}", quiz.summary(deck).message());
    Ok(())
}
