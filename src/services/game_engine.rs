use rand::seq::IndexedRandom;

use crate::{
    constants::{
        ALPHABET, MASKED, MAX_GUESSES_ALLOWED, MAX_WORD_LEN, MIN_GUESSES_ALLOWED, WORD_LIST,
    },
    error::GameError,
    models::{Game, GameStatus, NewGame},
};

/// Result of an accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: String,
    pub revealed: usize,
    pub is_game_over: bool,
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        self.revealed > 0
    }
}

/// Start a game with every letter position masked and no guesses taken.
pub fn create(word: &str, guesses_allowed: i32) -> Result<NewGame, GameError> {
    let word = word.trim();
    if let Some(c) = word.chars().find(|c| c.is_alphabetic() && !c.is_ascii()) {
        return Err(GameError::UnsupportedLetter(c));
    }
    if !word.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(GameError::EmptyWord);
    }
    if word.chars().count() > MAX_WORD_LEN {
        return Err(GameError::WordTooLong(MAX_WORD_LEN));
    }
    if !(MIN_GUESSES_ALLOWED..=MAX_GUESSES_ALLOWED).contains(&guesses_allowed) {
        return Err(GameError::InvalidGuessLimit {
            min: MIN_GUESSES_ALLOWED,
            max: MAX_GUESSES_ALLOWED,
            got: guesses_allowed,
        });
    }

    Ok(NewGame {
        word: word.to_string(),
        guesses_allowed,
        guesses_taken: 0,
        letters_guessed: Vec::new(),
        letters_available: ALPHABET.chars().map(String::from).collect(),
        guessed_word_state: masked_state(word),
        is_game_over: false,
    })
}

/// Letters start masked; anything else (spaces, hyphens) is shown from the start.
fn masked_state(word: &str) -> Vec<String> {
    word.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                MASKED.to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn normalize_letter(raw: &str) -> Result<(char, String), GameError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let upper = c.to_ascii_uppercase();
            Ok((upper, upper.to_string()))
        }
        _ => Err(GameError::InvalidLetter(trimmed.to_string())),
    }
}

/// Apply one guess. All checks run before any field is touched, so a rejected
/// guess leaves the game exactly as it was.
pub fn apply_guess(game: &mut Game, raw_letter: &str) -> Result<GuessOutcome, GameError> {
    if game.is_game_over || game.guesses_taken >= game.guesses_allowed {
        return Err(GameError::GameOver);
    }

    let (upper, letter) = normalize_letter(raw_letter)?;
    if game.letters_guessed.contains(&letter) {
        return Err(GameError::AlreadyGuessed(letter));
    }
    if !game.letters_available.contains(&letter) {
        return Err(GameError::LetterUnavailable(letter));
    }

    game.letters_available.retain(|l| l != &letter);
    game.letters_guessed.push(letter.clone());
    game.guesses_taken += 1;

    let mut revealed = 0;
    for (slot, c) in game.guessed_word_state.iter_mut().zip(game.word.chars()) {
        if c.to_ascii_uppercase() == upper && slot.as_str() == MASKED {
            *slot = c.to_string();
            revealed += 1;
        }
    }

    if is_word_revealed(game) || game.guesses_taken >= game.guesses_allowed {
        game.is_game_over = true;
    }

    Ok(GuessOutcome {
        letter,
        revealed,
        is_game_over: game.is_game_over,
    })
}

pub fn is_word_revealed(game: &Game) -> bool {
    game.guessed_word_state.iter().all(|slot| slot.as_str() != MASKED)
}

pub fn status(game: &Game) -> GameStatus {
    if is_word_revealed(game) {
        GameStatus::Won
    } else if game.is_game_over {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

pub fn reveal_solution(game: &Game) -> &str {
    &game.word
}

/// Pick a random word from the built-in list.
pub fn pick_word() -> &'static str {
    WORD_LIST.choose(&mut rand::rng()).copied().unwrap_or("SPACEMAN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn game(word: &str, guesses_allowed: i32) -> Game {
        create(word, guesses_allowed).unwrap().into_game(1, Utc::now())
    }

    #[test]
    fn create_masks_every_letter() {
        let new_game = create("Moon", 5).unwrap();
        assert_eq!(new_game.guessed_word_state, vec!["", "", "", ""]);
        assert_eq!(new_game.guesses_taken, 0);
        assert!(new_game.letters_guessed.is_empty());
        assert_eq!(new_game.letters_available.len(), 26);
        assert!(!new_game.is_game_over);
    }

    #[test]
    fn create_reveals_non_letters() {
        let new_game = create("tony stark", 5).unwrap();
        assert_eq!(new_game.guessed_word_state[4], " ");
        assert_eq!(new_game.guessed_word_state[3], "");
    }

    #[test]
    fn create_trims_word() {
        assert_eq!(create("  comet ", 5).unwrap().word, "comet");
    }

    #[test]
    fn create_rejects_invalid_input() {
        assert_eq!(create("   ", 5), Err(GameError::EmptyWord));
        assert_eq!(create("--", 5), Err(GameError::EmptyWord));
        assert_eq!(
            create(&"a".repeat(MAX_WORD_LEN + 1), 5),
            Err(GameError::WordTooLong(MAX_WORD_LEN))
        );
        assert!(matches!(
            create("comet", 0),
            Err(GameError::InvalidGuessLimit { got: 0, .. })
        ));
        assert!(matches!(
            create("comet", MAX_GUESSES_ALLOWED + 1),
            Err(GameError::InvalidGuessLimit { .. })
        ));
    }

    #[test]
    fn create_rejects_letters_that_cannot_be_guessed() {
        assert_eq!(create("café", 26), Err(GameError::UnsupportedLetter('é')));
        assert_eq!(create("straße", 26), Err(GameError::UnsupportedLetter('ß')));
        assert_eq!(create("ÅÄÖ", 26), Err(GameError::UnsupportedLetter('Å')));
    }

    #[test]
    fn every_masked_position_is_guessable() {
        let mut g = game("cafe-au-lait", 26);
        for letter in ["c", "a", "f", "e", "u", "l", "i", "t"] {
            apply_guess(&mut g, letter).unwrap();
        }
        assert!(is_word_revealed(&g));
        assert_eq!(status(&g), GameStatus::Won);
    }

    #[test]
    fn correct_guess_reveals_all_matching_positions() {
        let mut g = game("TESTWORD", 5);
        let outcome = apply_guess(&mut g, "t").unwrap();

        assert_eq!(outcome.letter, "T");
        assert_eq!(outcome.revealed, 2);
        assert!(outcome.is_hit());
        assert_eq!(g.letters_guessed, vec!["T"]);
        assert_eq!(g.guessed_word_state, vec!["T", "", "", "T", "", "", "", ""]);
        assert_eq!(g.guesses_taken, 1);
        assert!(!g.letters_available.contains(&"T".to_string()));
    }

    #[test]
    fn reveal_keeps_case_of_word() {
        let mut g = game("Orbit", 5);
        apply_guess(&mut g, "O").unwrap();
        assert_eq!(g.guessed_word_state[0], "O");
        apply_guess(&mut g, "b").unwrap();
        assert_eq!(g.guessed_word_state[2], "b");
    }

    #[test]
    fn incorrect_guess_appends_and_leaves_mask() {
        let mut g = game("comet", 5);
        let outcome = apply_guess(&mut g, "z").unwrap();

        assert!(!outcome.is_hit());
        assert_eq!(g.letters_guessed, vec!["Z"]);
        assert_eq!(g.guessed_word_state, vec!["", "", "", "", ""]);
        assert_eq!(g.guesses_taken, 1);
        assert!(!g.is_game_over);
    }

    #[test]
    fn duplicate_guess_is_rejected_without_changes() {
        let mut g = game("comet", 5);
        apply_guess(&mut g, "C").unwrap();
        let before = g.clone();

        assert_eq!(
            apply_guess(&mut g, "c"),
            Err(GameError::AlreadyGuessed("C".to_string()))
        );
        assert_eq!(g, before);
    }

    #[test]
    fn invalid_letters_are_rejected() {
        let mut g = game("comet", 5);
        let before = g.clone();

        for raw in ["", "ab", "1", "?", " "] {
            assert!(matches!(
                apply_guess(&mut g, raw),
                Err(GameError::InvalidLetter(_))
            ));
        }
        assert_eq!(g, before);
    }

    #[test]
    fn letter_missing_from_available_is_rejected() {
        let mut g = game("comet", 5);
        g.letters_available.retain(|l| l != "Q");
        assert_eq!(
            apply_guess(&mut g, "q"),
            Err(GameError::LetterUnavailable("Q".to_string()))
        );
    }

    #[test]
    fn revealing_every_letter_wins() {
        let mut g = game("dud", 5);
        apply_guess(&mut g, "d").unwrap();
        let outcome = apply_guess(&mut g, "u").unwrap();

        assert!(outcome.is_game_over);
        assert!(g.is_game_over);
        assert!(is_word_revealed(&g));
        assert_eq!(status(&g), GameStatus::Won);
    }

    #[test]
    fn exhausting_guesses_loses() {
        let mut g = game("comet", 2);
        apply_guess(&mut g, "x").unwrap();
        assert_eq!(status(&g), GameStatus::InProgress);
        apply_guess(&mut g, "y").unwrap();

        assert!(g.is_game_over);
        assert_eq!(g.guesses_taken, g.guesses_allowed);
        assert_eq!(status(&g), GameStatus::Lost);
    }

    #[test]
    fn winning_on_last_guess_counts_as_won() {
        let mut g = game("a", 1);
        apply_guess(&mut g, "a").unwrap();
        assert_eq!(status(&g), GameStatus::Won);
    }

    #[test]
    fn guess_after_game_over_is_rejected() {
        let mut g = game("comet", 1);
        apply_guess(&mut g, "x").unwrap();
        let before = g.clone();

        assert_eq!(apply_guess(&mut g, "c"), Err(GameError::GameOver));
        assert_eq!(g, before);
    }

    #[test]
    fn reveal_solution_returns_word_unmodified() {
        let g = game("tony stark", 5);
        assert_eq!(reveal_solution(&g), "tony stark");
    }

    #[test]
    fn pick_word_comes_from_word_list() {
        let word = pick_word();
        assert!(WORD_LIST.contains(&word));
        assert!(create(word, 5).is_ok());
    }
}
