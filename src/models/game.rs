use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ==================== GAME ====================
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Game {
    pub id: i64,
    pub word: String,
    pub guesses_allowed: i32,
    pub guesses_taken: i32,
    pub letters_guessed: Vec<String>,
    pub letters_available: Vec<String>,
    pub guessed_word_state: Vec<String>,
    pub is_game_over: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A game that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGame {
    pub word: String,
    pub guesses_allowed: i32,
    pub guesses_taken: i32,
    pub letters_guessed: Vec<String>,
    pub letters_available: Vec<String>,
    pub guessed_word_state: Vec<String>,
    pub is_game_over: bool,
}

impl NewGame {
    pub fn into_game(self, id: i64, now: DateTime<Utc>) -> Game {
        Game {
            id,
            word: self.word,
            guesses_allowed: self.guesses_allowed,
            guesses_taken: self.guesses_taken,
            letters_guessed: self.letters_guessed,
            letters_available: self.letters_available,
            guessed_word_state: self.guessed_word_state,
            is_game_over: self.is_game_over,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

// ==================== API ====================
#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    pub word: Option<String>,
    pub guesses_allowed: Option<i32>,
}

/// Either `{"letter": "B"}` or the list form `{"letters_guessed": ["A", "B"]}`,
/// where the last entry is the new guess.
#[derive(Debug, Default, Deserialize)]
pub struct GuessRequest {
    pub letter: Option<String>,
    pub letters_guessed: Option<Vec<String>>,
}

impl GuessRequest {
    pub fn letter(&self) -> Option<&str> {
        self.letter
            .as_deref()
            .or_else(|| self.letters_guessed.as_ref()?.last().map(String::as_str))
    }
}

/// Public view of a game. The secret word is deliberately absent.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub id: i64,
    pub guesses_allowed: i32,
    pub guesses_taken: i32,
    pub letters_guessed: Vec<String>,
    pub letters_available: Vec<String>,
    pub guessed_word_state: Vec<String>,
    pub is_game_over: bool,
    pub status: GameStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SolutionResponse {
    pub solution: String,
}
