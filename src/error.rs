use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rule violations raised by the game engine. Every variant leaves the game untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word must contain at least one letter")]
    EmptyWord,

    #[error("Word contains '{0}', which cannot be guessed")]
    UnsupportedLetter(char),

    #[error("Word is longer than {0} characters")]
    WordTooLong(usize),

    #[error("Guesses allowed must be between {min} and {max}, got {got}")]
    InvalidGuessLimit { min: i32, max: i32, got: i32 },

    #[error("'{0}' is not a single letter")]
    InvalidLetter(String),

    #[error("Letter '{0}' was already guessed")]
    AlreadyGuessed(String),

    #[error("Letter '{0}' is not available")]
    LetterUnavailable(String),

    #[error("Game is already over")]
    GameOver,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    e.to_string(),
                )
            }
            AppError::Game(ref e) => {
                let code = match e {
                    GameError::EmptyWord
                    | GameError::UnsupportedLetter(_)
                    | GameError::WordTooLong(_)
                    | GameError::InvalidGuessLimit { .. } => "INVALID_GAME",
                    GameError::GameOver => "GAME_OVER",
                    _ => "INVALID_GUESS",
                };
                (StatusCode::BAD_REQUEST, code, e.to_string())
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::BadRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
            AppError::Conflict(ref msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
