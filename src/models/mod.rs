// src/models/mod.rs
pub mod game;

use serde::Serialize;

pub use game::{
    CreateGameRequest, Game, GameStatus, GameView, GuessRequest, NewGame, SolutionResponse,
};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
