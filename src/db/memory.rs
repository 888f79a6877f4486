use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::GameStore;
use crate::{
    error::{AppError, Result},
    models::{Game, NewGame},
};

/// Process-local store, used when no database is configured.
pub struct MemoryStore {
    games: RwLock<HashMap<i64, Game>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn insert_game(&self, game: NewGame) -> Result<Game> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let game = game.into_game(id, Utc::now());
        self.games.write().await.insert(id, game.clone());
        Ok(game)
    }

    async fn get_game(&self, id: i64) -> Result<Option<Game>> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn save_game(&self, game: &Game, expected_guesses_taken: i32) -> Result<()> {
        let mut games = self.games.write().await;
        let stored = games
            .get_mut(&game.id)
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game.id)))?;
        if stored.guesses_taken != expected_guesses_taken {
            return Err(AppError::Conflict(format!(
                "Game {} was updated concurrently",
                game.id
            )));
        }
        *stored = Game {
            updated_at: Utc::now(),
            ..game.clone()
        };
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
