use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::Config,
    error::{AppError, Result},
    models::{Game, NewGame},
};

pub mod memory;

pub use memory::MemoryStore;

/// Persistence seam for games. Handlers only ever talk to this trait.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn insert_game(&self, game: NewGame) -> Result<Game>;

    async fn get_game(&self, id: i64) -> Result<Option<Game>>;

    /// Overwrite the mutable fields of an existing game, provided nobody else
    /// saved it since it was loaded with `expected_guesses_taken` guesses.
    async fn save_game(&self, game: &Game, expected_guesses_taken: i32) -> Result<()>;

    async fn ping(&self) -> bool;

    fn backend(&self) -> &'static str;
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let url = config
            .database_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

// ==================== GAME QUERIES ====================
#[async_trait]
impl GameStore for Database {
    async fn insert_game(&self, game: NewGame) -> Result<Game> {
        let row = sqlx::query_as::<_, Game>(
            r#"
            INSERT INTO games
                (word, guesses_allowed, guesses_taken, letters_guessed,
                 letters_available, guessed_word_state, is_game_over)
            VALUES ($1,$2,$3,$4,$5,$6,$7)
            RETURNING *
            "#,
        )
        .bind(&game.word)
        .bind(game.guesses_allowed)
        .bind(game.guesses_taken)
        .bind(&game.letters_guessed)
        .bind(&game.letters_available)
        .bind(&game.guessed_word_state)
        .bind(game.is_game_over)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_game(&self, id: i64) -> Result<Option<Game>> {
        let row = sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save_game(&self, game: &Game, expected_guesses_taken: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE games
            SET guesses_taken      = $2,
                letters_guessed    = $3,
                letters_available  = $4,
                guessed_word_state = $5,
                is_game_over       = $6,
                updated_at         = NOW()
            WHERE id = $1 AND guesses_taken = $7
            "#,
        )
        .bind(game.id)
        .bind(game.guesses_taken)
        .bind(&game.letters_guessed)
        .bind(&game.letters_available)
        .bind(&game.guessed_word_state)
        .bind(game.is_game_over)
        .bind(expected_guesses_taken)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Game {} was updated concurrently",
                game.id
            )));
        }
        Ok(())
    }

    async fn ping(&self) -> bool {
        self.pool.acquire().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
