use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::{
    error::{AppError, Result},
    models::{
        ApiResponse, CreateGameRequest, Game, GameView, GuessRequest, SolutionResponse,
    },
    services::game_engine,
};

use super::AppState;

fn to_view(game: &Game) -> GameView {
    GameView {
        id: game.id,
        guesses_allowed: game.guesses_allowed,
        guesses_taken: game.guesses_taken,
        letters_guessed: game.letters_guessed.clone(),
        letters_available: game.letters_available.clone(),
        guessed_word_state: game.guessed_word_state.clone(),
        is_game_over: game.is_game_over,
        status: game_engine::status(game),
        created_at: game.created_at,
        updated_at: game.updated_at,
    }
}

async fn load_game(state: &AppState, game_id: i64) -> Result<Game> {
    state
        .store
        .get_game(game_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
}

/// POST /api/v1/games
pub async fn create_game(
    State(state): State<AppState>,
    payload: std::result::Result<Option<Json<CreateGameRequest>>, JsonRejection>,
) -> Result<Json<ApiResponse<GameView>>> {
    let req = payload?.map(|Json(req)| req).unwrap_or_default();

    let word = match req.word.as_deref() {
        Some(word) => word,
        None => game_engine::pick_word(),
    };
    let guesses_allowed = req
        .guesses_allowed
        .unwrap_or(state.config.default_guesses_allowed);

    let new_game = game_engine::create(word, guesses_allowed)?;
    let game = state.store.insert_game(new_game).await?;

    tracing::info!(
        "Created game {} ({} letters, {} guesses allowed)",
        game.id,
        game.guessed_word_state.len(),
        game.guesses_allowed
    );

    Ok(Json(ApiResponse::success(to_view(&game))))
}

/// GET /api/v1/games/{game_id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<ApiResponse<GameView>>> {
    let game = load_game(&state, game_id).await?;
    Ok(Json(ApiResponse::success(to_view(&game))))
}

/// PUT /api/v1/games/{game_id}
pub async fn guess_letter(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
    payload: std::result::Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GameView>>> {
    let Json(req) = payload?;
    let mut game = load_game(&state, game_id).await?;

    let letter = req
        .letter()
        .ok_or_else(|| AppError::BadRequest("Missing letter".to_string()))?;

    let loaded_guesses_taken = game.guesses_taken;
    let outcome = match game_engine::apply_guess(&mut game, letter) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("Rejected guess {:?} for game {}: {}", letter, game_id, e);
            return Err(e.into());
        }
    };

    state.store.save_game(&game, loaded_guesses_taken).await?;

    tracing::debug!(
        "Game {}: guessed {} ({}, {} revealed), {}/{} guesses taken",
        game_id,
        outcome.letter,
        if outcome.is_hit() { "hit" } else { "miss" },
        outcome.revealed,
        game.guesses_taken,
        game.guesses_allowed
    );
    if outcome.is_game_over {
        tracing::info!("Game {} finished: {:?}", game_id, game_engine::status(&game));
    }

    Ok(Json(ApiResponse::success(to_view(&game))))
}

/// GET /api/v1/games/{game_id}/solution
pub async fn get_solution(
    State(state): State<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<ApiResponse<SolutionResponse>>> {
    let game = load_game(&state, game_id).await?;
    let solution = game_engine::reveal_solution(&game).to_string();
    Ok(Json(ApiResponse::success(SolutionResponse { solution })))
}
