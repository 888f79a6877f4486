// All service modules
pub mod game_engine;
