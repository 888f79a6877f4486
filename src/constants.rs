/// Application constants

pub const API_VERSION: &str = "v1";

// Guess limits
pub const DEFAULT_GUESSES_ALLOWED: i32 = 7;
pub const MIN_GUESSES_ALLOWED: i32 = 1;
pub const MAX_GUESSES_ALLOWED: i32 = 26; // one per letter of the alphabet

// Word limits
pub const MAX_WORD_LEN: usize = 64;

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Masked position in guessed_word_state
pub const MASKED: &str = "";

// Built-in word list used when a game is created without a word
pub const WORD_LIST: &[&str] = &[
    "ASTEROID",
    "ASTRONAUT",
    "COMET",
    "CONSTELLATION",
    "CRATER",
    "ECLIPSE",
    "GALAXY",
    "GRAVITY",
    "METEOR",
    "NEBULA",
    "ORBIT",
    "PLANET",
    "PULSAR",
    "QUASAR",
    "ROCKET",
    "SATELLITE",
    "SPACESHIP",
    "SUPERNOVA",
    "TELESCOPE",
    "UNIVERSE",
];
