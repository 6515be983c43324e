//! Automated play between agents.
//!
//! A match alternates two [`crate::agents::Agent`]s from a starting board
//! until the game ends and returns the full [`GameRecord`].

mod match_play;

pub use match_play::{play_match, GameRecord};
