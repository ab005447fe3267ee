//! Character move tables for the petri combat core.
//!
//! Loads per-character move files (JSON, one object per moveset slot) and
//! provides built-in tables that double as the deterministic fallback when
//! a file is missing or malformed — a match must always be playable.

pub mod characters;
pub mod loader;

pub use characters::moveset_for_character;
pub use loader::{load_moveset, load_moveset_or_fallback, moveset_from_json, MovesetLoadError};

#[cfg(test)]
mod tests;
