//! The game core of a 2048 clone played on a configurable rectangular grid.
//!
//! A host drives a [`engine::game::GameState`] one [`engine::direction::Direction`] at a time and
//! reads back the grid, score and lost flag after each turn. Rendering and input live outside
//! this library.

pub mod engine;
pub mod error;
