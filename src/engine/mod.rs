pub mod config;
pub mod direction;
pub mod game;
pub mod grid;
pub mod merge;
pub mod orchestrator;
pub mod spawn;
pub mod terminal;
