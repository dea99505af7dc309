use thiserror;

use crate::engine::grid::Tile;

/// The Result type for grid48.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while setting up a game. Misuse of an already constructed grid
/// (out of range coordinates, mismatched dimensions) is a bug in the caller and panics instead.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("cannot request both a random starting board and a fixed starting board")]
    ConflictingStart,

    #[error("random start was declined but no fixed starting board was given")]
    MissingStart,

    #[error("invalid board dimensions {rows} x {cols}, both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("preset row {row} has {found} cells, expected {expected}")]
    RaggedPreset {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("preset board is {found_rows} x {found_cols} but the game is {rows} x {cols}")]
    PresetDimensions {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("preset board has no tiles")]
    EmptyPreset,

    #[error("invalid tile value {value}, tiles must be 0 or a power of two no smaller than 2")]
    InvalidTile { value: Tile },

    #[error("at least one spawn weight is required")]
    EmptySpawnWeights,

    #[error("invalid spawn weight {weight} for tile {tile}")]
    InvalidSpawnWeight { tile: Tile, weight: f64 },

    #[error("unable to build spawn distribution: {0}")]
    WeightedIndex(#[from] rand::distributions::WeightedError),
}
