use super::grid::{Grid, Tile};
use super::spawn::{SpawnPolicy, SpawnWeights};
use crate::error::{Error, Result};

const DEFAULT_ROWS: usize = 4;
const DEFAULT_COLS: usize = 4;

/// How the board is populated when a game starts.
#[derive(Clone, Debug, PartialEq)]
pub enum StartingBoard {
    /// A handful of tiles drawn from the spawn policy.
    Random,
    Fixed(Grid),
}

/// GameConfig is a validated set of options for starting a game. Build one with
/// [`GameConfig::builder`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    rows: usize,
    cols: usize,
    spawn_weights: SpawnWeights,
    spawn_policy: SpawnPolicy,
    start: StartingBoard,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_weights: SpawnWeights::default(),
            spawn_policy: SpawnPolicy::default(),
            start: StartingBoard::Random,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn spawn_weights(&self) -> &SpawnWeights {
        &self.spawn_weights
    }

    pub fn spawn_policy(&self) -> &SpawnPolicy {
        &self.spawn_policy
    }

    pub fn start(&self) -> &StartingBoard {
        &self.start
    }

    /// Number of tiles placed by a random start: `max(2, min(rows, cols) / 2)`.
    pub fn starting_tiles(&self) -> usize {
        std::cmp::max(2, std::cmp::min(self.rows, self.cols) / 2)
    }
}

#[derive(Default)]
pub struct GameConfigBuilder {
    dimensions: Option<(usize, usize)>,
    spawn_weights: Option<SpawnWeights>,
    random_start: Option<bool>,
    fixed_start: Option<Vec<Vec<Tile>>>,
}

impl GameConfigBuilder {
    pub fn dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.dimensions = Some((rows, cols));
        self
    }

    pub fn spawn_weights(mut self, weights: SpawnWeights) -> Self {
        self.spawn_weights = Some(weights);
        self
    }

    /// Requests (or explicitly declines) a randomly seeded starting board. Declining one requires a
    /// fixed start, since a game needs at least one tile to be playable.
    pub fn random_start(mut self, random: bool) -> Self {
        self.random_start = Some(random);
        self
    }

    /// Starts from the given preset. If no dimensions were requested they are taken from the
    /// preset.
    pub fn fixed_start(mut self, rows: Vec<Vec<Tile>>) -> Self {
        self.fixed_start = Some(rows);
        self
    }

    pub fn build(self) -> Result<GameConfig> {
        if self.random_start == Some(true) && self.fixed_start.is_some() {
            return Err(Error::ConflictingStart);
        }

        let preset = self.fixed_start.map(Grid::from_rows).transpose()?;
        let (rows, cols) = match (self.dimensions, &preset) {
            (Some(dimensions), _) => dimensions,
            (None, Some(grid)) => grid.dimensions(),
            (None, None) => (DEFAULT_ROWS, DEFAULT_COLS),
        };
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }

        let start = match preset {
            Some(grid) if grid.dimensions() != (rows, cols) => {
                let (found_rows, found_cols) = grid.dimensions();
                return Err(Error::PresetDimensions {
                    rows,
                    cols,
                    found_rows,
                    found_cols,
                });
            }
            Some(grid) if grid.occupied() == 0 => return Err(Error::EmptyPreset),
            Some(grid) => StartingBoard::Fixed(grid),
            None if self.random_start == Some(false) => return Err(Error::MissingStart),
            None => StartingBoard::Random,
        };

        let spawn_weights = self.spawn_weights.unwrap_or_default();
        let spawn_policy = SpawnPolicy::new(&spawn_weights)?;

        Ok(GameConfig {
            rows,
            cols,
            spawn_weights,
            spawn_policy,
            start,
        })
    }
}
