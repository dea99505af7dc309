use rand::RngCore;

use super::config::{GameConfig, StartingBoard};
use super::direction::Direction;
use super::grid::{Grid, Score, Tile};
use super::orchestrator::apply_move;
use super::spawn::{Spawn, SpawnWeights};
use super::terminal::has_moves;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Playing,
    /// No direction changes the board; only a new game is accepted.
    Lost,
}

/// Turn summarizes what a single direction did to the game.
#[derive(Clone, Debug, PartialEq)]
pub enum Turn {
    /// The game was already lost.
    Ignored,
    /// The board did not change, so nothing else happened either.
    Unchanged,
    Moved {
        score: Score,
        merges: usize,
        spawned: Option<Spawn>,
        lost: bool,
    },
}

/// GameState owns the grid, score and random number generator of one game session.
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    score: Score,
    status: Status,
    rng: Box<dyn RngCore>,
}

impl GameState {
    /// Starts a game on an empty `rows` x `cols` board seeded with random tiles.
    pub fn new_game(
        rows: usize,
        cols: usize,
        spawn_weights: SpawnWeights,
        rng: impl RngCore + 'static,
    ) -> Result<Self> {
        let config = GameConfig::builder()
            .dimensions(rows, cols)
            .spawn_weights(spawn_weights)
            .random_start(true)
            .build()?;
        Ok(Self::from_config(config, rng))
    }

    pub fn from_config(config: GameConfig, rng: impl RngCore + 'static) -> Self {
        let mut rng: Box<dyn RngCore> = Box::new(rng);
        let grid = Self::starting_grid(&config, &mut rng);
        let mut state = Self {
            config,
            grid,
            score: 0,
            status: Status::Playing,
            rng,
        };
        state.update_status();
        log::info!("new {}x{} game", state.grid.rows(), state.grid.cols());
        state
    }

    /// Throws away the current game and starts over with the same configuration.
    pub fn restart(&mut self) {
        self.grid = Self::starting_grid(&self.config, &mut self.rng);
        self.score = 0;
        self.update_status();
        log::info!("restarted game");
    }

    /// Plays one turn: move, then spawn and check for a lost game if the board changed.
    pub fn handle_direction(&mut self, direction: Direction) -> Turn {
        if self.status == Status::Lost {
            log::debug!("ignoring {} on a lost game", direction);
            return Turn::Ignored;
        }

        let shifted = apply_move(&self.grid, direction);
        if !shifted.changed {
            return Turn::Unchanged;
        }

        self.grid.copy_from(&shifted.grid);
        self.score += shifted.score;
        let spawned = self
            .config
            .spawn_policy()
            .spawn(&mut self.grid, &mut self.rng);
        self.update_status();

        Turn::Moved {
            score: shifted.score,
            merges: shifted.merges,
            spawned,
            lost: self.is_lost(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_lost(&self) -> bool {
        self.status == Status::Lost
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }
}

// private methods
impl GameState {
    fn starting_grid(config: &GameConfig, rng: &mut Box<dyn RngCore>) -> Grid {
        let (rows, cols) = config.dimensions();
        match config.start() {
            StartingBoard::Fixed(grid) => grid.clone(),
            StartingBoard::Random => {
                let mut grid = Grid::new(rows, cols);
                config
                    .spawn_policy()
                    .seed(&mut grid, config.starting_tiles(), rng.as_mut());
                grid
            }
        }
    }

    fn update_status(&mut self) {
        self.status = if has_moves(&self.grid) {
            Status::Playing
        } else {
            log::info!("game lost with score {}", self.score);
            Status::Lost
        };
    }
}
