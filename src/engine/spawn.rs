use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::{is_valid_tile, Grid, Idx, Tile};
use crate::error::{Error, Result};

const NEW_TILE_CHOICES: [Tile; 2] = [2, 4];
const NEW_TILE_WEIGHTS: [f64; 2] = [0.9, 0.1];

/// SpawnWeights is an ordered set of (tile value, relative weight) pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnWeights(Vec<(Tile, f64)>);

impl Default for SpawnWeights {
    fn default() -> Self {
        Self(
            NEW_TILE_CHOICES
                .iter()
                .copied()
                .zip(NEW_TILE_WEIGHTS.iter().copied())
                .collect(),
        )
    }
}

impl SpawnWeights {
    pub fn new(weights: Vec<(Tile, f64)>) -> Self {
        Self(weights)
    }

    pub fn weights(&self) -> &[(Tile, f64)] {
        &self.0
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(Error::EmptySpawnWeights);
        }
        for &(tile, weight) in &self.0 {
            if !is_spawnable_tile(tile) {
                return Err(Error::InvalidTile { value: tile });
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidSpawnWeight { tile, weight });
            }
        }
        Ok(())
    }
}

/// A spawned tile must be a real tile, never an empty cell.
fn is_spawnable_tile(tile: Tile) -> bool {
    tile != 0 && is_valid_tile(tile)
}

/// Spawn records a tile placed on the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Spawn {
    pub idx: Idx,
    pub value: Tile,
}

/// SpawnPolicy picks where new tiles go and what they are worth.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnPolicy {
    choices: Vec<Tile>,
    weighted_index: WeightedIndex<f64>,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self {
            choices: NEW_TILE_CHOICES.to_vec(),
            weighted_index: WeightedIndex::new(NEW_TILE_WEIGHTS)
                .expect("NEW_TILE_WEIGHTS should never be empty"),
        }
    }
}

impl SpawnPolicy {
    pub fn new(weights: &SpawnWeights) -> Result<Self> {
        weights.validate()?;
        let choices = weights.0.iter().map(|(tile, _)| *tile).collect();
        let weighted_index = WeightedIndex::new(weights.0.iter().map(|(_, w)| *w))?;
        Ok(Self {
            choices,
            weighted_index,
        })
    }

    /// Samples a tile value from the weighted distribution.
    pub fn tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        self.choices[self.weighted_index.sample(rng)]
    }

    /// Places one new tile on a uniformly chosen empty cell. Returns None, leaving the grid
    /// untouched, when there is no empty cell.
    pub fn spawn<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
        let idx = *grid.empty_cells().choose(rng)?;
        let value = self.tile(rng);
        grid.set_tile(&idx, value);
        log::trace!("spawned {} at {}", value, idx);
        Some(Spawn { idx, value })
    }

    /// Places up to `count` tiles on distinct empty cells.
    pub fn seed<R: Rng + ?Sized>(&self, grid: &mut Grid, count: usize, rng: &mut R) -> Vec<Spawn> {
        let empty = grid.empty_cells();
        let amount = count.min(empty.len());
        index::sample(rng, empty.len(), amount)
            .into_iter()
            .map(|i| {
                let idx = empty[i];
                let value = self.tile(rng);
                grid.set_tile(&idx, value);
                log::trace!("seeded {} at {}", value, idx);
                Spawn { idx, value }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::*;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn spawn_on_full_grid() {
        let full = Grid::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        let mut grid = full.clone();
        let spawned = SpawnPolicy::default().spawn(&mut grid, &mut rng());
        assert_eq!(spawned, None);
        assert_eq!(grid, full);
    }

    #[test]
    fn spawn_fills_the_only_empty_cell() {
        let mut grid = Grid::from_rows(vec![vec![2, 4], vec![0, 16]]).unwrap();
        let spawned = SpawnPolicy::default()
            .spawn(&mut grid, &mut rng())
            .expect("one cell is empty");
        assert_eq!(spawned.idx, Idx(0, 1));
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(grid.get(1, 0), spawned.value);
        assert_eq!(grid.occupied(), 4);
    }

    #[test]
    fn default_distribution_favours_twos() {
        let policy = SpawnPolicy::default();
        let mut rng = rng();
        let samples = (0..10_000).map(|_| policy.tile(&mut rng)).collect::<Vec<_>>();
        let fours = samples.iter().filter(|v| **v == 4).count();
        assert!(samples.iter().all(|v| *v == 2 || *v == 4));
        assert!((700..1300).contains(&fours), "{} fours", fours);
    }

    #[test]
    fn custom_weights() {
        let weights = SpawnWeights::new(vec![(8, 1.0)]);
        let policy = SpawnPolicy::new(&weights).unwrap();
        let mut grid = Grid::new(3, 3);
        let spawned = policy.seed(&mut grid, 4, &mut rng());
        assert_eq!(spawned.len(), 4);
        assert!(spawned.iter().all(|s| s.value == 8));
    }

    #[test]
    fn default_policy_matches_default_weights() {
        let policy = SpawnPolicy::new(&SpawnWeights::default()).unwrap();
        assert_eq!(policy, SpawnPolicy::default());
    }

    #[rstest]
    #[case::empty(vec![], Error::EmptySpawnWeights)]
    #[case::zero_tile(vec![(0, 1.0)], Error::InvalidTile { value: 0 })]
    #[case::odd_tile(vec![(2, 0.5), (6, 0.5)], Error::InvalidTile { value: 6 })]
    #[case::one_is_not_a_tile(vec![(1, 1.0)], Error::InvalidTile { value: 1 })]
    #[case::zero_weight(vec![(2, 0.0)], Error::InvalidSpawnWeight { tile: 2, weight: 0.0 })]
    #[case::negative_weight(vec![(2, 1.0), (4, -0.1)], Error::InvalidSpawnWeight { tile: 4, weight: -0.1 })]
    fn invalid_weights(#[case] weights: Vec<(Tile, f64)>, #[case] expected: Error) {
        assert_eq!(SpawnPolicy::new(&SpawnWeights::new(weights)), Err(expected));
    }

    #[rstest]
    #[case::fewer_than_empty(4, 4, 3, 3)]
    #[case::exactly_full(2, 2, 4, 4)]
    #[case::more_than_cells(1, 1, 2, 1)]
    fn seed_places_distinct_tiles(
        #[case] rows: usize,
        #[case] cols: usize,
        #[case] count: usize,
        #[case] placed: usize,
    ) {
        let mut grid = Grid::new(rows, cols);
        let spawned = SpawnPolicy::default().seed(&mut grid, count, &mut rng());
        let cells = spawned.iter().map(|s| s.idx).collect::<HashSet<_>>();
        assert_eq!(spawned.len(), placed);
        assert_eq!(cells.len(), placed);
        assert_eq!(grid.occupied(), placed);
    }
}
