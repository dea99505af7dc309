use super::direction::Direction;
use super::grid::Grid;
use super::orchestrator::apply_move;

/// Returns true when at least one direction would change the grid. Every probe runs against a
/// private copy, so the grid handed in is never modified.
pub fn has_moves(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .any(|direction| apply_move(grid, *direction).changed)
}

/// Every direction that would change the grid, in probe order.
pub fn available_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|direction| apply_move(grid, *direction).changed)
        .collect()
}
