use super::direction::Direction;
use super::grid::{Grid, Score, Tile};
use super::merge::slide_line;

/// Move is the result of shifting a whole grid in one direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    pub grid: Grid,
    pub changed: bool,
    /// Score gained by this move alone.
    pub score: Score,
    pub merges: usize,
}

/// Computes the grid that results from moving `grid` in `direction` without touching `grid`
/// itself. Callers commit `Move::grid` and add `Move::score` only when `Move::changed` is set.
pub fn apply_move(grid: &Grid, direction: Direction) -> Move {
    let mut shifted = grid.clone();
    let (changed, score, merges) = shift_in_place(&mut shifted, direction);
    Move {
        grid: shifted,
        changed,
        score,
        merges,
    }
}

/// Shifts `grid` in place, running the slide-merge engine exactly once per line. Returns whether
/// anything changed, the score gained and the number of merges.
pub fn shift_in_place(grid: &mut Grid, direction: Direction) -> (bool, Score, usize) {
    let (rows, cols) = grid.dimensions();
    let mut changed = false;
    let mut score: Score = 0;
    let mut merges = 0;

    for line in direction.lines(rows, cols) {
        let values = line.iter().map(|idx| grid.tile(idx)).collect::<Vec<Tile>>();
        let shift = slide_line(&values);
        if !shift.changed {
            continue;
        }
        for (idx, value) in line.iter().zip(shift.tiles) {
            grid.set_tile(idx, value);
        }
        changed = true;
        score += shift.score;
        merges += shift.merges;
    }

    log::debug!(
        "shifted {} - changed: {}, score: {}, merges: {}",
        direction,
        changed,
        score,
        merges
    );
    (changed, score, merges)
}
