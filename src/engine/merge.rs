use super::grid::{Score, Tile};

/// LineShift is the outcome of sliding one line toward its destination edge.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineShift {
    /// The resolved line, ordered from the destination edge like the input.
    pub tiles: Vec<Tile>,
    /// Sum of the values of every tile produced by a merge.
    pub score: Score,
    pub merges: usize,
    pub changed: bool,
}

/// Slides and merges a single line in one pass. `line` is ordered starting at the edge the tiles
/// travel toward; the result keeps that order.
///
/// Tiles merge pairwise starting from the destination edge and a tile produced by a merge never
/// merges again in the same move, so `[2, 2, 2, 0]` resolves to `[4, 2, 0, 0]` and
/// `[2, 2, 2, 2]` to `[4, 4, 0, 0]`.
pub fn slide_line(line: &[Tile]) -> LineShift {
    let mut tiles = Vec::with_capacity(line.len());
    let mut score: Score = 0;
    let mut merges = 0;

    let mut pending = line.iter().copied().filter(|v| *v != 0).peekable();
    while let Some(pivot) = pending.next() {
        // the pivot is the tile nearest the edge that hasn't been placed yet; it can absorb at
        // most the next tile and the merged result is placed immediately so it can't merge again
        let merged = match pending.peek() {
            Some(&next) if next == pivot => pivot.checked_mul(2),
            _ => None,
        };
        match merged {
            Some(merged) => {
                let _ = pending.next();
                score += Score::from(merged);
                merges += 1;
                tiles.push(merged);
            }
            // a pair whose sum doesn't fit in a Tile stays put
            None => tiles.push(pivot),
        }
    }
    tiles.resize(line.len(), 0);

    let changed = tiles.as_slice() != line;
    LineShift {
        tiles,
        score,
        merges,
        changed,
    }
}
