use super::grid::Idx;

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}

impl Direction {
    /// Every direction, in the order the terminal detector probes them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (dx, dy) step from a cell to its neighbour in the direction of travel.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Number of cells in each line moved in this direction.
    pub fn line_len(&self, rows: usize, cols: usize) -> usize {
        if self.is_horizontal() {
            cols
        } else {
            rows
        }
    }

    /// Number of lines moved independently in this direction.
    pub fn line_count(&self, rows: usize, cols: usize) -> usize {
        if self.is_horizontal() {
            rows
        } else {
            cols
        }
    }

    pub fn indices(&self, rows: usize, cols: usize) -> Indices {
        Indices::new(rows, cols, *self)
    }

    /// Cells grouped by line, each line ordered from the destination edge inward.
    pub fn lines(&self, rows: usize, cols: usize) -> Vec<Vec<Idx>> {
        let idxs = self.indices(rows, cols).collect::<Vec<Idx>>();
        idxs.chunks(self.line_len(rows, cols))
            .map(|line| line.to_vec())
            .collect()
    }
}

/// Indices is an iterator of Idx over a grid, line by line. Every line starts at the edge the
/// tiles travel toward and walks back against the direction of travel, so the first cell of a
/// line is always the first one to fill.
pub struct Indices {
    direction: Direction,
    rows: usize,
    cols: usize,
    line: usize,
    pos: usize,
}

impl Indices {
    fn new(rows: usize, cols: usize, direction: Direction) -> Self {
        Indices {
            direction,
            rows,
            cols,
            line: 0,
            pos: 0,
        }
    }

    fn origin(&self) -> Idx {
        match self.direction {
            Direction::Left => Idx(0, self.line),
            Direction::Right => Idx(self.cols - 1, self.line),
            Direction::Up => Idx(self.line, 0),
            Direction::Down => Idx(self.line, self.rows - 1),
        }
    }
}

impl Iterator for Indices {
    type Item = Idx;

    fn next(&mut self) -> Option<Self::Item> {
        let line_len = self.direction.line_len(self.rows, self.cols);
        if line_len == 0 || self.line >= self.direction.line_count(self.rows, self.cols) {
            return None;
        }

        let origin = self.origin();
        let (dx, dy) = self.direction.offset();
        let pos = self.pos as isize;
        let idx = Idx(
            (origin.x() as isize - dx * pos) as usize,
            (origin.y() as isize - dy * pos) as usize,
        );

        self.pos += 1;
        if self.pos == line_len {
            self.pos = 0;
            self.line += 1;
        }
        Some(idx)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rstest::*;

    use super::*;

    #[rstest]
    #[case::left(Direction::Left, vec![
        vec![Idx(0, 0), Idx(1, 0), Idx(2, 0)],
        vec![Idx(0, 1), Idx(1, 1), Idx(2, 1)],
    ])]
    #[case::right(Direction::Right, vec![
        vec![Idx(2, 0), Idx(1, 0), Idx(0, 0)],
        vec![Idx(2, 1), Idx(1, 1), Idx(0, 1)],
    ])]
    #[case::up(Direction::Up, vec![
        vec![Idx(0, 0), Idx(0, 1)],
        vec![Idx(1, 0), Idx(1, 1)],
        vec![Idx(2, 0), Idx(2, 1)],
    ])]
    #[case::down(Direction::Down, vec![
        vec![Idx(0, 1), Idx(0, 0)],
        vec![Idx(1, 1), Idx(1, 0)],
        vec![Idx(2, 1), Idx(2, 0)],
    ])]
    fn lines_on_2x3(#[case] direction: Direction, #[case] expected: Vec<Vec<Idx>>) {
        assert_eq!(direction.lines(2, 3), expected);
    }

    #[rstest]
    fn indices_cover_every_cell_once(
        #[values(Direction::Left, Direction::Right, Direction::Up, Direction::Down)]
        direction: Direction,
        #[values((1, 1), (4, 4), (3, 5), (6, 2))] dimensions: (usize, usize),
    ) {
        let (rows, cols) = dimensions;
        let idxs = direction.indices(rows, cols).collect::<Vec<_>>();
        let unique = idxs.iter().copied().collect::<HashSet<_>>();
        assert_eq!(idxs.len(), rows * cols);
        assert_eq!(unique.len(), rows * cols);
        assert!(idxs.iter().all(|i| i.x() < cols && i.y() < rows));
    }

    #[rstest]
    fn line_walks_against_travel(
        #[values(Direction::Left, Direction::Right, Direction::Up, Direction::Down)]
        direction: Direction,
    ) {
        let (dx, dy) = direction.offset();
        for line in direction.lines(4, 4) {
            for pair in line.windows(2) {
                assert_eq!(pair[1].x() as isize - pair[0].x() as isize, -dx);
                assert_eq!(pair[1].y() as isize - pair[0].y() as isize, -dy);
            }
        }
    }
}
