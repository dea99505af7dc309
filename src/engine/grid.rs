use crate::error::{Error, Result};

/// Value of a single cell. 0 is an empty cell, anything else is a power of two no smaller than 2.
pub type Tile = u32;

pub type Score = u64;

/// Idx addresses a cell by column (x) and row (y).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Idx(pub usize, pub usize);

impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "idx({0},{1})", self.0, self.1)
    }
}

impl Idx {
    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }
}

/// Returns true for values that may legally occupy a cell.
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Grid is a fixed size, row-major 2d container of tiles.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    slots: Vec<Tile>,
}

// public methods
impl Grid {
    /// Creates an empty grid. Zero-sized grids are rejected by configuration before they get here.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "grid dimensions must be non-zero, got {rows} x {cols}"
        );
        Self {
            rows,
            cols,
            slots: vec![0; rows * cols],
        }
    }

    /// Builds a grid from preset rows, validating shape and tile values.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(Error::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }

        let mut slots = Vec::with_capacity(height * width);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedPreset {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            if let Some(&value) = row.iter().find(|v| !is_valid_tile(**v)) {
                return Err(Error::InvalidTile { value });
            }
            slots.extend(row);
        }

        Ok(Self {
            rows: height,
            cols: width,
            slots,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.slots[self.offset(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        let offset = self.offset(row, col);
        self.slots[offset] = value;
    }

    pub fn tile(&self, idx: &Idx) -> Tile {
        self.get(idx.y(), idx.x())
    }

    pub fn set_tile(&mut self, idx: &Idx, value: Tile) {
        self.set(idx.y(), idx.x(), value)
    }

    /// Overwrites every cell with the contents of `other`, which must have the same dimensions.
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "cannot copy between grids of different dimensions"
        );
        self.slots.copy_from_slice(&other.slots);
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Idx> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(offset, _)| Idx(offset % self.cols, offset / self.cols))
            .collect()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|v| **v != 0).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.slots.iter().copied().max().unwrap_or(0)
    }

    pub fn rows_iter(&self) -> std::slice::Chunks<'_, Tile> {
        self.slots.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows_iter().map(|r| r.to_vec()).collect()
    }
}

// private methods
impl Grid {
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows,
            "invalid row {row} for a grid with {} rows",
            self.rows
        );
        assert!(
            col < self.cols,
            "invalid column {col} for a grid with {} columns",
            self.cols
        );
        row * self.cols + col
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows_iter() {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(f, "{}", line)?;
        }
        write!(f, "=========================")
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[test]
    fn new_is_empty() {
        let grid = Grid::new(3, 5);
        assert_eq!(grid.dimensions(), (3, 5));
        assert_eq!(grid.occupied(), 0);
        assert_eq!(grid.empty_cells().len(), 15);
    }

    #[test]
    fn get_set() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, 8);
        assert_eq!(grid.get(1, 2), 8);
        assert_eq!(grid.tile(&Idx(2, 1)), 8);
        grid.set_tile(&Idx(0, 1), 4);
        assert_eq!(grid.get(1, 0), 4);
        assert_eq!(grid.to_rows(), vec![vec![0, 0, 0], vec![4, 0, 8]]);
    }

    #[test]
    #[should_panic(expected = "invalid row")]
    fn get_out_of_range_row() {
        let grid = Grid::new(4, 4);
        grid.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "invalid column")]
    fn set_out_of_range_column() {
        let mut grid = Grid::new(4, 4);
        grid.set(0, 4, 2);
    }

    #[test]
    fn clone_is_deep() {
        let mut original = Grid::new(2, 2);
        original.set(0, 0, 2);
        let mut cloned = original.clone();
        cloned.set(0, 0, 4);
        assert_eq!(original.get(0, 0), 2);
        assert_eq!(cloned.get(0, 0), 4);
    }

    #[test]
    #[should_panic(expected = "different dimensions")]
    fn copy_from_mismatched() {
        let mut grid = Grid::new(2, 2);
        grid.copy_from(&Grid::new(2, 3));
    }

    #[test]
    fn empty_cells_row_major() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(grid.empty_cells(), vec![Idx(1, 0), Idx(0, 1)]);
        assert_eq!(grid.max_tile(), 4);
    }

    #[rstest]
    #[case::ragged(vec![vec![2, 0], vec![0]], Error::RaggedPreset { row: 1, expected: 2, found: 1 })]
    #[case::odd_tile(vec![vec![2, 3]], Error::InvalidTile { value: 3 })]
    #[case::one_is_not_a_tile(vec![vec![1, 0]], Error::InvalidTile { value: 1 })]
    #[case::no_rows(vec![], Error::InvalidDimensions { rows: 0, cols: 0 })]
    #[case::no_cols(vec![vec![]], Error::InvalidDimensions { rows: 1, cols: 0 })]
    fn from_rows_rejects(#[case] rows: Vec<Vec<Tile>>, #[case] expected: Error) {
        assert_eq!(Grid::from_rows(rows), Err(expected));
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(vec![vec![2, 0], vec![0, 16]]).unwrap();
        assert_eq!(
            format!("{}", grid),
            "2\t0\n0\t16\n========================="
        );
    }
}
