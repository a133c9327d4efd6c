use std::fmt;

use serde::Serialize;

use super::Player;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Signed value used in observations: 0 empty, +1 Black, -1 White.
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    /// The owner of this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece landed at this height.
    Placed { height: usize },
    /// Every height in the column is occupied; the board is unchanged.
    ColumnFull,
}

/// A G x G x G lattice indexed (height, width, depth). Height 0 is the floor.
///
/// Invariant: inside any (width, depth) column the occupied cells form a
/// contiguous run starting at height 0. `place` is the only mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid_size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with side length `grid_size`.
    pub fn new(grid_size: usize) -> Self {
        Board {
            grid_size,
            cells: vec![Cell::Empty; grid_size * grid_size * grid_size],
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn index(&self, height: usize, width: usize, depth: usize) -> usize {
        flat_index(self.grid_size, height, width, depth)
    }

    /// Get the cell at a specific position.
    ///
    /// Panics if any coordinate is outside the board.
    pub fn get(&self, height: usize, width: usize, depth: usize) -> Cell {
        self.cells[self.index(height, width, depth)]
    }

    /// Whether (width, depth) names a column of this board.
    pub fn contains_column(&self, width: usize, depth: usize) -> bool {
        width < self.grid_size && depth < self.grid_size
    }

    fn check_column(&self, width: usize, depth: usize) -> Result<(), MoveError> {
        if self.contains_column(width, depth) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                width,
                depth,
                grid_size: self.grid_size,
            })
        }
    }

    /// Number of pieces stacked in a column.
    pub fn column_height(&self, width: usize, depth: usize) -> usize {
        (0..self.grid_size)
            .take_while(|&h| self.get(h, width, depth) != Cell::Empty)
            .count()
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, width: usize, depth: usize) -> bool {
        if !self.contains_column(width, depth) {
            return true;
        }
        self.get(self.grid_size - 1, width, depth) != Cell::Empty
    }

    /// Drop a piece into the lowest empty cell of column (width, depth).
    pub fn place(
        &mut self,
        width: usize,
        depth: usize,
        player: Player,
    ) -> Result<Placement, MoveError> {
        self.check_column(width, depth)?;

        for height in 0..self.grid_size {
            let idx = self.index(height, width, depth);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = player.to_cell();
                return Ok(Placement::Placed { height });
            }
        }

        Ok(Placement::ColumnFull)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// An independent copy of the current cell values.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid_size: self.grid_size,
            values: self.cells.iter().map(|c| c.value()).collect(),
        }
    }
}

impl fmt::Display for Board {
    /// Floors bottom-up, one `{h}F` header each, then one line per width row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for height in 0..self.grid_size {
            writeln!(f, "{height}F")?;
            for width in 0..self.grid_size {
                let row: Vec<String> = (0..self.grid_size)
                    .map(|depth| format!("{:>2}", self.get(height, width, depth).value()))
                    .collect();
                writeln!(f, "[{}]", row.join(" "))?;
            }
        }
        Ok(())
    }
}

fn flat_index(grid_size: usize, height: usize, width: usize, depth: usize) -> usize {
    assert!(
        height < grid_size && width < grid_size && depth < grid_size,
        "cell ({height}, {width}, {depth}) is outside a board of size {grid_size}"
    );
    (height * grid_size + width) * grid_size + depth
}

/// Owned copy of a board's cell values in (height, width, depth) row-major
/// order. Never shares storage with the board it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    grid_size: usize,
    values: Vec<i8>,
}

impl BoardSnapshot {
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.grid_size; 3]
    }

    /// Panics if any coordinate is outside the board.
    pub fn get(&self, height: usize, width: usize, depth: usize) -> i8 {
        self.values[flat_index(self.grid_size, height, width, depth)]
    }

    /// Flat values, length G^3.
    pub fn values(&self) -> &[i8] {
        &self.values
    }

    /// Flat values as f32, for tensor consumers.
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| f32::from(v)).collect()
    }

    /// Nested `[height][width][depth]` layout.
    pub fn to_nested(&self) -> Vec<Vec<Vec<i8>>> {
        let g = self.grid_size;
        self.values
            .chunks(g * g)
            .map(|floor| floor.chunks(g).map(<[i8]>::to_vec).collect())
            .collect()
    }
}
