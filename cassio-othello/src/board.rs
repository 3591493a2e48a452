//! The 8x8 board: a typed grid of cell states.
//!
//! [`Board`] is a dumb, always-consistent container. It stores cells and
//! counts discs; legality checking and flipping live in [`crate::rules`].

use crate::{Location, EDGE_LENGTH};
use std::fmt;

/// The contents of a single board square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl CellState {
    /// The character used for this cell in the text rendering:
    /// `X` for Black, `O` for White, a space when empty.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Black => 'X',
            CellState::White => 'O',
        }
    }

    /// Returns whether no disc occupies this cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

/// Disc totals for both players, plus the number of empty squares.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DiscCounts {
    pub black: u8,
    pub white: u8,
    pub empty: u8,
}

impl DiscCounts {
    /// The total number of discs on the board.
    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }
}

/// An 8x8 Othello board, row-major, rows and columns indexed 0-7.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[CellState; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Board {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard Othello starting position: White on d4 and e5, Black on
    /// d5 and e4, all other squares empty.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = CellState::White;
        board.cells[3][4] = CellState::Black;
        board.cells[4][3] = CellState::Black;
        board.cells[4][4] = CellState::White;
        board
    }

    /// A board with no discs at all, useful for setting up positions.
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// Get the state of one cell.
    #[inline]
    pub fn cell(&self, loc: Location) -> CellState {
        self.cells[loc.row()][loc.col()]
    }

    /// Overwrite one cell. No rule checking happens at this layer.
    #[inline]
    pub fn set_cell(&mut self, loc: Location, state: CellState) {
        self.cells[loc.row()][loc.col()] = state;
    }

    /// Count the discs of both players and the remaining empty squares.
    pub fn count_discs(&self) -> DiscCounts {
        let mut counts = DiscCounts::default();
        for loc in Location::all() {
            match self.cell(loc) {
                CellState::Empty => counts.empty += 1,
                CellState::Black => counts.black += 1,
                CellState::White => counts.white += 1,
            }
        }
        counts
    }

    /// Returns whether no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.count_discs().empty == 0
    }
}

/// Render the board with column headers a-h, row headers 1-8, and one
/// character per cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIVIDER: &str = " +-+-+-+-+-+-+-+-+";

        writeln!(f, " |a|b|c|d|e|f|g|h|")?;
        writeln!(f, "{}", DIVIDER)?;
        for (index, row) in self.cells.iter().enumerate() {
            write!(f, "{}|", index + 1)?;
            for cell in row {
                write!(f, "{}|", cell.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", DIVIDER)
    }
}
