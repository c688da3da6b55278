//! `grid`: the letter board being searched.
//!
//! A [`Grid`] is an immutable `rows × cols` board of lowercase letters. Cells are addressed
//! either by coordinate ([`Cell`], always `(row, col)`) or by a dense integer id
//! (`id = row * cols + col`). Adjacency is the 8-cell Moore neighborhood.
//!
//! The input format is a single line of whitespace-separated rows, e.g. `"abcd efgh ijkl mnop"`.
//! Every row must have the same length; a ragged board is rejected instead of silently
//! picking one row's length as the column count.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::{
    bytes::complete::take_while1,
    character::complete::{multispace0, multispace1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};

use crate::errors::GridError;

/// Dense cell identifier, `row * cols + col`.
pub type CellId = usize;

/// Neighbor offsets as `(Δrow, Δcol)`.
///
/// Column offset is the outer loop and row offset the inner one. Discovery order (and so
/// which path is canonical for a word) depends on this exact sequence.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0), /* self */ (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells surrounding `self`.
    #[must_use]
    pub fn is_adjacent(&self, other: Cell) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular board of lowercase letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    letters: Vec<char>,
}

impl Grid {
    /// Build a grid from its rows, top to bottom.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if there are no rows or the first row is empty.
    /// - [`GridError::RaggedRows`] if a row's length differs from the first row's.
    /// - [`GridError::InvalidLetter`] if a cell is not alphabetic.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::EmptyGrid);
        };
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut letters = Vec::with_capacity(rows.len() * cols);
        for (row, raw) in rows.iter().enumerate() {
            let raw = raw.as_ref();
            let found = raw.chars().count();
            if found != cols {
                return Err(GridError::RaggedRows { row, expected: cols, found });
            }
            for (col, letter) in raw.chars().enumerate() {
                if !letter.is_alphabetic() {
                    return Err(GridError::InvalidLetter { letter, row, col });
                }
                letters.extend(letter.to_lowercase().take(1));
            }
        }

        Ok(Grid { rows: rows.len(), cols, letters })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Reject boards too small to hold a single word of `min_word_size` letters.
    ///
    /// # Errors
    ///
    /// [`GridError::TooSmall`] when the board has fewer cells than `min_word_size`.
    pub fn check_word_size(&self, min_word_size: usize) -> Result<(), GridError> {
        if self.len() < min_word_size {
            return Err(GridError::TooSmall { cells: self.len(), min_word_size });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Letter at `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is out of bounds; callers bounds-check with [`Grid::is_in_bounds`].
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> char {
        assert!(self.is_in_bounds(cell), "cell {cell} outside {}x{} grid", self.rows, self.cols);
        self.letters[self.id_of(cell)]
    }

    #[must_use]
    pub fn id_of(&self, cell: Cell) -> CellId {
        cell.row * self.cols + cell.col
    }

    #[must_use]
    pub fn cell_of(&self, id: CellId) -> Cell {
        Cell::new(id / self.cols, id % self.cols)
    }

    /// In-bounds Moore neighbors of `cell`, in the fixed discovery order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let neighbor = Cell::new(cell.row.checked_add_signed(dr)?, cell.col.checked_add_signed(dc)?);
            self.is_in_bounds(neighbor).then_some(neighbor)
        })
    }

    /// Every cell, row-major. This is the order starting cells are searched in.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(|id| self.cell_of(id))
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in self.letters.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(char::to_ascii_uppercase).collect();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

fn row_strings(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, take_while1(|c: char| !c.is_whitespace())),
        multispace0,
    ))
    .parse(input)
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parse the single-line board format: whitespace-separated rows, left to right.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let (_, rows) = row_strings(input).map_err(|_| GridError::Unparsable { input: input.to_string() })?;
        Grid::from_rows(&rows)
    }
}
