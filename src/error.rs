//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in this crate. This
/// does not include errors that occur when parsing grids, see
/// [GridParseError](enum.GridParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid, that is, at least one of them is greater than 8.
    OutOfBounds,

    /// Indicates that some digit is invalid, that is, less than 1 or greater
    /// than 9.
    InvalidDigit,

    /// Indicates that a clue-count window handed to the generator is
    /// invalid. This is the case if the minimum exceeds the maximum or the
    /// maximum exceeds 81.
    InvalidClueBounds,

    /// Indicates that a clue grid and solution grid do not form a valid
    /// puzzle, that is, the solution is not full, the solution violates the
    /// Sudoku rules, or the clues are not a subset of the solution.
    InvalidPuzzle,

    /// Indicates that a deserialized history places its cursor beyond the
    /// number of stored records.
    InvalidHistoryCursor,

    /// Indicates that deserialized session state is inconsistent, for
    /// example a board that contradicts the puzzle's givens, notes kept on a
    /// filled cell, a history record targeting a given cell, or a hint
    /// counter that disagrees with the applied hint records.
    InvalidSessionState
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "coordinates lie outside the 9x9 grid"),
            SudokuError::InvalidDigit =>
                write!(f, "digit is not in the range [1, 9]"),
            SudokuError::InvalidClueBounds =>
                write!(f, "clue-count window is not contained in [0, 81]"),
            SudokuError::InvalidPuzzle =>
                write!(f, "clues and solution do not form a valid puzzle"),
            SudokuError::InvalidHistoryCursor =>
                write!(f, "history cursor lies beyond the stored records"),
            SudokuError::InvalidSessionState =>
                write!(f, "session state is inconsistent")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](../struct.Grid.html).
#[derive(Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid digit (0 or more
    /// than 9).
    InvalidDigit
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfCells =>
                write!(f, "grid code does not contain exactly 81 cells"),
            GridParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            GridParseError::InvalidDigit =>
                write!(f, "cell digit is not in the range [1, 9]")
        }
    }
}

impl Error for GridParseError { }

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}
