//! This module contains the pure rule checks of classic Sudoku: placement
//! legality on a consistent partial grid, conflict detection on a possibly
//! inconsistent board, and completion checking against a solution.
//!
//! All functions here are free of side effects and run in O(27) or O(81·27)
//! time. They expect in-range coordinates and digits; validation against
//! user input happens at the crate boundary (see
//! [Session](crate::session::Session) and the accessors of
//! [Grid](crate::Grid)).

use crate::{BOX_SIZE, Grid, GRID_SIZE, index};

/// Indicates whether the given digit can legally occupy the cell at the
/// given position, that is, whether it already appears in the cell's row,
/// column, or 3x3 box. The box origin is the cell
/// `(row - row % 3, column - column % 3)`.
///
/// The probed cell itself is included in the scan and is expected to be
/// empty; probing a cell that already contains `digit` returns `false`. This
/// is the invariant the [solver](crate::solver) and
/// [generator](crate::generator) maintain: they only probe empty cells of a
/// grid that is consistent so far. For checking an already-filled cell on a
/// board that may be inconsistent, use [has_conflict] instead.
pub fn is_valid_placement(grid: &Grid, row: usize, column: usize, digit: u8)
        -> bool {
    let cells = grid.cells();

    for other_column in 0..GRID_SIZE {
        if cells[index(row, other_column)] == Some(digit) {
            return false;
        }
    }

    for other_row in 0..GRID_SIZE {
        if cells[index(other_row, column)] == Some(digit) {
            return false;
        }
    }

    let box_row = (row / BOX_SIZE) * BOX_SIZE;
    let box_column = (column / BOX_SIZE) * BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            if cells[index(other_row, other_column)] == Some(digit) {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the filled cell at the given position currently
/// violates row, column, or box uniqueness against the rest of the board.
/// An empty cell never conflicts. The cell itself is excluded from the scan,
/// so a lone digit reports no conflict even though the same probe would fail
/// [is_valid_placement].
///
/// Unlike [is_valid_placement], this operates on a board that is allowed to
/// be transiently inconsistent, which is exactly the state interactive input
/// can produce.
pub fn has_conflict(board: &Grid, row: usize, column: usize) -> bool {
    let cells = board.cells();
    let digit = match cells[index(row, column)] {
        Some(digit) => digit,
        None => return false
    };

    for other_column in 0..GRID_SIZE {
        if other_column != column &&
                cells[index(row, other_column)] == Some(digit) {
            return true;
        }
    }

    for other_row in 0..GRID_SIZE {
        if other_row != row &&
                cells[index(other_row, column)] == Some(digit) {
            return true;
        }
    }

    let box_row = (row / BOX_SIZE) * BOX_SIZE;
    let box_column = (column / BOX_SIZE) * BOX_SIZE;

    for other_row in box_row..(box_row + BOX_SIZE) {
        for other_column in box_column..(box_column + BOX_SIZE) {
            if (other_row != row || other_column != column) &&
                    cells[index(other_row, other_column)] == Some(digit) {
                return true;
            }
        }
    }

    false
}

/// Indicates whether the given board matches the given solution in every one
/// of the 81 cells. A single empty or differing cell means the board is not
/// complete; there are no partial-credit semantics.
pub fn is_complete(board: &Grid, solution: &Grid) -> bool {
    board.cells().iter()
        .zip(solution.cells().iter())
        .all(|(board_cell, solution_cell)| {
            board_cell.is_some() && board_cell == solution_cell
        })
}

/// Indicates whether no filled cell of the given grid conflicts with another
/// one. Empty cells are ignored, so an empty grid is trivially consistent.
pub(crate) fn is_consistent(grid: &Grid) -> bool {
    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if has_conflict(grid, row, column) {
                return false;
            }
        }
    }

    true
}
