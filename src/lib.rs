// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a complete engine for classic 9x9 Sudoku. It
//! supports the following key features:
//!
//! * Parsing and printing grids
//! * Checking placements, conflicts, and completed boards according to
//! standard Sudoku rules
//! * Solving puzzles using a backtracking algorithm
//! * Counting solutions (capped at two) to certify that a puzzle is uniquely
//! solvable
//! * Generating random puzzles with a guaranteed unique solution and a
//! configurable clue-count window per difficulty
//! * Tracking play in a [Session](session::Session) with per-cell notes and
//! a linear undo/redo history
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_engine::Grid;
//!
//! let grid = Grid::parse(&["5,3,4,6,7,8,9,1,2"; 9].join(",")).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving puzzles
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills all empty
//! cells of a partial grid, or reports that no completion exists. It also
//! offers a counting mode which distinguishes unsolvable, uniquely solvable,
//! and ambiguous grids without ever enumerating more than two solutions.
//!
//! ```
//! use sudoku_engine::Grid;
//! use sudoku_engine::solver::BacktrackingSolver;
//!
//! let empty = Grid::new();
//! let solved = BacktrackingSolver.solve(&empty).unwrap();
//! assert!(solved.is_full());
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first synthesizes a random complete
//! solution and then removes clues in shuffled order, keeping only removals
//! after which the puzzle is still uniquely solvable. The result is a
//! [Puzzle], an immutable pair of clue grid and solution grid.
//!
//! ```
//! use sudoku_engine::generator::{Difficulty, Generator};
//!
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert!(puzzle.clues().is_subset(puzzle.solution()));
//! ```
//!
//! # Playing a puzzle
//!
//! A [Session](session::Session) owns the mutable board, the per-cell notes,
//! and the move history of one game. Clue cells are read-only for the whole
//! game, and every mutation can be undone and redone.
//!
//! ```
//! use sudoku_engine::generator::{Difficulty, Generator};
//! use sudoku_engine::session::Session;
//!
//! let puzzle = Generator::new_default().generate(Difficulty::Easy);
//! let mut session = Session::new(puzzle);
//!
//! if let Some((row, col)) = session.first_empty_cell() {
//!     assert!(session.set_value(row, col, 1).is_ok());
//!     assert!(session.undo());
//!     assert_eq!(Ok(None), session.value(row, col));
//! }
//! ```
//!
//! # Note regarding performance
//!
//! Solving and counting are fast in practice (well below a millisecond for
//! ordinary puzzles), but generation runs one uniqueness check per removal
//! candidate and therefore benefits greatly from optimization. It is
//! recommended to use at least `opt-level = 2` in tests that generate
//! puzzles.

pub mod error;
pub mod generator;
pub mod history;
pub mod rules;
pub mod session;
pub mod solver;

use error::{GridParseError, GridParseResult, SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a grid.
pub const GRID_SIZE: usize = 9;

/// The number of rows and columns of one of the nine non-overlapping boxes
/// of a grid.
pub const BOX_SIZE: usize = 3;

/// The total number of cells of a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub(crate) fn index(row: usize, column: usize) -> usize {
    row * GRID_SIZE + column
}

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a digit from 1
/// to 9. The grid is laid out in nine 3x3 boxes:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// A `Grid` represents raw cell content only. Whether that content satisfies
/// the Sudoku rules is checked by the functions in the [rules] module.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Option<u8>>")]
#[serde(try_from = "Vec<Option<u8>>")]
pub struct Grid {
    cells: [Option<u8>; CELL_COUNT]
}

impl From<Grid> for Vec<Option<u8>> {
    fn from(grid: Grid) -> Vec<Option<u8>> {
        grid.cells.to_vec()
    }
}

impl TryFrom<Vec<Option<u8>>> for Grid {
    type Error = GridParseError;

    fn try_from(cells: Vec<Option<u8>>) -> GridParseResult<Grid> {
        if cells.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, &cell) in cells.iter().enumerate() {
            if let Some(digit) = cell {
                if digit < 1 || digit > 9 {
                    return Err(GridParseError::InvalidDigit);
                }

                grid.cells[i] = Some(digit);
            }
        }

        Ok(grid)
    }
}

fn to_char(cell: Option<u8>) -> char {
    if let Some(digit) = cell {
        (b'0' + digit) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for column in 0..GRID_SIZE {
        if column == 0 {
            result.push(start);
        }
        else if column % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(column));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, row: usize) -> String {
    line('║', '║', '│',
        |column| to_char(grid.cells[index(row, column)]), ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &Option<u8>) -> String {
    if let Some(digit) = cell {
        digit.to_string()
    }
    else {
        String::from("")
    }
}

fn check_coordinates(row: usize, column: usize) -> SudokuResult<()> {
    if row >= GRID_SIZE || column >= GRID_SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

pub(crate) fn check_digit(digit: u8) -> SudokuResult<()> {
    if digit < 1 || digit > 9 {
        Err(SudokuError::InvalidDigit)
    }
    else {
        Ok(())
    }
}

impl Grid {

    /// Creates a new, empty grid.
    pub fn new() -> Grid {
        Grid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `5,3, , ,7, , , , ,6, , ,1,9,5, , , ,...` (with 81 entries in total)
    /// assigns the digits 5 and 3 as well as an empty cell to the beginning
    /// of the first row.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit < 1 || digit > 9 {
                return Err(GridParseError::InvalidDigit);
            }

            grid.cells[i] = Some(digit);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(2, 1, 5).unwrap();
    ///
    /// let code = grid.to_parseable_string();
    /// assert_eq!(grid, Grid::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the desired cell. Must be in the range `[0, 9[`.
    /// * `column`: The column of the desired cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<u8>> {
        check_coordinates(row, column)?;
        Ok(self.cells[index(row, column)])
    }

    /// Indicates whether the cell at the specified position contains the
    /// given digit. This will return `false` if there is a different digit
    /// in that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the checked cell. Must be in the range `[0, 9[`.
    /// * `column`: The column of the checked cell. Must be in the range
    /// `[0, 9[`.
    /// * `digit`: The digit to check for. If it is *not* in the range
    /// `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        Ok(self.get_cell(row, column)? == Some(digit))
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the assigned cell. Must be in the range `[0, 9[`.
    /// * `column`: The column of the assigned cell. Must be in the range
    /// `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<()> {
        check_coordinates(row, column)?;
        check_digit(digit)?;
        self.cells[index(row, column)] = Some(digit);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the cleared cell. Must be in the range `[0, 9[`.
    /// * `column`: The column of the cleared cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        check_coordinates(row, column)?;
        self.cells[index(row, column)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(_) => self_cell == other_cell,
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<u8>; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

/// A Sudoku puzzle, that is, an immutable pair of a clue grid and the
/// solution grid it was carved from. Every filled cell of the clue grid
/// holds the same digit as the corresponding cell of the solution, and the
/// set of filled clue cells is exactly the set of given cells that stays
/// read-only for the life of the puzzle.
///
/// Puzzles are usually obtained from a [Generator](generator::Generator),
/// which guarantees in addition that the clues admit exactly one completion.
/// [Puzzle::new] only validates the structural invariants above, not
/// uniqueness, which would require a solver run (see
/// [BacktrackingSolver::count](solver::BacktrackingSolver::count)).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    clues: Grid,
    solution: Grid
}

impl Puzzle {

    /// Creates a new puzzle from the given clue grid and solution grid after
    /// validating that the solution is full and consistent with the Sudoku
    /// rules and that the clues are a subset of the solution.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidPuzzle` if any of the conditions above is
    /// violated.
    pub fn new(clues: Grid, solution: Grid) -> SudokuResult<Puzzle> {
        if !solution.is_full() || !rules::is_consistent(&solution) ||
                !clues.is_subset(&solution) {
            return Err(SudokuError::InvalidPuzzle);
        }

        Ok(Puzzle {
            clues,
            solution
        })
    }

    pub(crate) fn new_unchecked(clues: Grid, solution: Grid) -> Puzzle {
        Puzzle {
            clues,
            solution
        }
    }

    /// Gets a reference to the clue grid of this puzzle.
    pub fn clues(&self) -> &Grid {
        &self.clues
    }

    /// Gets a reference to the solution grid of this puzzle.
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Indicates whether the cell at the specified position is a given, i.e.
    /// prefilled in the clue grid and therefore read-only during play.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, row: usize, column: usize) -> SudokuResult<bool> {
        Ok(self.clues.get_cell(row, column)?.is_some())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    /// The canonical solved grid used as a fixture throughout the crate's
    /// tests.
    pub(crate) const SOLVED_GRID: &str = "\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    #[test]
    fn parse_ok() {
        let mut code = String::from("5,3, , ,7");
        code.push_str(&",".repeat(CELL_COUNT - 5));
        let grid = Grid::parse(code.as_str())
            .expect("parsing valid grid failed");

        assert_eq!(Some(5), grid.get_cell(0, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(0, 1).unwrap());
        assert_eq!(None, grid.get_cell(0, 2).unwrap());
        assert_eq!(None, grid.get_cell(0, 3).unwrap());
        assert_eq!(Some(7), grid.get_cell(0, 4).unwrap());
        assert_eq!(None, grid.get_cell(8, 8).unwrap());
        assert!(grid.has_digit(0, 0, 5).unwrap());
        assert!(!grid.has_digit(0, 0, 4).unwrap());
        assert!(!grid.has_digit(0, 2, 1).unwrap());
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse(&",".repeat(CELL_COUNT - 2)));
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse(&",".repeat(CELL_COUNT)));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(GridParseError::NumberFormatError),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut code = String::from("0");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(GridParseError::InvalidDigit),
            Grid::parse(code.as_str()));

        let mut code = String::from("10");
        code.push_str(&",".repeat(CELL_COUNT - 1));
        assert_eq!(Err(GridParseError::InvalidDigit),
            Grid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = Grid::new();

        assert_eq!(&",".repeat(CELL_COUNT - 1), &grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 7, 2).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let reparsed = Grid::parse(&grid.to_parseable_string()).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn cell_accessors_reject_out_of_bounds() {
        let mut grid = Grid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 0));
    }

    #[test]
    fn set_cell_rejects_invalid_digit() {
        let mut grid = Grid::new();

        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 10));
        assert_eq!(None, grid.get_cell(0, 0).unwrap());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::new();
        let full = Grid::parse(SOLVED_GRID).unwrap();
        let mut partial = Grid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(3, 5, 7).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());
        assert_eq!(CELL_COUNT, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &Grid, b: &Grid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b) == a_subset_b);
        assert!(a.is_superset(b) == b_subset_a);
        assert!(b.is_subset(a) == b_subset_a);
        assert!(b.is_superset(a) == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = Grid::new();
        let full = Grid::parse(SOLVED_GRID).unwrap();
        let mut non_empty = Grid::new();
        non_empty.set_cell(0, 0, 1).unwrap();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &non_empty, true, false);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn true_subset() {
        let full = Grid::parse(SOLVED_GRID).unwrap();
        let mut partial = full;
        partial.clear_cell(2, 3).unwrap();
        partial.clear_cell(7, 7).unwrap();

        assert_subset_relation(&partial, &full, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        let full = Grid::parse(SOLVED_GRID).unwrap();
        let mut changed = full;
        changed.set_cell(0, 0, 6).unwrap();

        assert_subset_relation(&changed, &full, false, false);
    }

    #[test]
    fn grid_serde_round_trip() {
        let grid = Grid::parse(SOLVED_GRID).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(grid, deserialized);
    }

    #[test]
    fn grid_serde_rejects_wrong_length() {
        let json = serde_json::to_string(&vec![None::<u8>; 80]).unwrap();
        let result: Result<Grid, _> = serde_json::from_str(&json);

        assert!(result.is_err());
    }

    #[test]
    fn grid_serde_rejects_invalid_digit() {
        let mut cells = vec![None::<u8>; CELL_COUNT];
        cells[17] = Some(12);
        let json = serde_json::to_string(&cells).unwrap();
        let result: Result<Grid, _> = serde_json::from_str(&json);

        assert!(result.is_err());
    }

    #[test]
    fn puzzle_validates_solution_full() {
        let mut solution = Grid::parse(SOLVED_GRID).unwrap();
        solution.clear_cell(4, 4).unwrap();

        assert_eq!(Err(SudokuError::InvalidPuzzle),
            Puzzle::new(Grid::new(), solution));
    }

    #[test]
    fn puzzle_validates_solution_consistent() {
        let mut solution = Grid::parse(SOLVED_GRID).unwrap();
        solution.set_cell(0, 0, 3).unwrap();

        assert_eq!(Err(SudokuError::InvalidPuzzle),
            Puzzle::new(Grid::new(), solution));
    }

    #[test]
    fn puzzle_validates_clue_subset() {
        let solution = Grid::parse(SOLVED_GRID).unwrap();
        let mut clues = Grid::new();
        clues.set_cell(0, 0, 9).unwrap();

        assert_eq!(Err(SudokuError::InvalidPuzzle),
            Puzzle::new(clues, solution));
    }

    #[test]
    fn puzzle_accepts_valid_pair() {
        let solution = Grid::parse(SOLVED_GRID).unwrap();
        let mut clues = solution;
        clues.clear_cell(0, 0).unwrap();
        clues.clear_cell(5, 2).unwrap();

        let puzzle = Puzzle::new(clues, solution).unwrap();

        assert!(!puzzle.is_given(0, 0).unwrap());
        assert!(!puzzle.is_given(5, 2).unwrap());
        assert!(puzzle.is_given(1, 1).unwrap());
        assert_eq!(&solution, puzzle.solution());
    }
}
