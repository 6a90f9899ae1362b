//! This module contains the [Session], which owns all mutable state of one
//! game being played: the board, the per-cell pencil-mark notes, the move
//! [History](crate::history::History), and the hint counter.
//!
//! All mutating operations share the same contract. Out-of-range coordinates
//! or digits are reported as errors, while requests that are well-formed but
//! change nothing, such as writing to a given cell or erasing an already
//! empty cell, succeed with `Ok(false)` and leave no trace in the history.
//! Only operations that return `Ok(true)` journal records and can therefore
//! be undone.

use crate::{CELL_COUNT, GRID_SIZE, Grid, Puzzle, check_digit, index, rules};
use crate::error::{SudokuError, SudokuResult};
use crate::history::{DigitSet, History, HistoryRecord};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;

/// The full state of one Sudoku game in progress. A session is created from
/// a [Puzzle] whose clue cells stay read-only for the whole game; every
/// other cell can hold a digit or a set of notes, but never both at once.
///
/// Writing a digit into a cell that currently holds notes journals two
/// records, one clearing the notes and one writing the digit, so undoing
/// such a write first brings back the empty cell and then the notes.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "SessionData")]
#[serde(try_from = "SessionData")]
pub struct Session {
    puzzle: Puzzle,
    board: Grid,
    notes: [DigitSet; CELL_COUNT],
    history: History,
    hints_used: usize
}

#[derive(Clone, Serialize, Deserialize)]
struct SessionData {
    puzzle: Puzzle,
    board: Grid,
    notes: Vec<DigitSet>,
    history: History,
    hints_used: usize
}

impl From<Session> for SessionData {
    fn from(session: Session) -> SessionData {
        SessionData {
            puzzle: session.puzzle,
            board: session.board,
            notes: session.notes.to_vec(),
            history: session.history,
            hints_used: session.hints_used
        }
    }
}

impl TryFrom<SessionData> for Session {
    type Error = SudokuError;

    fn try_from(data: SessionData) -> SudokuResult<Session> {
        // Puzzle derives serde plainly, so its invariants are re-checked
        // here together with the session-level ones.
        let puzzle =
            Puzzle::new(*data.puzzle.clues(), *data.puzzle.solution())?;

        if data.notes.len() != CELL_COUNT ||
                !puzzle.clues().is_subset(&data.board) {
            return Err(SudokuError::InvalidSessionState);
        }

        let mut notes = [DigitSet::new(); CELL_COUNT];

        for (i, (&note_set, cell)) in data.notes.iter()
                .zip(data.board.cells().iter())
                .enumerate() {
            if cell.is_some() && !note_set.is_empty() {
                return Err(SudokuError::InvalidSessionState);
            }

            notes[i] = note_set;
        }

        // Replaying a record must never touch a given cell, and the hint
        // counter must agree with the applied hint records, otherwise the
        // first undo of a hint would underflow it.
        for record in data.history.records() {
            let (row, column) = record.cell();

            if puzzle.is_given(row, column)? {
                return Err(SudokuError::InvalidSessionState);
            }
        }

        let applied_hints = data.history.applied_records().iter()
            .filter(|record| matches!(record, HistoryRecord::Hint { .. }))
            .count();

        if applied_hints != data.hints_used {
            return Err(SudokuError::InvalidSessionState);
        }

        Ok(Session {
            puzzle,
            board: data.board,
            notes,
            history: data.history,
            hints_used: data.hints_used
        })
    }
}

impl Session {

    /// Creates a new session for the given puzzle. The board starts as a
    /// copy of the puzzle's clue grid, all note sets start empty, and the
    /// history starts without any records.
    pub fn new(puzzle: Puzzle) -> Session {
        let board = *puzzle.clues();

        Session {
            puzzle,
            board,
            notes: [DigitSet::new(); CELL_COUNT],
            history: History::new(),
            hints_used: 0
        }
    }

    /// Gets a reference to the puzzle this session plays.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Gets a reference to the current board, including all digits entered
    /// so far.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Gets a reference to the move history of this session.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Gets the number of hints applied so far, net of undo and redo.
    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    /// Gets the digit currently in the cell at the specified position, if
    /// any.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn value(&self, row: usize, column: usize)
            -> SudokuResult<Option<u8>> {
        self.board.get_cell(row, column)
    }

    /// Gets the note set of the cell at the specified position. A filled
    /// cell always has an empty note set.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn notes(&self, row: usize, column: usize) -> SudokuResult<DigitSet> {
        self.board.get_cell(row, column)?;
        Ok(self.notes[index(row, column)])
    }

    /// Indicates whether the cell at the specified position is a given of
    /// the puzzle and therefore read-only.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, row: usize, column: usize) -> SudokuResult<bool> {
        self.puzzle.is_given(row, column)
    }

    /// Indicates whether the digit in the cell at the specified position
    /// currently violates row, column, or box uniqueness. Empty cells never
    /// conflict. Givens can conflict too, namely when the player placed a
    /// contradicting digit elsewhere.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn has_conflict(&self, row: usize, column: usize)
            -> SudokuResult<bool> {
        self.board.get_cell(row, column)?;
        Ok(rules::has_conflict(&self.board, row, column))
    }

    /// Indicates whether the board matches the puzzle's solution in every
    /// cell, that is, the game is won.
    pub fn is_complete(&self) -> bool {
        rules::is_complete(&self.board, self.puzzle.solution())
    }

    /// Gets the coordinates of the first empty cell in left-to-right,
    /// top-to-bottom order, or `None` if the board is full.
    pub fn first_empty_cell(&self) -> Option<(usize, usize)> {
        self.board.cells().iter()
            .position(|cell| cell.is_none())
            .map(|i| (i / GRID_SIZE, i % GRID_SIZE))
    }

    fn clear_notes_with_record(&mut self, row: usize, column: usize) {
        let previous = self.notes[index(row, column)];

        if !previous.is_empty() {
            self.notes[index(row, column)].clear();
            self.history.record(HistoryRecord::Note {
                row,
                column,
                previous,
                new: DigitSet::new()
            });
        }
    }

    /// Writes the given digit into the cell at the specified position,
    /// overwriting any previous digit and clearing any notes the cell held.
    /// Returns `true` if the board changed. Writing to a given cell or
    /// writing the digit the cell already holds changes nothing, succeeds
    /// with `false`, and journals no record.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than 8.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the range
    /// `[1, 9]`.
    pub fn set_value(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        let previous = self.board.get_cell(row, column)?;
        check_digit(digit)?;

        if previous == Some(digit) || self.puzzle.is_given(row, column)? {
            return Ok(false);
        }

        self.board.set_cell(row, column, digit)?;
        self.clear_notes_with_record(row, column);
        self.history.record(HistoryRecord::Value {
            row,
            column,
            previous,
            new: Some(digit)
        });

        Ok(true)
    }

    /// Toggles the given digit in the note set of the cell at the specified
    /// position. Returns `true` if the notes changed. Notes can only be kept
    /// on empty, non-given cells; toggling on a given or filled cell changes
    /// nothing and succeeds with `false`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are greater
    /// than 8.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the range
    /// `[1, 9]`.
    pub fn toggle_note(&mut self, row: usize, column: usize, digit: u8)
            -> SudokuResult<bool> {
        let content = self.board.get_cell(row, column)?;
        check_digit(digit)?;

        if self.puzzle.is_given(row, column)? || content.is_some() {
            return Ok(false);
        }

        let previous = self.notes[index(row, column)];
        let mut new = previous;
        new.toggle(digit)?;
        self.notes[index(row, column)] = new;
        self.history.record(HistoryRecord::Note {
            row,
            column,
            previous,
            new
        });

        Ok(true)
    }

    /// Erases the cell at the specified position, clearing both its digit
    /// and its notes in a single undoable step. Returns `true` if the board
    /// changed. Erasing a given cell or a cell that is already empty and
    /// noteless changes nothing and succeeds with `false`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn erase(&mut self, row: usize, column: usize) -> SudokuResult<bool> {
        let previous_digit = self.board.get_cell(row, column)?;
        let previous_notes = self.notes[index(row, column)];

        if self.puzzle.is_given(row, column)? ||
                (previous_digit.is_none() && previous_notes.is_empty()) {
            return Ok(false);
        }

        self.board.clear_cell(row, column)?;
        self.notes[index(row, column)].clear();
        self.history.record(HistoryRecord::Erase {
            row,
            column,
            previous_digit,
            previous_notes
        });

        Ok(true)
    }

    /// Reveals the solution digit in the cell at the specified position,
    /// overwriting any wrong digit and clearing any notes, and counts one
    /// hint. Returns `true` if the board changed. Hinting a given cell or a
    /// cell that already holds its solution digit changes nothing, consumes
    /// no hint, and succeeds with `false`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are greater than 8. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn apply_hint(&mut self, row: usize, column: usize)
            -> SudokuResult<bool> {
        let previous = self.board.get_cell(row, column)?;
        // Solution grids are full, so the cell is guaranteed to hold a digit.
        let digit = match self.puzzle.solution().get_cell(row, column)? {
            Some(digit) => digit,
            None => return Ok(false)
        };

        if self.puzzle.is_given(row, column)? || previous == Some(digit) {
            return Ok(false);
        }

        self.board.set_cell(row, column, digit)?;
        self.clear_notes_with_record(row, column);
        self.history.record(HistoryRecord::Hint {
            row,
            column,
            previous,
            digit
        });
        self.hints_used += 1;

        Ok(true)
    }

    fn apply_backward(&mut self, record: HistoryRecord) {
        match record {
            HistoryRecord::Value { row, column, previous, .. } =>
                self.write_cell(row, column, previous),
            HistoryRecord::Note { row, column, previous, .. } =>
                self.notes[index(row, column)] = previous,
            HistoryRecord::Erase
                    { row, column, previous_digit, previous_notes } => {
                self.write_cell(row, column, previous_digit);
                self.notes[index(row, column)] = previous_notes;
            },
            HistoryRecord::Hint { row, column, previous, .. } => {
                self.write_cell(row, column, previous);
                self.hints_used -= 1;
            }
        }
    }

    fn apply_forward(&mut self, record: HistoryRecord) {
        match record {
            HistoryRecord::Value { row, column, new, .. } =>
                self.write_cell(row, column, new),
            HistoryRecord::Note { row, column, new, .. } =>
                self.notes[index(row, column)] = new,
            HistoryRecord::Erase { row, column, .. } => {
                self.write_cell(row, column, None);
                self.notes[index(row, column)].clear();
            },
            HistoryRecord::Hint { row, column, digit, .. } => {
                self.write_cell(row, column, Some(digit));
                self.hints_used += 1;
            }
        }
    }

    fn write_cell(&mut self, row: usize, column: usize, content: Option<u8>) {
        // Record coordinates and digits were validated when recorded.
        match content {
            Some(digit) => self.board.set_cell(row, column, digit).unwrap(),
            None => self.board.clear_cell(row, column).unwrap()
        }
    }

    /// Reverts the newest applied record. Returns `true` if a record was
    /// undone and `false` if the history was already at its beginning.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(record) => {
                self.apply_backward(record);
                true
            },
            None => false
        }
    }

    /// Reapplies the oldest undone record. Returns `true` if a record was
    /// redone and `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(record) => {
                self.apply_forward(record);
                true
            },
            None => false
        }
    }

    /// Indicates whether there is at least one record to undo.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Indicates whether there is at least one record to redo.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}
