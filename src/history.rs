//! This module contains the move ledger of a play [Session] and the compact
//! note set stored per cell.
//!
//! Every board mutation a session performs is journaled as one
//! [HistoryRecord] holding both the previous and the new state of the
//! touched cell, which makes each record invertible and replayable on its
//! own. The [History] keeps the records in a single linear timeline with a
//! cursor; recording while undone records exist discards the undone tail, so
//! there is no branching.
//!
//! [Session]: crate::session::Session

use crate::{GRID_SIZE, check_digit};
use crate::error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::iter::FromIterator;

const DIGIT_MASK: u16 = 0b11_1111_1110;

/// A set of pencil-mark digits from 1 to 9, stored as a bitmask. Digit sets
/// are plain values: copying one snapshots it, which is what makes them
/// suitable as the before/after state inside a [HistoryRecord].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "u16")]
#[serde(try_from = "u16")]
pub struct DigitSet {
    bits: u16
}

impl From<DigitSet> for u16 {
    fn from(set: DigitSet) -> u16 {
        set.bits
    }
}

impl TryFrom<u16> for DigitSet {
    type Error = SudokuError;

    fn try_from(bits: u16) -> SudokuResult<DigitSet> {
        if bits & !DIGIT_MASK != 0 {
            return Err(SudokuError::InvalidDigit);
        }

        Ok(DigitSet {
            bits
        })
    }
}

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Indicates whether the given digit is contained in this set. Digits
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: u8) -> bool {
        digit >= 1 && digit <= 9 && self.bits & (1 << digit) != 0
    }

    /// Inserts the given digit into this set. Returns `true` if the set
    /// changed, that is, the digit was not present before.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDigit` if `digit` is not in the range `[1, 9]`.
    pub fn insert(&mut self, digit: u8) -> SudokuResult<bool> {
        check_digit(digit)?;
        let old_bits = self.bits;
        self.bits |= 1 << digit;
        Ok(self.bits != old_bits)
    }

    /// Removes the given digit from this set. Returns `true` if the set
    /// changed, that is, the digit was present before.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDigit` if `digit` is not in the range `[1, 9]`.
    pub fn remove(&mut self, digit: u8) -> SudokuResult<bool> {
        check_digit(digit)?;
        let old_bits = self.bits;
        self.bits &= !(1 << digit);
        Ok(self.bits != old_bits)
    }

    /// Toggles the given digit, that is, removes it if it is present and
    /// inserts it otherwise.
    ///
    /// # Errors
    ///
    /// `SudokuError::InvalidDigit` if `digit` is not in the range `[1, 9]`.
    pub fn toggle(&mut self, digit: u8) -> SudokuResult<()> {
        check_digit(digit)?;
        self.bits ^= 1 << digit;
        Ok(())
    }

    /// Removes all digits from this set.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Gets the number of digits in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns an iterator over the digits in this set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        let bits = self.bits;
        (1u8..=9).filter(move |digit| bits & (1 << digit) != 0)
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> DigitSet {
        let mut set = DigitSet::new();

        for digit in iter {
            set.bits |= 1 << digit;
        }

        set
    }
}

/// One journaled board mutation. Each variant stores the coordinates of the
/// touched cell together with the state before and after the mutation, so a
/// record can be applied backward (undo) as well as forward (redo) without
/// consulting anything but the record itself.
///
/// Records are emitted by the mutating operations of a
/// [Session](crate::session::Session); see there for which operation
/// produces which variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum HistoryRecord {

    /// A digit was written to a cell, replacing the previous digit or empty
    /// state.
    Value {

        /// The row of the changed cell.
        row: usize,

        /// The column of the changed cell.
        column: usize,

        /// The digit the cell held before the change, if any.
        previous: Option<u8>,

        /// The digit the cell holds after the change, if any.
        new: Option<u8>
    },

    /// The note set of a cell was changed.
    Note {

        /// The row of the changed cell.
        row: usize,

        /// The column of the changed cell.
        column: usize,

        /// The note set of the cell before the change.
        previous: DigitSet,

        /// The note set of the cell after the change.
        new: DigitSet
    },

    /// A cell was erased, clearing both its digit and its notes.
    Erase {

        /// The row of the erased cell.
        row: usize,

        /// The column of the erased cell.
        column: usize,

        /// The digit the cell held before the erasure, if any.
        previous_digit: Option<u8>,

        /// The note set of the cell before the erasure.
        previous_notes: DigitSet
    },

    /// The solution digit was revealed in a cell by a hint.
    Hint {

        /// The row of the revealed cell.
        row: usize,

        /// The column of the revealed cell.
        column: usize,

        /// The digit the cell held before the hint, if any.
        previous: Option<u8>,

        /// The revealed solution digit.
        digit: u8
    }
}

impl HistoryRecord {

    /// Gets the coordinates `(row, column)` of the cell this record touches.
    pub fn cell(&self) -> (usize, usize) {
        match *self {
            HistoryRecord::Value { row, column, .. } => (row, column),
            HistoryRecord::Note { row, column, .. } => (row, column),
            HistoryRecord::Erase { row, column, .. } => (row, column),
            HistoryRecord::Hint { row, column, .. } => (row, column)
        }
    }

    /// Checks that coordinates and digits of this record lie in range, which
    /// deserialized records cannot be trusted to do.
    fn check(&self) -> SudokuResult<()> {
        match *self {
            HistoryRecord::Value { previous, new, .. } =>
                check_optional_digits(&[previous, new])?,
            HistoryRecord::Note { .. } => { },
            HistoryRecord::Erase { previous_digit, .. } =>
                check_optional_digits(&[previous_digit])?,
            HistoryRecord::Hint { previous, digit, .. } =>
                check_optional_digits(&[previous, Some(digit)])?
        }

        let (row, column) = self.cell();

        if row >= GRID_SIZE || column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        Ok(())
    }
}

fn check_optional_digits(digits: &[Option<u8>]) -> SudokuResult<()> {
    for &digit in digits {
        if let Some(digit) = digit {
            check_digit(digit)?;
        }
    }

    Ok(())
}

/// A linear undo/redo ledger of [HistoryRecord]s.
///
/// The cursor counts the records that are currently applied to the board:
/// everything before it can be undone, everything from the cursor on can be
/// redone. [History::record] truncates the redoable tail first, so the
/// timeline never branches and redo after a fresh record is a no-op.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "HistoryData")]
#[serde(try_from = "HistoryData")]
pub struct History {
    records: Vec<HistoryRecord>,
    cursor: usize
}

#[derive(Clone, Serialize, Deserialize)]
struct HistoryData {
    records: Vec<HistoryRecord>,
    cursor: usize
}

impl From<History> for HistoryData {
    fn from(history: History) -> HistoryData {
        HistoryData {
            records: history.records,
            cursor: history.cursor
        }
    }
}

impl TryFrom<HistoryData> for History {
    type Error = SudokuError;

    fn try_from(data: HistoryData) -> SudokuResult<History> {
        if data.cursor > data.records.len() {
            return Err(SudokuError::InvalidHistoryCursor);
        }

        for record in &data.records {
            record.check()?;
        }

        Ok(History {
            records: data.records,
            cursor: data.cursor
        })
    }
}

impl History {

    /// Creates a new, empty history.
    pub fn new() -> History {
        History {
            records: Vec::new(),
            cursor: 0
        }
    }

    /// Appends the given record as the newest applied record. Any records
    /// that were undone but not redone are discarded.
    pub fn record(&mut self, record: HistoryRecord) {
        self.records.truncate(self.cursor);
        self.records.push(record);
        self.cursor += 1;
    }

    /// Steps the cursor back over the newest applied record and returns a
    /// copy of it, or `None` if there is nothing to undo. The caller is
    /// responsible for applying the record backward to the board.
    pub fn undo(&mut self) -> Option<HistoryRecord> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        Some(self.records[self.cursor])
    }

    /// Steps the cursor forward over the oldest undone record and returns a
    /// copy of it, or `None` if there is nothing to redo. The caller is
    /// responsible for applying the record forward to the board.
    pub fn redo(&mut self) -> Option<HistoryRecord> {
        if self.cursor == self.records.len() {
            return None;
        }

        let record = self.records[self.cursor];
        self.cursor += 1;
        Some(record)
    }

    /// Gets all stored records, oldest first, applied or not.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Gets the records that are currently applied to the board, oldest
    /// first. These are exactly the records [History::undo] will hand back,
    /// newest first.
    pub fn applied_records(&self) -> &[HistoryRecord] {
        &self.records[..self.cursor]
    }

    /// Indicates whether there is at least one record to undo.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Indicates whether there is at least one record to redo.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.records.len()
    }

    /// Gets the number of records currently stored, applied or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Indicates whether this history stores no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards all records and resets the cursor.
    pub fn clear(&mut self) {
        self.records.clear();
        self.cursor = 0;
    }
}
