//! This module contains the logic for solving Sudoku and for counting
//! solutions, which is how puzzle uniqueness is certified.
//!
//! Both jobs are done by the same backtracking search in
//! [BacktrackingSolver], which walks the cells in fixed row-major order and
//! tries the digits 1 to 9 ascending in every empty cell. The two entry
//! points differ only in their stop condition: [BacktrackingSolver::solve]
//! stops at the first completion, [BacktrackingSolver::count] keeps
//! searching until a second completion is proven and never further. The
//! [generator](crate::generator) reuses the same search shape with a
//! randomized digit order to synthesize full grids.

use crate::{CELL_COUNT, Grid, GRID_SIZE, rules};

/// An enumeration of the different ways a grid can be solvable, as reported
/// by [BacktrackingSolver::count]. Since uniqueness testing never needs to
/// distinguish "two solutions" from "many solutions", counting stops the
/// moment a second completion is found and everything beyond one solution
/// collapses into [Solution::Ambiguous].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid is not solvable at all.
    Impossible,

    /// Indicates that the grid has a unique solution, which is wrapped in
    /// this instance.
    Unique(Grid),

    /// Indicates that the grid has at least two solutions.
    Ambiguous
}

impl Solution {

    /// Computes the union of two solutions. This is defined as follows:
    ///
    /// * If one solution is `Solution::Impossible`, the other one is
    /// returned.
    /// * If one solution is `Solution::Ambiguous`, then the result is also
    /// ambiguous.
    /// * If both solutions are `Solution::Unique` with solution grids `g1`
    /// and `g2`, then the result is `Solution::Unique(g1)` if `g1 == g2` and
    /// `Solution::Ambiguous` otherwise.
    pub fn union(self, other: Solution) -> Solution {
        match self {
            Solution::Impossible => other,
            Solution::Unique(g) =>
                match other {
                    Solution::Impossible => Solution::Unique(g),
                    Solution::Unique(other_g) =>
                        if g == other_g {
                            Solution::Unique(g)
                        }
                        else {
                            Solution::Ambiguous
                        }
                    Solution::Ambiguous => Solution::Ambiguous
                }
            Solution::Ambiguous => Solution::Ambiguous
        }
    }
}

/// A solver which fills the empty cells of a grid by recursively testing all
/// valid digits for each cell in row-major order. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits, although constraint pruning makes ordinary 9x9
/// puzzles a matter of well below a millisecond.
/// * It is perfect: it finds a solution whenever one exists, and its
/// counting mode correctly classifies any grid as impossible, unique, or
/// ambiguous.
///
/// The search is pure, synchronous, CPU-bound recursion with a maximum depth
/// of 81. Input grids are never mutated; the search operates on an internal
/// copy.
pub struct BacktrackingSolver;

impl BacktrackingSolver {

    /// Solves the given grid, that is, returns a full grid that contains all
    /// digits of the input and satisfies the Sudoku rules. If the input
    /// admits multiple completions, the one found first in ascending digit
    /// order is returned. If the input has no completion, or its filled
    /// cells already violate the rules, `None` is returned. Both are
    /// legitimate outcomes, not errors.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        if !rules::is_consistent(grid) {
            return None;
        }

        let mut work = *grid;

        if solve_rec(&mut work, 0) {
            Some(work)
        }
        else {
            None
        }
    }

    /// Determines whether the given grid has no completion, exactly one, or
    /// more than one, stopping the search as soon as a second completion is
    /// proven. This is the uniqueness certificate used by the
    /// [generator](crate::generator): a puzzle is acceptable exactly if this
    /// returns [Solution::Unique].
    pub fn count(&self, grid: &Grid) -> Solution {
        if !rules::is_consistent(grid) {
            return Solution::Impossible;
        }

        let mut work = *grid;
        count_rec(&mut work, 0)
    }
}

fn solve_rec(grid: &mut Grid, cell: usize) -> bool {
    if cell == CELL_COUNT {
        return true;
    }

    let row = cell / GRID_SIZE;
    let column = cell % GRID_SIZE;

    if grid.cells()[cell].is_some() {
        return solve_rec(grid, cell + 1);
    }

    for digit in 1..=9 {
        if rules::is_valid_placement(grid, row, column, digit) {
            grid.set_cell(row, column, digit).unwrap();

            if solve_rec(grid, cell + 1) {
                return true;
            }

            grid.clear_cell(row, column).unwrap();
        }
    }

    false
}

fn count_rec(grid: &mut Grid, cell: usize) -> Solution {
    if cell == CELL_COUNT {
        return Solution::Unique(*grid);
    }

    let row = cell / GRID_SIZE;
    let column = cell % GRID_SIZE;

    if grid.cells()[cell].is_some() {
        return count_rec(grid, cell + 1);
    }

    let mut solution = Solution::Impossible;

    for digit in 1..=9 {
        if rules::is_valid_placement(grid, row, column, digit) {
            grid.set_cell(row, column, digit).unwrap();
            let next_solution = count_rec(grid, cell + 1);
            grid.clear_cell(row, column).unwrap();
            solution = solution.union(next_solution);

            if solution == Solution::Ambiguous {
                break;
            }
        }
    }

    solution
}
