use crate::{OutOfBoundsError, SelectionSet};
use log::debug;
use std::fmt;
use std::ops::Index;

/// Board of ALIVE/DEAD cells with dimensions fixed at creation.
/// Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// All-DEAD grid.
    pub fn new(rows: u32, cols: u32) -> Result<Self, OutOfBoundsError> {
        OutOfBoundsError::check_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        })
    }

    /// All-DEAD grid with each of `initial_alive` set ALIVE. Fails without
    /// building anything if a dimension or any location is out of range.
    pub fn create<I>(rows: u32, cols: u32, initial_alive: I) -> Result<Self, OutOfBoundsError>
    where
        I: IntoIterator<Item = Loc>,
    {
        let mut result = Self::new(rows, cols)?;
        for loc in initial_alive {
            let index = result.checked_index(loc)?;
            result.cells[index] = true;
        }
        debug!(
            "Created {}x{} grid with {} live cells",
            rows,
            cols,
            result.population()
        );
        Ok(result)
    }

    /// All-DEAD grid of the same size.
    pub fn cleared(&self) -> Self {
        Self::from_cells(self.rows, self.cols, vec![false; self.cells.len()])
    }

    pub(crate) fn from_cells(rows: u32, cols: u32, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows as usize * cols as usize);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &bool> + Clone {
        self.cells.iter()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Loc> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(index, _)| self.loc_of(index))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.grid_index(self.rows, self.cols).is_some()
    }

    pub fn is_alive(&self, loc: Loc) -> Result<bool, OutOfBoundsError> {
        self.checked_index(loc).map(|index| self.cells[index])
    }

    pub(crate) fn cell(&self, loc: Loc) -> Option<&bool> {
        loc.grid_index(self.rows, self.cols)
            .map(|index| &self.cells[index])
    }

    /// Copy of this grid with the cell at `loc` flipped.
    pub fn toggle(&self, loc: Loc) -> Result<Self, OutOfBoundsError> {
        let mut result = self.clone();
        result.toggle_in_place(loc)?;
        Ok(result)
    }

    /// Flips the cell at `loc`. On error the grid is left as it was.
    pub fn toggle_in_place(&mut self, loc: Loc) -> Result<(), OutOfBoundsError> {
        let index = self.checked_index(loc)?;
        self.cells[index] = !self.cells[index];
        Ok(())
    }

    fn checked_index(&self, loc: Loc) -> Result<usize, OutOfBoundsError> {
        loc.grid_index(self.rows, self.cols)
            .ok_or(OutOfBoundsError::Cell {
                loc,
                rows: self.rows,
                cols: self.cols,
            })
    }

    fn loc_of(&self, index: usize) -> Loc {
        let cols = self.cols as usize;
        Loc::new((index / cols) as i32, (index % cols) as i32)
    }
}

impl Index<Loc> for Grid {
    type Output = bool;

    fn index(&self, loc: Loc) -> &Self::Output {
        self.cell(loc)
            .unwrap_or_else(|| panic!("Index indices {}, {} out of bounds", loc.row, loc.col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols as usize) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fresh all-DEAD grid and empty selection.
pub fn reset(rows: u32, cols: u32) -> Result<(Grid, SelectionSet), OutOfBoundsError> {
    Ok((Grid::new(rows, cols)?, SelectionSet::new()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, delta_row: i32, delta_col: i32) -> Self {
        Self::new(
            self.row.saturating_add(delta_row),
            self.col.saturating_add(delta_col),
        )
    }

    pub fn grid_index(&self, rows: u32, cols: u32) -> Option<usize> {
        let row = u32::try_from(self.row).ok()?;
        let col = u32::try_from(self.col).ok()?;
        if row < rows && col < cols {
            Some(row as usize * cols as usize + col as usize)
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
