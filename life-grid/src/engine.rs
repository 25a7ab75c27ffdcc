use crate::{Grid, Loc};
use arrayvec::ArrayVec;
use rayon::prelude::*;

const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The Moore neighborhood of one cell, clipped to the grid. Cells past the
/// edge do not exist; nothing wraps around.
pub struct Neighborhood<'a> {
    grid: &'a Grid,
    center: Loc,
}

impl<'a> Neighborhood<'a> {
    pub fn new(grid: &'a Grid, center: Loc) -> Self {
        Self { grid, center }
    }

    pub fn neighbor_locs(&self) -> ArrayVec<Loc, 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(delta_row, delta_col)| self.center.offset(delta_row, delta_col))
            .filter(|loc| self.grid.contains(*loc))
            .collect()
    }

    pub fn for_neighbor_cells<F>(&self, mut f: F)
    where
        F: FnMut(bool),
    {
        for loc in self.neighbor_locs() {
            if let Some(&alive) = self.grid.cell(loc) {
                f(alive);
            }
        }
    }

    pub fn num_live_neighbors(&self) -> usize {
        let mut result = 0;
        self.for_neighbor_cells(|alive| {
            if alive {
                result += 1;
            }
        });
        result
    }
}

/// B3/S23. A dead cell with two live neighbors stays dead.
pub fn next_cell_state(alive: bool, live_neighbors: usize) -> bool {
    match live_neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}

/// Next generation of `grid`. Every cell reads only the input snapshot, so
/// rows are computed independently; the input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let cols = grid.cols() as usize;
    let mut next_cells = vec![false; grid.num_cells()];
    next_cells
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, next_row)| {
            for (col, next_cell) in next_row.iter_mut().enumerate() {
                let loc = Loc::new(row as i32, col as i32);
                let neighborhood = Neighborhood::new(grid, loc);
                *next_cell = next_cell_state(grid[loc], neighborhood.num_live_neighbors());
            }
        });
    Grid::from_cells(grid.rows(), grid.cols(), next_cells)
}
