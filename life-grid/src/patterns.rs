//! A few well-known seed patterns, as offsets from their top-left corner.

use crate::Loc;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Pattern cells shifted so the pattern's top-left corner lands on `origin`.
    pub fn placed_at(&self, origin: Loc) -> impl Iterator<Item = Loc> + '_ {
        self.cells
            .iter()
            .map(move |&(row, col)| origin.offset(row, col))
    }

    pub fn height(&self) -> i32 {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> i32 {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Pattern placed in the middle of a `rows` x `cols` board.
    pub fn centered(&self, rows: u32, cols: u32) -> impl Iterator<Item = Loc> + '_ {
        let origin = Loc::new(
            (rows as i32 - self.height()) / 2,
            (cols as i32 - self.width()) / 2,
        );
        self.placed_at(origin)
    }
}

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[BLINKER, BLOCK, GLIDER, TOAD];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}
