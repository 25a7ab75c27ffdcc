use crate::Loc;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBoundsError {
    #[error("Cell {loc} is outside the {rows}x{cols} grid")]
    Cell { loc: Loc, rows: u32, cols: u32 },
    #[error("Grid dimensions {rows}x{cols} must each be in 1..={max}", max = i32::MAX)]
    Dimensions { rows: u32, cols: u32 },
}

impl OutOfBoundsError {
    pub(crate) fn check_dimensions(rows: u32, cols: u32) -> Result<(), Self> {
        let max = i32::MAX as u32;
        if (1..=max).contains(&rows) && (1..=max).contains(&cols) {
            Ok(())
        } else {
            Err(Self::Dimensions { rows, cols })
        }
    }
}
