use std::time::Duration;

const DEFAULT_ROWS: u32 = 15;
const DEFAULT_COLS: u32 = 15;
const DEFAULT_TICK_MILLIS: u64 = 700;
const DEFAULT_CELL_PIXEL_WIDTH: u32 = 24;

/// Shortest accepted gap between generations.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Board size and pacing. Fixed for the life of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub rows: u32,
    pub cols: u32,
    /// Time between generations while running.
    pub tick_interval: Duration,
    /// Only used for drawing.
    pub cell_pixel_width: u32,
}

impl LifeConfig {
    pub fn with_size(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Intervals below [`MIN_TICK_INTERVAL`] are raised to it.
    pub fn with_tick_millis(mut self, millis: u64) -> Self {
        self.tick_interval = Duration::from_millis(millis).max(MIN_TICK_INTERVAL);
        self
    }

    pub fn with_cell_pixel_width(mut self, cell_pixel_width: u32) -> Self {
        self.cell_pixel_width = cell_pixel_width;
        self
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MILLIS),
            cell_pixel_width: DEFAULT_CELL_PIXEL_WIDTH,
        }
    }
}
