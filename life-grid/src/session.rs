use crate::{Grid, LifeConfig, Loc, OutOfBoundsError, SelectionSet, step};
use log::{debug, info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationState {
    #[default]
    Stopped,
    Running,
}

impl SimulationState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Running,
            Self::Running => Self::Stopped,
        }
    }

    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

/// Everything a host keeps between frames: the board, the user's selection
/// marks, and whether ticks should advance the board.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    selection: SelectionSet,
    state: SimulationState,
    generation: u64,
}

impl Session {
    pub fn new<I>(config: &LifeConfig, initial_alive: I) -> Result<Self, OutOfBoundsError>
    where
        I: IntoIterator<Item = Loc>,
    {
        Ok(Self {
            grid: Grid::create(config.rows, config.cols, initial_alive)?,
            selection: SelectionSet::new(),
            state: SimulationState::Stopped,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_selected(&self, loc: Loc) -> bool {
        self.selection.contains(loc)
    }

    /// Flips the cell and its selection mark together. Nothing changes if
    /// `loc` is off the board.
    pub fn click(&mut self, loc: Loc) -> Result<(), OutOfBoundsError> {
        if let Err(err) = self.grid.toggle_in_place(loc) {
            warn!("Ignoring click: {}", err);
            return Err(err);
        }
        let selected = self.selection.toggle_in_place(loc);
        debug!(
            "Toggled {} to {}, selected: {}",
            loc,
            if self.grid[loc] { "alive" } else { "dead" },
            selected
        );
        Ok(())
    }

    pub fn toggle_start(&mut self) -> SimulationState {
        self.state = self.state.toggled();
        info!("Simulation {:?} at generation {}", self.state, self.generation);
        self.state
    }

    /// Empty board, no selection, stopped.
    pub fn reset(&mut self) {
        self.grid = self.grid.cleared();
        self.selection = SelectionSet::new();
        self.state = SimulationState::Stopped;
        self.generation = 0;
        info!("Reset {}x{} board", self.grid.rows(), self.grid.cols());
    }

    /// Advances one generation if running. Returns whether the board changed
    /// generation.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.grid = step(&self.grid);
        self.generation += 1;
        debug!(
            "Generation {}: population {}",
            self.generation,
            self.grid.population()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(rows: u32, cols: u32, pairs: &[(i32, i32)]) -> Session {
        let config = LifeConfig::default().with_size(rows, cols);
        Session::new(&config, pairs.iter().copied().map(Loc::from)).unwrap()
    }

    #[test]
    fn starts_stopped_at_generation_zero() {
        let session = session(15, 15, &[]);
        assert_eq!(session.state(), SimulationState::Stopped);
        assert_eq!(session.generation(), 0);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn new_rejects_seed_off_board() {
        let config = LifeConfig::default().with_size(3, 3);
        assert!(Session::new(&config, [Loc::new(3, 3)]).is_err());
    }

    #[test]
    fn toggle_start_flips_state() {
        let mut session = session(5, 5, &[]);
        assert_eq!(session.toggle_start(), SimulationState::Running);
        assert_eq!(session.toggle_start(), SimulationState::Stopped);
    }

    #[test]
    fn tick_is_ignored_while_stopped() {
        let mut session = session(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = session.grid().clone();
        assert!(!session.tick());
        assert_eq!(session.grid(), &before);
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn tick_advances_while_running() {
        let mut session = session(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        session.toggle_start();
        assert!(session.tick());
        assert_eq!(session.generation(), 1);
        assert_eq!(
            session.grid().live_cells().collect::<Vec<_>>(),
            vec![Loc::new(1, 2), Loc::new(2, 2), Loc::new(3, 2)]
        );
    }

    #[test]
    fn click_toggles_cell_and_selection() {
        let mut session = session(5, 5, &[]);
        session.click(Loc::new(1, 1)).unwrap();
        assert!(session.grid()[Loc::new(1, 1)]);
        assert!(session.is_selected(Loc::new(1, 1)));

        session.click(Loc::new(1, 1)).unwrap();
        assert!(!session.grid()[Loc::new(1, 1)]);
        assert!(!session.is_selected(Loc::new(1, 1)));
    }

    #[test]
    fn click_off_board_changes_nothing() {
        let mut session = session(15, 15, &[(0, 0)]);
        let before = session.grid().clone();
        assert!(session.click(Loc::new(15, 0)).is_err());
        assert!(session.click(Loc::new(-1, 5)).is_err());
        assert_eq!(session.grid(), &before);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn reset_while_running_stops() {
        let mut session = session(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        session.click(Loc::new(0, 0)).unwrap();
        session.toggle_start();
        session.tick();

        session.reset();
        assert_eq!(session.state(), SimulationState::Stopped);
        assert_eq!(session.grid().population(), 0);
        assert!(session.selection().is_empty());
        assert_eq!(session.generation(), 0);
        assert_eq!((session.grid().rows(), session.grid().cols()), (5, 5));
    }

    #[test]
    fn reset_while_stopped_stays_stopped() {
        let mut session = session(5, 5, &[]);
        session.reset();
        assert_eq!(session.state(), SimulationState::Stopped);
    }
}
