#![deny(clippy::all)]
#![forbid(unsafe_code)]

use life_grid::{LifeConfig, Loc, OutOfBoundsError, Random, Session, patterns};
use log::{error, info, warn};
use pixels_main_support::animate;
use std::env;
use std::process::ExitCode;

const ROWS: u32 = 15;
const COLS: u32 = 15;
const TICK_MILLIS: u64 = 700;
const CELL_PIXEL_WIDTH: u32 = 32;
const RANDOM_LIFE_ODDS: f64 = 0.3;
const PATTERN_VAR: &str = "LIFE_PATTERN";

fn main() -> ExitCode {
    env_logger::init();
    let config = LifeConfig::default()
        .with_size(ROWS, COLS)
        .with_tick_millis(TICK_MILLIS)
        .with_cell_pixel_width(CELL_PIXEL_WIDTH);

    let session = match build_session(&config) {
        Ok(session) => session,
        Err(err) => {
            error!("Could not seed the board: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match animate(config, session) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn build_session(config: &LifeConfig) -> Result<Session, OutOfBoundsError> {
    let seed = initial_alive(config, env::var(PATTERN_VAR).ok().as_deref());
    Session::new(config, seed)
}

/// The board starts empty unless `pattern` names a known pattern or "random".
fn initial_alive(config: &LifeConfig, pattern: Option<&str>) -> Vec<Loc> {
    let Some(name) = pattern.map(str::trim).filter(|name| !name.is_empty()) else {
        return vec![];
    };
    if name.eq_ignore_ascii_case("random") {
        info!("Seeding random life");
        return Random::new().random_locs(config.rows, config.cols, RANDOM_LIFE_ODDS);
    }
    match patterns::find(name) {
        Some(pattern) => {
            info!("Seeding {}", pattern.name);
            pattern.centered(config.rows, config.cols).collect()
        }
        None => {
            warn!("Unknown {} {:?}, starting empty", PATTERN_VAR, name);
            vec![]
        }
    }
}
