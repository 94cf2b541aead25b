use std::fmt::{self, Display, Formatter};

use crate::app::keyboard_control::Controls;
use crate::app::palette::Palette;
use crate::basic::BoardDim;

/// Everything configurable about a session, built once in `main` and passed
/// by reference to the simulation and the renderer. No global state.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Full grid, including the score row at the top
    pub grid_dim: BoardDim,
    /// Cell side length in pixels
    pub cell_side: f32,
    /// Simulation steps per second
    pub game_fps: f64,
    /// Starting length of the snake
    pub start_len: usize,

    pub controls: Controls,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_dim: BoardDim { x: 20, y: 20 },
            cell_side: 20.,
            game_fps: 5.,
            start_len: 4,

            controls: Controls::default(),
            palette: Palette::classic(),
        }
    }
}

#[derive(Debug, Error)]
pub struct ConfigError(#[error(not(source))] pub &'static str);

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}", self.0)
    }
}

impl Config {
    pub fn window_size(&self) -> (f32, f32) {
        (
            self.grid_dim.x as f32 * self.cell_side,
            self.grid_dim.y as f32 * self.cell_side,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Self { grid_dim, cell_side, game_fps, start_len, .. } = *self;

        if !(game_fps > 0.) {
            return Err(ConfigError("game_fps must be positive"));
        }
        if !(cell_side > 0.) {
            return Err(ConfigError("cell_side must be positive"));
        }
        if start_len == 0 {
            return Err(ConfigError("the snake needs at least one cell"));
        }
        if grid_dim.y < 2 {
            return Err(ConfigError("no playable rows below the score bar"));
        }
        // the snake starts at the grid center extending west
        if grid_dim.x / 2 < start_len as isize - 1 {
            return Err(ConfigError("grid too narrow for the starting snake"));
        }
        if grid_dim.x * (grid_dim.y - 1) <= start_len as isize {
            return Err(ConfigError("no room left for the fruit"));
        }

        Ok(())
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    config.validate().unwrap();
    assert_eq!(config.grid_dim, BoardDim { x: 20, y: 20 });
    assert_eq!(config.window_size(), (400., 400.));
}

#[test]
fn test_validate_rejects_bad_configs() {
    let bad = [
        Config { game_fps: 0., ..Config::default() },
        Config { cell_side: -1., ..Config::default() },
        Config { start_len: 0, ..Config::default() },
        Config { grid_dim: BoardDim { x: 20, y: 1 }, ..Config::default() },
        Config { grid_dim: BoardDim { x: 4, y: 20 }, ..Config::default() },
        Config { grid_dim: BoardDim { x: 2, y: 2 }, start_len: 2, ..Config::default() },
    ];

    for config in bad {
        assert!(config.validate().is_err(), "{config:?}");
    }
}
