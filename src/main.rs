#[macro_use]
extern crate derive_more;

use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use log::info;

use crate::app::config::Config;
use crate::app::App;
use crate::error::Result;

mod app;
mod basic;
mod error;
mod fruit;
mod game;
mod rendering;
mod snake;

fn main() -> Result {
    env_logger::init();

    let config = Config::default();
    let (width, height) = config.window_size();

    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "author")
        .window_setup(WindowSetup::default().title("Snake").vsync(true))
        .window_mode(WindowMode::default().dimensions(width, height))
        .build()?;

    let app = App::new(config)?;

    info!(
        "{}x{} board ({}x{} window), {} ticks/s",
        config.grid_dim.x, config.grid_dim.y, width, height, config.game_fps,
    );

    event::run(ctx, event_loop, app)
}
