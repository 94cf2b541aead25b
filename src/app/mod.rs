use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::KeyInput;
use ggez::Context;
use log::info;

use crate::app::config::Config;
use crate::app::control::Control;
use crate::app::keyboard_control::Steering;
use crate::basic::Point;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::{GameState, State};
use crate::rendering;

pub mod config;
mod control;
pub mod keyboard_control;
mod palette;

pub struct App {
    config: Config,
    control: Control,
    game: GameState,
    steering: Steering,

    // never change during a session, built on the first frame
    grid_mesh: Option<Mesh>,
    score_bar_mesh: Option<Mesh>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let res: Result<_> = (|| {
            config.validate()?;
            Ok(Self {
                config,
                control: Control::new(config.game_fps),
                game: GameState::new(&config),
                steering: Steering::default(),
                grid_mesh: None,
                score_bar_mesh: None,
            })
        })();
        res.with_trace_step("App::new")
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        while self.control.can_update() {
            match self.game.step(self.steering.take()) {
                State::Running => {}
                State::Crashed(collision) => {
                    info!(
                        "game over, the snake crashed into {:?} (score {}, length {})",
                        collision,
                        self.game.score(),
                        self.game.snake.cells.len(),
                    );
                    ctx.request_quit();
                    break;
                }
                State::Won => {
                    info!(
                        "game over, the snake filled the whole board (score {}, length {})",
                        self.game.score(),
                        self.game.snake.cells.len(),
                    );
                    ctx.request_quit();
                    break;
                }
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, self.config.palette.background_color);

        if self.score_bar_mesh.is_none() {
            self.score_bar_mesh = Some(rendering::score_bar_mesh(&self.config, ctx)?);
        }
        if self.grid_mesh.is_none() {
            self.grid_mesh = Some(rendering::grid_mesh(&self.config, ctx)?);
        }

        canvas.draw(self.score_bar_mesh.as_ref().unwrap(), DrawParam::default());

        let snake_mesh = rendering::snake_mesh(&self.game.snake, &self.config, ctx)?;
        canvas.draw(&snake_mesh, DrawParam::default());

        let fruit_mesh = rendering::fruit_mesh(&self.game.fruit, &self.config, ctx)?;
        canvas.draw(&fruit_mesh, DrawParam::default());

        let score_text = rendering::score_text(self.game.score(), &self.config);
        canvas.draw(
            &score_text,
            DrawParam::default()
                .dest(Point { x: 0., y: 0. })
                .color(self.config.palette.score_text_color),
        );

        // drawn last so the snake and fruit read as separate cells
        canvas.draw(self.grid_mesh.as_ref().unwrap(), DrawParam::default());

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        // held-key repeats don't steer
        if repeated {
            return Ok(());
        }
        if let Some(dir) = input.keycode.and_then(|key| self.config.controls.dir_of(key)) {
            self.steering.record(self.game.snake.dir, dir);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        // reached on window close as well as on request_quit after a
        // terminal state, the one exit point of a session
        println!("Your score was {}", self.game.score());
        Ok(false)
    }
}
