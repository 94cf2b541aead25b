use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::config::Config;
use crate::basic::Point;
use crate::error::{ErrorConversion, Result};
use crate::snake::Snake;

/// One filled square per body cell
pub fn snake_mesh(snake: &Snake, config: &Config, ctx: &Context) -> Result<Mesh> {
    let side = config.cell_side;
    let color = config.palette.snake_color;

    let res: Result<Mesh> = (|| {
        let mut builder = MeshBuilder::new();
        for &cell in &snake.cells {
            let Point { x, y } = cell.to_point(side);
            builder.rectangle(DrawMode::fill(), Rect::new(x, y, side, side), color)?;
        }
        Ok(Mesh::from_data(ctx, builder.build()))
    })();
    res.with_trace_step("snake_mesh")
}
