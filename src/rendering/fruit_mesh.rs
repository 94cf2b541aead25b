use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::app::config::Config;
use crate::basic::Point;
use crate::error::{ErrorConversion, Result};
use crate::fruit::Fruit;

pub fn fruit_mesh(fruit: &Fruit, config: &Config, ctx: &Context) -> Result<Mesh> {
    let side = config.cell_side;
    let Point { x, y } = fruit.pos.to_point(side);

    let res: Result<Mesh> = (|| {
        let mut builder = MeshBuilder::new();
        builder.rectangle(
            DrawMode::fill(),
            Rect::new(x, y, side, side),
            config.palette.fruit_color,
        )?;
        Ok(Mesh::from_data(ctx, builder.build()))
    })();
    res.with_trace_step("fruit_mesh")
}
