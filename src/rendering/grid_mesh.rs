use ggez::graphics::{Mesh, MeshBuilder};
use ggez::Context;

use crate::app::config::Config;
use crate::basic::Point;
use crate::error::{ErrorConversion, Result};

/// Thin lines over the playable area, drawn on top of everything else so the
/// snake and fruit read as separate cells
pub fn grid_mesh(config: &Config, ctx: &Context) -> Result<Mesh> {
    let side = config.cell_side;
    let (width, height) = config.window_size();
    let thickness = config.palette.line_thickness;
    let color = config.palette.grid_color;

    let res: Result<Mesh> = (|| {
        let mut builder = MeshBuilder::new();

        // vertical lines stop at the score bar, horizontal lines skip it
        for x in 0..config.grid_dim.x {
            let px = x as f32 * side;
            builder.line(
                &[Point { x: px, y: side }, Point { x: px, y: height }],
                thickness,
                color,
            )?;
        }
        for y in 1..config.grid_dim.y {
            let py = y as f32 * side;
            builder.line(
                &[Point { x: 0., y: py }, Point { x: width, y: py }],
                thickness,
                color,
            )?;
        }

        Ok(Mesh::from_data(ctx, builder.build()))
    })();
    res.with_trace_step("grid_mesh")
}
