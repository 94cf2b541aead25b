use ggez::graphics::{DrawMode, Mesh, MeshBuilder, PxScale, Rect, Text};
use ggez::Context;

use crate::app::config::Config;
use crate::error::{ErrorConversion, Result};

/// Filled bar covering the reserved top row
pub fn score_bar_mesh(config: &Config, ctx: &Context) -> Result<Mesh> {
    let (width, _) = config.window_size();
    let rect = Rect::new(0., 0., width, config.cell_side);

    let res: Result<Mesh> = (|| {
        let mut builder = MeshBuilder::new();
        builder.rectangle(DrawMode::fill(), rect, config.palette.score_bar_color)?;
        Ok(Mesh::from_data(ctx, builder.build()))
    })();
    res.with_trace_step("score_bar_mesh")
}

/// `Score: {score}`, one cell tall, drawn at the window origin onto the bar
pub fn score_text(score: u32, config: &Config) -> Text {
    let mut text = Text::new(format!("Score: {score}"));
    text.set_scale(PxScale::from(config.cell_side));
    text
}

#[test]
fn test_score_text_contents() {
    let text = score_text(7, &Config::default());
    assert_eq!(text.fragments()[0].text, "Score: 7");
}
