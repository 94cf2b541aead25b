use ggez::graphics::Color;

/// Colors for everything the game draws.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub line_thickness: f32,

    pub background_color: Color,
    pub snake_color: Color,
    pub fruit_color: Color,
    pub score_bar_color: Color,
    pub score_text_color: Color,
    pub grid_color: Color,
}

impl Palette {
    /// White snake on black, red fruit, white score bar with black text
    pub fn classic() -> Self {
        Self {
            line_thickness: 1.,

            background_color: Color::BLACK,
            snake_color: Color::WHITE,
            fruit_color: Color::from_rgb(255, 0, 0),
            score_bar_color: Color::WHITE,
            score_text_color: Color::BLACK,
            grid_color: Color::BLACK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}
