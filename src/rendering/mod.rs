pub use fruit_mesh::fruit_mesh;
pub use grid_mesh::grid_mesh;
pub use hud::{score_bar_mesh, score_text};
pub use snake_mesh::snake_mesh;

mod fruit_mesh;
mod grid_mesh;
mod hud;
mod snake_mesh;
