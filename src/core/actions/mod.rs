pub mod classify;
pub mod generate_grid;
pub mod rasterize_points;
