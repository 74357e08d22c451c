#[allow(clippy::module_inception)]
pub mod rasterize_points;
