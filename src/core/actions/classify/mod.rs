#[allow(clippy::module_inception)]
pub mod classify;
pub mod classify_mandelbrot;
pub mod classify_parallel_rayon;
