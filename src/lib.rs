mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::controllers::explorer::{
    ExplorerController, ExplorerError, ExplorerEvent, ExplorerEventSourcePort, ExplorerSession,
    ExplorerSummary, RenderError, ScatterFrame, ScatterRendererPort, SelectionBuffer,
    SessionUpdate,
};
pub use crate::core::actions::classify::classify::classify;
pub use crate::core::actions::classify::classify_mandelbrot::classify_mandelbrot;
pub use crate::core::actions::classify::classify_parallel_rayon::classify_parallel_rayon;
pub use crate::core::actions::classify::ports::stability_test::StabilityTest;
pub use crate::core::actions::generate_grid::generate_grid::{axis_sample_counts, generate_grid};
pub use crate::core::actions::rasterize_points::rasterize_points::rasterize_points;
pub use crate::core::data::classified_point_set::ClassifiedPointSet;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::display_hint::{DEFAULT_TITLE, DisplayHint};
pub use crate::core::data::lattice::Lattice;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{ESCAPE_RADIUS, MandelbrotStabilityTest};
pub use crate::core::fractals::mandelbrot::errors::MandelbrotError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_DENSITY, DEFAULT_MAX_ITERATIONS, DEFAULT_MIN_EXTENT, MandelbrotConfig,
};
pub use crate::core::fractals::mandelbrot::params::{MIN_DENSITY, MandelbrotParams};
pub use crate::core::util::linspace::linspace;
pub use crate::core::util::plot_area::PlotArea;
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui;
pub use crate::input::stdin::line_events::LineEventSource;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::storage::write_ppm::{encode_ppm, write_ppm};
