use log::debug;

use crate::core::data::lattice::Lattice;
use crate::core::data::viewport::Viewport;
use crate::core::util::linspace::linspace;

/// Samples `viewport` on a lattice with `density` points along its longer
/// axis.
///
/// The shorter axis gets `round(density * short / long)` samples so the
/// spacing is about the same in both directions. A square viewport counts as
/// wide. Never yields zero samples on an axis for a positive density.
#[must_use]
pub fn generate_grid(viewport: Viewport, density: u32) -> Lattice {
    let (columns, rows) = axis_sample_counts(viewport, density);

    let reals = linspace(viewport.x_min(), viewport.x_max(), columns);
    let imaginaries = linspace(viewport.y_min(), viewport.y_max(), rows);

    debug!("generated {}x{} lattice for {:?}", rows, columns, viewport);

    Lattice::from_axes(&reals, &imaginaries)
}

/// Returns `(columns, rows)` for a viewport sampled at `density`.
#[must_use]
pub fn axis_sample_counts(viewport: Viewport, density: u32) -> (usize, usize) {
    let dx = viewport.width();
    let dy = viewport.height();
    let density = density as usize;

    if dy > dx {
        (scaled_count(density, dx / dy), density)
    } else {
        (density, scaled_count(density, dy / dx))
    }
}

fn scaled_count(density: usize, ratio: f64) -> usize {
    if density == 0 {
        return 0;
    }

    ((density as f64 * ratio).round() as usize).max(1)
}
