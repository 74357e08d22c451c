use crate::core::actions::classify::classify_parallel_rayon::classify_parallel_rayon;
use crate::core::data::classified_point_set::ClassifiedPointSet;
use crate::core::data::lattice::Lattice;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotStabilityTest;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Keeps the lattice points that do not escape within `max_iterations`.
pub fn classify_mandelbrot(
    lattice: &Lattice,
    max_iterations: u32,
) -> Result<ClassifiedPointSet, MandelbrotError> {
    let test = MandelbrotStabilityTest::new(max_iterations)?;

    Ok(classify_parallel_rayon(lattice, &test))
}
