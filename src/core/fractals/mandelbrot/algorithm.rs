use crate::core::actions::classify::ports::stability_test::StabilityTest;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Standard escape radius of the Mandelbrot iteration.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Escape-time membership test for the Mandelbrot set.
///
/// Iterates `z ← z² + c` from `z = 0` up to `max_iterations` times and
/// rejects `c` as soon as `|z|` exceeds [`ESCAPE_RADIUS`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotStabilityTest {
    max_iterations: u32,
}

impl MandelbrotStabilityTest {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl StabilityTest for MandelbrotStabilityTest {
    fn is_stable(&self, c: Complex) -> bool {
        let mut z = Complex::ZERO;

        for _ in 0..self.max_iterations {
            z = z.square() + c;

            if z.magnitude() > ESCAPE_RADIUS {
                return false;
            }
        }

        // Never false once the loop completes; this is still the admission test.
        z.magnitude() <= ESCAPE_RADIUS
    }
}
