use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotStabilityTest;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Smallest density that yields a lattice with spacing on both axes.
pub const MIN_DENSITY: u32 = 2;

/// Validated parameters for one sampling pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotParams {
    viewport: Viewport,
    density: u32,
    stability_test: MandelbrotStabilityTest,
}

impl MandelbrotParams {
    pub fn new(viewport: Viewport, density: u32, max_iterations: u32) -> Result<Self, MandelbrotError> {
        let stability_test = MandelbrotStabilityTest::new(max_iterations)?;

        if density < MIN_DENSITY {
            return Err(MandelbrotError::DensityTooSmall {
                density,
                minimum: MIN_DENSITY,
            });
        }

        Ok(Self {
            viewport,
            density,
            stability_test,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn max_iterations(&self) -> u32 {
        self.stability_test.max_iterations()
    }

    /// Same parameters over a different region.
    #[must_use]
    pub fn with_viewport(self, viewport: Viewport) -> Self {
        Self { viewport, ..self }
    }

    pub fn stability_test(&self) -> MandelbrotStabilityTest {
        self.stability_test
    }
}
