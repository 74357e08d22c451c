use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::MandelbrotParams;

pub const DEFAULT_DENSITY: u32 = 500;
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;
pub const DEFAULT_MIN_EXTENT: f64 = 1e-12;

const DEFAULT_VIEWPORT: Viewport = Viewport::from_ordered_bounds(-2.0, -1.5, 0.5, 1.5);

pub(crate) fn default_viewport() -> Viewport {
    DEFAULT_VIEWPORT
}

/// Explorer settings, before validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub viewport: Viewport,
    pub density: u32,
    pub max_iterations: u32,
    /// Narrowest width or height a zoom selection may produce.
    pub min_extent: f64,
    /// Classify rows on the rayon thread pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            density: DEFAULT_DENSITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_extent: DEFAULT_MIN_EXTENT,
            parallel: true,
        }
    }
}

impl MandelbrotConfig {
    pub fn params(&self) -> Result<MandelbrotParams, MandelbrotError> {
        if !(self.min_extent.is_finite() && self.min_extent > 0.0) {
            return Err(MandelbrotError::InvalidMinExtent {
                min_extent: self.min_extent,
            });
        }

        MandelbrotParams::new(
            self.viewport.with_min_extent(self.min_extent),
            self.density,
            self.max_iterations,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport_passes_validation() {
        let viewport = default_viewport();

        assert_eq!(
            Viewport::new(viewport.x_min(), viewport.y_min(), viewport.x_max(), viewport.y_max()),
            Ok(viewport)
        );
    }

    #[test]
    fn test_default_config_matches_classic_view() {
        let config = MandelbrotConfig::default();
        let params = config.params().unwrap();

        assert_eq!(params.viewport(), Viewport::new(-2.0, -1.5, 0.5, 1.5).unwrap());
        assert_eq!(params.density(), 500);
        assert_eq!(params.max_iterations(), 20);
        assert!(config.parallel);
    }

    #[test]
    fn test_invalid_min_extent_is_rejected() {
        for min_extent in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = MandelbrotConfig {
                min_extent,
                ..MandelbrotConfig::default()
            };

            assert!(matches!(
                config.params(),
                Err(MandelbrotError::InvalidMinExtent { .. })
            ));
        }
    }

    #[test]
    fn test_narrow_initial_viewport_is_widened() {
        let config = MandelbrotConfig {
            viewport: Viewport::new(0.0, 0.0, 1.0, 1e-15).unwrap(),
            min_extent: 0.5,
            ..MandelbrotConfig::default()
        };

        assert!(config.params().unwrap().viewport().height() >= 0.5);
    }
}
