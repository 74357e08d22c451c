use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive and finite: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangular region of the complex plane being sampled and displayed.
///
/// Always satisfies `x_min < x_max` and `y_min < y_max`, with a finite width
/// and height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, ViewportError> {
        let width = x_max - x_min;
        let height = y_max - y_min;

        // Written negated so NaN bounds are rejected too.
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Bounds that are known to be ordered and finite, usable in constants.
    pub(crate) const fn from_ordered_bounds(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Builds the viewport spanned by two selected corners, in any order.
    pub fn from_selections(first: Complex, second: Complex) -> Result<Self, ViewportError> {
        let (x_min, x_max) = ordered(first.real, second.real);
        let (y_min, y_max) = ordered(first.imag, second.imag);

        Self::new(x_min, y_min, x_max, y_max)
    }

    /// Like [`Viewport::from_selections`], but a zero or near-zero extent is
    /// widened to `min_extent` about the selection's centre instead of failing.
    pub fn from_selections_clamped(
        first: Complex,
        second: Complex,
        min_extent: f64,
    ) -> Result<Self, ViewportError> {
        let (x_min, x_max) = ordered(first.real, second.real);
        let (y_min, y_max) = ordered(first.imag, second.imag);

        let (x_min, x_max) = widen_axis(x_min, x_max, min_extent);
        let (y_min, y_max) = widen_axis(y_min, y_max, min_extent);

        Self::new(x_min, y_min, x_max, y_max)
    }

    /// Returns a copy whose width and height are each at least `min_extent`.
    #[must_use]
    pub fn with_min_extent(self, min_extent: f64) -> Self {
        let (x_min, x_max) = widen_axis(self.x_min, self.x_max, min_extent);
        let (y_min, y_max) = widen_axis(self.y_min, self.y_max, min_extent);

        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && self.y_min <= point.imag
            && self.x_max >= point.real
            && self.y_max >= point.imag
    }
}

// Unlike f64::min/max, a NaN is passed through so the constructor rejects it.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

fn widen_axis(min: f64, max: f64, min_extent: f64) -> (f64, f64) {
    if max - min >= min_extent {
        return (min, max);
    }

    let centre = min + (max - min) / 2.0;
    let half = min_extent / 2.0;

    (centre - half, centre + half)
}
