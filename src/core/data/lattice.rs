use crate::core::data::complex::Complex;

/// Row-major grid of sample points on the complex plane.
///
/// Row `i` holds the points sharing the `i`th imaginary sample; column `j`
/// holds the points sharing the `j`th real sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    rows: usize,
    columns: usize,
    points: Vec<Complex>,
}

impl Lattice {
    /// Builds the outer product `real[j] + i·imag[i]` of the two axes.
    #[must_use]
    pub fn from_axes(reals: &[f64], imags: &[f64]) -> Self {
        let points = imags
            .iter()
            .flat_map(|&imag| reals.iter().map(move |&real| Complex { real, imag }))
            .collect();

        Self {
            rows: imags.len(),
            columns: reals.len(),
            points,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    /// Point at row `row`, column `column`, if inside the grid.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Complex> {
        if row >= self.rows || column >= self.columns {
            return None;
        }

        self.points.get(row * self.columns + column).copied()
    }

    pub fn row_iter(&self) -> impl Iterator<Item = &[Complex]> {
        // chunks_exact panics on a zero chunk size
        self.points.chunks_exact(self.columns.max(1))
    }

    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.points.iter().any(|p| {
            p.real.to_bits() == point.real.to_bits() && p.imag.to_bits() == point.imag.to_bits()
        })
    }
}
