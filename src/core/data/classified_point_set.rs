use crate::core::data::complex::Complex;

/// Lattice points judged to be members of the Mandelbrot set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedPointSet {
    points: Vec<Complex>,
}

impl ClassifiedPointSet {
    #[must_use]
    pub fn new(points: Vec<Complex>) -> Self {
        Self { points }
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

    pub fn iter(&self) -> impl Iterator<Item = &Complex> {
        self.points.iter()
    }

    #[must_use]
    pub fn into_points(self) -> Vec<Complex> {
        self.points
    }
}

impl FromIterator<Complex> for ClassifiedPointSet {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
