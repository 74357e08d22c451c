use rayon::prelude::*;

use crate::core::actions::classify::ports::stability_test::StabilityTest;
use crate::core::data::classified_point_set::ClassifiedPointSet;
use crate::core::data::complex::Complex;
use crate::core::data::lattice::Lattice;

/// Classifies lattice rows in parallel using rayon's work-stealing scheduler.
///
/// Every point is tested independently, so rows need no coordination. The
/// result is identical to [`classify`](super::classify::classify), including
/// order: rayon's indexed collect keeps rows in lattice order.
pub fn classify_parallel_rayon<T>(lattice: &Lattice, test: &T) -> ClassifiedPointSet
where
    T: StabilityTest + Sync,
{
    let rows: Vec<Vec<Complex>> = lattice
        .points()
        .par_chunks(lattice.columns().max(1))
        .map(|row| {
            row.iter()
                .copied()
                .filter(|&c| test.is_stable(c))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::classify::classify::classify;
    use crate::core::util::linspace::linspace;

    struct InsideUnitDisc;

    impl StabilityTest for InsideUnitDisc {
        fn is_stable(&self, c: Complex) -> bool {
            c.magnitude() <= 1.0
        }
    }

    #[test]
    fn test_rayon_matches_serial() {
        let lattice = Lattice::from_axes(&linspace(-2.0, 2.0, 101), &linspace(-2.0, 2.0, 87));

        let serial = classify(&lattice, &InsideUnitDisc);
        let parallel = classify_parallel_rayon(&lattice, &InsideUnitDisc);

        assert!(!serial.is_empty());
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_with_single_row() {
        let lattice = Lattice::from_axes(&linspace(-2.0, 2.0, 9), &[0.0]);

        let parallel = classify_parallel_rayon(&lattice, &InsideUnitDisc);

        assert_eq!(parallel.len(), 5);
    }

    #[test]
    fn test_rayon_with_empty_lattice() {
        let lattice = Lattice::from_axes(&[], &[]);

        assert!(classify_parallel_rayon(&lattice, &InsideUnitDisc).is_empty());
    }
}
