use crate::core::actions::classify::ports::stability_test::StabilityTest;
use crate::core::data::classified_point_set::ClassifiedPointSet;
use crate::core::data::lattice::Lattice;

/// Keeps the lattice points that `test` judges stable, in lattice order.
pub fn classify<T: StabilityTest>(lattice: &Lattice, test: &T) -> ClassifiedPointSet {
    lattice
        .points()
        .iter()
        .copied()
        .filter(|&c| test.is_stable(c))
        .collect()
}
