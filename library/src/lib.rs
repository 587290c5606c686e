pub mod dset_with_potentials;
pub mod group;

pub use dset_with_potentials::{DisjointSet, PotentialError};
pub use group::Group;
