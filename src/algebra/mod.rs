pub mod element;
pub mod group;
pub mod permutation;
pub mod residue;
