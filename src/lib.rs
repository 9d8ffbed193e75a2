//! Finite groups by explicit enumeration.
//!
//! Build a [`Group`] (symmetric, cyclic or a direct product of groups), walk
//! its carrier, and combine [`Element`]s with [`Element::multiply`].
//!
//! ```
//! use fingroup::{make_cyclic_group, make_product_group, make_symmetric_group};
//!
//! let z2 = make_cyclic_group(2).unwrap();
//! let s3 = make_symmetric_group(3).unwrap();
//! let g = make_product_group(&[z2, s3]).unwrap();
//!
//! let a = &g.elements()[5];
//! let b = &g.elements()[7];
//! assert!(g.contains(&a.multiply(b).unwrap()));
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls for the error types
//! - `serde`: `Serialize`/`Deserialize` for elements
//! - `rand`: [`Group::sample`]
//! - `tracing`: debug events on group construction
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod utils;

pub use algebra::element::{CompositionError, Element, ElementKind};
pub use algebra::group::{
    make_cyclic_group, make_product_group, make_symmetric_group, Group, GroupKind,
    InvalidArgument,
};
pub use algebra::permutation::Permutation;
pub use algebra::residue::IntegerResidue;
pub use utils::{checked_factorial, gcd, lcm};
