//! Finite groups with an eagerly enumerated carrier.
//!
//! This module provides:
//! - The `Group` struct, which owns the full ordered element list of a group
//! - Constructors for symmetric groups, cyclic groups and direct products
//! - `InvalidArgument`, the error type for malformed construction parameters
//!
//! In every group built here the element at carrier index `0` is the identity.

use alloc::vec::Vec;
use core::fmt;

use crate::algebra::element::Element;
use crate::algebra::permutation::Permutation;
use crate::algebra::residue::IntegerResidue;
use crate::utils::{checked_factorial, lcm};

// ============================================================================
// Errors
// ============================================================================

/// Error type for malformed construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A cyclic group or residue with modulus zero.
    ZeroModulus,
    /// A direct product of no factors.
    EmptyProduct,
    /// The carrier would have more elements than fit in a `usize`.
    OrderOverflow,
    /// A lookup table that is not a bijection of `0..n`.
    NotAPermutation,
    /// Embedding a permutation of `len` points into fewer points.
    DegreeTooSmall { len: usize, degree: usize },
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::ZeroModulus => write!(f, "modulus must be at least 1"),
            InvalidArgument::EmptyProduct => write!(f, "product of zero groups"),
            InvalidArgument::OrderOverflow => write!(f, "group order overflows usize"),
            InvalidArgument::NotAPermutation => {
                write!(f, "mapping is not a permutation")
            }
            InvalidArgument::DegreeTooSmall { len, degree } => {
                write!(f, "cannot embed {} points into {}", len, degree)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

// ============================================================================
// Group kinds
// ============================================================================

/// Which group a [`Group`] is, together with its construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// All permutations of `degree` points.
    Symmetric { degree: usize },
    /// Integers modulo `modulus` under addition.
    CyclicInteger { modulus: usize },
    /// Direct product of the listed factors, in order.
    Product(Vec<GroupKind>),
}

impl GroupKind {
    /// Number of elements, or `None` if it overflows a `usize`.
    pub fn order(&self) -> Option<usize> {
        match self {
            GroupKind::Symmetric { degree } => checked_factorial(*degree),
            GroupKind::CyclicInteger { modulus } => Some(*modulus),
            GroupKind::Product(factors) => factors
                .iter()
                .try_fold(1usize, |acc, f| acc.checked_mul(f.order()?)),
        }
    }

    /// Whether the group is commutative.
    pub fn is_abelian(&self) -> bool {
        match self {
            GroupKind::Symmetric { degree } => *degree <= 2,
            GroupKind::CyclicInteger { .. } => true,
            GroupKind::Product(factors) => factors.iter().all(GroupKind::is_abelian),
        }
    }

    /// Carrier index of `element` in a group of this kind.
    ///
    /// Inverts the enumeration order without scanning the carrier.
    fn position(&self, element: &Element) -> Option<usize> {
        match (self, element) {
            (GroupKind::Symmetric { degree }, Element::Permutation(p)) if p.len() == *degree => {
                p.lehmer_index()
            }
            (GroupKind::CyclicInteger { modulus }, Element::IntegerResidue(r))
                if r.modulus() == *modulus as u64 =>
            {
                usize::try_from(r.value()).ok()
            }
            (GroupKind::Product(factors), Element::Tuple(components))
                if components.len() == factors.len() =>
            {
                // mixed radix, first factor least significant
                let mut index: usize = 0;
                let mut place: usize = 1;
                for (factor, component) in factors.iter().zip(components) {
                    let digit = factor.position(component)?;
                    index = index.checked_add(digit.checked_mul(place)?)?;
                    place = place.checked_mul(factor.order()?)?;
                }
                Some(index)
            }
            _ => None,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Symmetric { degree } => write!(f, "Symmetric({})", degree),
            GroupKind::CyclicInteger { modulus } => write!(f, "CyclicInteger({})", modulus),
            GroupKind::Product(factors) => {
                write!(f, "Product(")?;
                for (i, factor) in factors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", factor)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// Group
// ============================================================================

/// A finite group with its complete, duplicate-free carrier.
///
/// The carrier is computed once by the constructor and never changes.
///
/// # Example
///
/// ```
/// use fingroup::Group;
///
/// let z2 = Group::cyclic(2).unwrap();
/// let s3 = Group::symmetric(3).unwrap();
/// let prod = Group::product(&[z2, s3]).unwrap();
///
/// assert_eq!(prod.order(), 12);
/// assert!(prod.identity().is_identity());
/// assert!(!prod.is_abelian());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    kind: GroupKind,
    elements: Vec<Element>,
}

impl Group {
    fn from_parts(kind: GroupKind, elements: Vec<Element>) -> Self {
        debug_assert!(!elements.is_empty(), "{} built an empty carrier", kind);
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %kind, order = elements.len(), "constructed group");
        Self { kind, elements }
    }

    /// The symmetric group on `n` points: all `n!` permutations.
    ///
    /// The carrier is ordered by Lehmer index (see
    /// [`Permutation::from_lehmer_index`]). `n = 0` and `n = 1` both give the
    /// trivial group.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::OrderOverflow` if `n!` does not fit in a
    /// `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use fingroup::Group;
    ///
    /// let s2 = Group::symmetric(2).unwrap();
    /// let rendered: Vec<String> = s2.iter().map(|e| e.to_string()).collect();
    /// assert_eq!(rendered, ["Permutation[0,1]", "Permutation[1,0]"]);
    /// ```
    pub fn symmetric(n: usize) -> Result<Self, InvalidArgument> {
        let order = checked_factorial(n).ok_or(InvalidArgument::OrderOverflow)?;
        let elements = (0..order)
            .map(|i| Element::Permutation(Permutation::from_lehmer_index(i, n)))
            .collect();
        Ok(Self::from_parts(GroupKind::Symmetric { degree: n }, elements))
    }

    /// The cyclic group of integers modulo `n`: residues `0..n` in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::ZeroModulus` if `n == 0`.
    pub fn cyclic(n: usize) -> Result<Self, InvalidArgument> {
        if n == 0 {
            return Err(InvalidArgument::ZeroModulus);
        }
        let modulus = u64::try_from(n).map_err(|_| InvalidArgument::OrderOverflow)?;
        let elements = (0..modulus)
            .map(|v| Element::IntegerResidue(IntegerResidue::from_reduced(v, modulus)))
            .collect();
        Ok(Self::from_parts(GroupKind::CyclicInteger { modulus: n }, elements))
    }

    /// Direct product of `groups`, one tuple per combination of factor
    /// elements.
    ///
    /// Tuple `i` is found by reading `i` as a mixed-radix number whose digits
    /// index into each factor's carrier, the first factor being the least
    /// significant digit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::EmptyProduct` if `groups` is empty.
    /// Returns `InvalidArgument::OrderOverflow` if the product of the factor
    /// orders does not fit in a `usize`.
    pub fn product(groups: &[Group]) -> Result<Self, InvalidArgument> {
        if groups.is_empty() {
            return Err(InvalidArgument::EmptyProduct);
        }
        let order = groups
            .iter()
            .try_fold(1usize, |acc, g| acc.checked_mul(g.order()))
            .ok_or(InvalidArgument::OrderOverflow)?;

        let elements = (0..order)
            .map(|i| {
                let mut key = i;
                let components = groups
                    .iter()
                    .map(|g| {
                        let radix = g.order();
                        let component = g.elements[key % radix].clone();
                        key /= radix;
                        component
                    })
                    .collect();
                Element::Tuple(components)
            })
            .collect();

        let kind = GroupKind::Product(groups.iter().map(|g| g.kind.clone()).collect());
        Ok(Self::from_parts(kind, elements))
    }

    /// Which group this is.
    #[inline]
    pub fn kind(&self) -> &GroupKind {
        &self.kind
    }

    /// The carrier, in construction order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Iterate over the carrier.
    pub fn iter(&self) -> core::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Number of elements.
    #[inline]
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The identity element.
    #[inline]
    pub fn identity(&self) -> &Element {
        // every constructor puts the identity first and never builds an
        // empty carrier
        &self.elements[0]
    }

    /// Carrier index of `element`, or `None` if it is not in this group.
    pub fn index_of(&self, element: &Element) -> Option<usize> {
        self.kind
            .position(element)
            .filter(|&i| i < self.elements.len())
    }

    #[inline]
    pub fn contains(&self, element: &Element) -> bool {
        self.index_of(element).is_some()
    }

    /// Whether the group is commutative.
    pub fn is_abelian(&self) -> bool {
        self.kind.is_abelian()
    }

    /// Least common multiple of all element orders.
    pub fn exponent(&self) -> u64 {
        self.elements.iter().fold(1, |acc, e| lcm(acc, e.order()))
    }

    /// A uniformly random element of the carrier.
    #[cfg(feature = "rand")]
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> &Element {
        &self.elements[rng.gen_range(0..self.elements.len())]
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Element;
    type IntoIter = core::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.kind)?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", e)?;
        }
        write!(f, " }}")
    }
}

// ============================================================================
// Constructor functions
// ============================================================================

/// Same as [`Group::symmetric`].
pub fn make_symmetric_group(n: usize) -> Result<Group, InvalidArgument> {
    Group::symmetric(n)
}

/// Same as [`Group::cyclic`].
pub fn make_cyclic_group(n: usize) -> Result<Group, InvalidArgument> {
    Group::cyclic(n)
}

/// Same as [`Group::product`].
pub fn make_product_group(groups: &[Group]) -> Result<Group, InvalidArgument> {
    Group::product(groups)
}
