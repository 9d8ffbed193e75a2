//! Group elements as a single sum type.
//!
//! Every element of every group this crate builds is an [`Element`]. The
//! group operation is [`Element::multiply`], which matches on both operands
//! and refuses to combine elements of different shape.

use alloc::vec::Vec;
use core::fmt;

use crate::algebra::permutation::Permutation;
use crate::algebra::residue::IntegerResidue;
use crate::utils::lcm;

// ============================================================================
// Errors
// ============================================================================

/// Which variant an [`Element`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Permutation,
    IntegerResidue,
    Tuple,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Permutation => write!(f, "permutation"),
            ElementKind::IntegerResidue => write!(f, "integer residue"),
            ElementKind::Tuple => write!(f, "tuple"),
        }
    }
}

/// Error type for [`Element::multiply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// The operands are different variants.
    TypeMismatch { left: ElementKind, right: ElementKind },
    /// Same variant, incompatible shape: permutation length, residue modulus
    /// or tuple arity.
    SizeMismatch {
        kind: ElementKind,
        left: u64,
        right: u64,
    },
}

impl fmt::Display for CompositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionError::TypeMismatch { left, right } => {
                write!(f, "type mismatch: cannot multiply {} by {}", left, right)
            }
            CompositionError::SizeMismatch { kind, left, right } => {
                let what = match kind {
                    ElementKind::Permutation => "length",
                    ElementKind::IntegerResidue => "modulus",
                    ElementKind::Tuple => "arity",
                };
                write!(f, "size mismatch: {} {} {} vs {}", kind, what, left, right)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CompositionError {}

// ============================================================================
// Element
// ============================================================================

/// One member of a finite group.
///
/// Elements are immutable values; every operation returns a new element.
///
/// # Example
///
/// ```
/// use fingroup::{Element, IntegerResidue, Permutation};
///
/// let swap = Element::from(Permutation::new(vec![1, 0]).unwrap());
/// assert!(swap.multiply(&swap).unwrap().is_identity());
///
/// let two = Element::from(IntegerResidue::new(2, 3).unwrap());
/// assert_eq!(two.multiply(&two).unwrap().to_string(), "IntegerResidue(1 mod 3)");
///
/// assert!(swap.multiply(&two).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Permutation(Permutation),
    IntegerResidue(IntegerResidue),
    /// Element of a direct product; `components[j]` lives in factor `j`.
    Tuple(Vec<Element>),
}

impl Element {
    /// The variant of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Permutation(_) => ElementKind::Permutation,
            Element::IntegerResidue(_) => ElementKind::IntegerResidue,
            Element::Tuple(_) => ElementKind::Tuple,
        }
    }

    /// Tuple components, or `None` for non-tuples.
    pub fn components(&self) -> Option<&[Element]> {
        match self {
            Element::Tuple(components) => Some(components.as_slice()),
            _ => None,
        }
    }

    /// The group operation.
    ///
    /// - permutations compose right-to-left: `(a * b)[i] = a[b[i]]`
    /// - residues add modulo their shared modulus
    /// - tuples multiply componentwise
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::TypeMismatch` if the operands (or a pair of
    /// tuple components) are different variants.
    /// Returns `CompositionError::SizeMismatch` on a length, modulus or arity
    /// mismatch. A failing tuple component is reported as is.
    pub fn multiply(&self, other: &Element) -> Result<Element, CompositionError> {
        match (self, other) {
            (Element::Permutation(a), Element::Permutation(b)) => {
                a.compose(b).map(Element::Permutation)
            }
            (Element::IntegerResidue(a), Element::IntegerResidue(b)) => {
                a.compose(*b).map(Element::IntegerResidue)
            }
            (Element::Tuple(a), Element::Tuple(b)) => {
                if a.len() != b.len() {
                    return Err(CompositionError::SizeMismatch {
                        kind: ElementKind::Tuple,
                        left: a.len() as u64,
                        right: b.len() as u64,
                    });
                }
                a.iter()
                    .zip(b)
                    .map(|(x, y)| x.multiply(y))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Element::Tuple)
            }
            (left, right) => Err(CompositionError::TypeMismatch {
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }

    /// The identity of the group this element's shape belongs to.
    pub fn identity_like(&self) -> Element {
        match self {
            Element::Permutation(p) => Element::Permutation(Permutation::identity(p.len())),
            Element::IntegerResidue(r) => {
                Element::IntegerResidue(IntegerResidue::from_reduced(0, r.modulus()))
            }
            Element::Tuple(components) => {
                Element::Tuple(components.iter().map(Element::identity_like).collect())
            }
        }
    }

    /// Is this an identity element?
    pub fn is_identity(&self) -> bool {
        match self {
            Element::Permutation(p) => p.is_identity(),
            Element::IntegerResidue(r) => r.is_zero(),
            Element::Tuple(components) => components.iter().all(Element::is_identity),
        }
    }

    /// Inverse element: `x * x.inverse()` is `x.identity_like()`.
    pub fn inverse(&self) -> Element {
        match self {
            Element::Permutation(p) => Element::Permutation(p.inverse()),
            Element::IntegerResidue(r) => Element::IntegerResidue(r.inverse()),
            Element::Tuple(components) => {
                Element::Tuple(components.iter().map(Element::inverse).collect())
            }
        }
    }

    /// `self` multiplied by itself `exp` times; `pow(0)` is the identity.
    pub fn pow(&self, exp: u64) -> Element {
        match self {
            Element::Permutation(p) => Element::Permutation(p.pow(exp)),
            Element::IntegerResidue(r) => Element::IntegerResidue(r.pow(exp)),
            Element::Tuple(components) => {
                Element::Tuple(components.iter().map(|c| c.pow(exp)).collect())
            }
        }
    }

    /// Smallest `k >= 1` with `self.pow(k)` the identity.
    ///
    /// A tuple's order is the lcm of its component orders (saturating at
    /// `u64::MAX`).
    pub fn order(&self) -> u64 {
        match self {
            Element::Permutation(p) => p.order(),
            Element::IntegerResidue(r) => r.order(),
            Element::Tuple(components) => components
                .iter()
                .fold(1, |acc, c| lcm(acc, c.order())),
        }
    }
}

impl From<Permutation> for Element {
    fn from(p: Permutation) -> Self {
        Element::Permutation(p)
    }
}

impl From<IntegerResidue> for Element {
    fn from(r: IntegerResidue) -> Self {
        Element::IntegerResidue(r)
    }
}

impl From<Vec<Element>> for Element {
    fn from(components: Vec<Element>) -> Self {
        Element::Tuple(components)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Permutation(p) => fmt::Display::fmt(p, f),
            Element::IntegerResidue(r) => fmt::Display::fmt(r, f),
            Element::Tuple(components) => {
                write!(f, "Tuple(")?;
                for (i, c) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn perm(mapping: &[usize]) -> Element {
        Permutation::new(mapping.to_vec()).unwrap().into()
    }

    fn res(value: u64, modulus: u64) -> Element {
        IntegerResidue::new(value, modulus).unwrap().into()
    }

    #[test]
    fn swap_squared_is_identity() {
        assert_eq!(
            perm(&[1, 0]).multiply(&perm(&[1, 0])).unwrap(),
            perm(&[0, 1])
        );
    }

    #[test]
    fn residues_add() {
        assert_eq!(res(2, 3).multiply(&res(2, 3)).unwrap(), res(1, 3));
    }

    #[test]
    fn cross_variant_is_type_mismatch() {
        assert_eq!(
            perm(&[0, 1]).multiply(&res(0, 2)),
            Err(CompositionError::TypeMismatch {
                left: ElementKind::Permutation,
                right: ElementKind::IntegerResidue,
            })
        );
        assert_eq!(
            res(0, 2).multiply(&Element::Tuple(vec![res(0, 2)])),
            Err(CompositionError::TypeMismatch {
                left: ElementKind::IntegerResidue,
                right: ElementKind::Tuple,
            })
        );
    }

    #[test]
    fn permutation_length_mismatch() {
        assert_eq!(
            perm(&[0, 1, 2]).multiply(&perm(&[0, 1])),
            Err(CompositionError::SizeMismatch {
                kind: ElementKind::Permutation,
                left: 3,
                right: 2,
            })
        );
    }

    #[test]
    fn tuple_componentwise() {
        let a = Element::Tuple(vec![res(1, 2), perm(&[1, 2, 0])]);
        let b = Element::Tuple(vec![res(1, 2), perm(&[0, 2, 1])]);
        // [1,2,0] after [0,2,1]: i -> a[b[i]]
        let expected = Element::Tuple(vec![res(0, 2), perm(&[1, 0, 2])]);
        assert_eq!(a.multiply(&b).unwrap(), expected);
    }

    #[test]
    fn tuple_arity_mismatch() {
        let a = Element::Tuple(vec![res(1, 2), res(1, 2)]);
        let b = Element::Tuple(vec![res(1, 2)]);
        assert_eq!(
            a.multiply(&b),
            Err(CompositionError::SizeMismatch {
                kind: ElementKind::Tuple,
                left: 2,
                right: 1,
            })
        );
    }

    #[test]
    fn tuple_propagates_component_error() {
        let a = Element::Tuple(vec![res(1, 2), perm(&[0, 1])]);
        let b = Element::Tuple(vec![res(1, 3), perm(&[0, 1])]);
        assert_eq!(
            a.multiply(&b),
            Err(CompositionError::SizeMismatch {
                kind: ElementKind::IntegerResidue,
                left: 2,
                right: 3,
            })
        );

        let c = Element::Tuple(vec![perm(&[0, 1]), res(1, 2)]);
        assert!(matches!(
            a.multiply(&c),
            Err(CompositionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn inverse_pow_order() {
        let x = Element::Tuple(vec![res(2, 6), perm(&[1, 0, 3, 4, 2])]);
        assert!(x.multiply(&x.inverse()).unwrap().is_identity());
        assert_eq!(x.identity_like(), x.pow(0));
        // lcm(3, lcm(2, 3))
        assert_eq!(x.order(), 6);
        assert!(x.pow(6).is_identity());
        assert!(!x.pow(3).is_identity());
    }

    #[test]
    fn display() {
        let t = Element::Tuple(vec![res(1, 2), perm(&[0, 2, 1])]);
        assert_eq!(
            t.to_string(),
            "Tuple(IntegerResidue(1 mod 2), Permutation[0,2,1])"
        );
        assert_eq!(Element::Tuple(vec![]).to_string(), "Tuple()");
    }

    #[test]
    fn error_messages() {
        let e = CompositionError::SizeMismatch {
            kind: ElementKind::IntegerResidue,
            left: 2,
            right: 3,
        };
        assert_eq!(e.to_string(), "size mismatch: integer residue modulus 2 vs 3");
        let e = CompositionError::TypeMismatch {
            left: ElementKind::Permutation,
            right: ElementKind::Tuple,
        };
        assert_eq!(e.to_string(), "type mismatch: cannot multiply permutation by tuple");
    }
}
