//! Permutations of `{0, .., n-1}` stored as lookup tables.
//!
//! This module provides:
//! - The `Permutation` payload carried by [`Element::Permutation`](crate::Element)
//! - Lehmer-code decoding and encoding, which fix the carrier order of the
//!   symmetric groups
//! - Composition, inversion, powers, cycle decomposition and element order

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::element::{CompositionError, ElementKind};
use crate::algebra::group::InvalidArgument;
use crate::utils::lcm;

/// A bijection of `{0, .., n-1}` onto itself.
///
/// `mapping()[i]` is the image of `i`. The mapping is always a permutation:
/// every value in `0..n` appears exactly once.
///
/// # Example
///
/// ```
/// use fingroup::Permutation;
///
/// let swap = Permutation::new(vec![1, 0]).unwrap();
/// let id = swap.compose(&swap).unwrap();
/// assert!(id.is_identity());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Permutation {
    mapping: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from its lookup table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::NotAPermutation` if some value is out of
    /// range or repeated.
    pub fn new(mapping: Vec<usize>) -> Result<Self, InvalidArgument> {
        let n = mapping.len();
        let mut seen = vec![false; n];
        for &image in &mapping {
            if image >= n || seen[image] {
                return Err(InvalidArgument::NotAPermutation);
            }
            seen[image] = true;
        }
        Ok(Self { mapping })
    }

    /// The identity permutation on `n` points.
    pub fn identity(n: usize) -> Self {
        Self {
            mapping: (0..n).collect(),
        }
    }

    /// Embed into the permutations of `n` points, fixing `len()..n`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::DegreeTooSmall` if `n < self.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use fingroup::Permutation;
    ///
    /// let swap = Permutation::new(vec![1, 0]).unwrap();
    /// assert_eq!(swap.extend(4).unwrap().mapping(), &[1, 0, 2, 3]);
    /// assert!(swap.extend(1).is_err());
    /// ```
    pub fn extend(&self, n: usize) -> Result<Self, InvalidArgument> {
        if n < self.len() {
            return Err(InvalidArgument::DegreeTooSmall {
                len: self.len(),
                degree: n,
            });
        }
        let mut mapping = Vec::with_capacity(n);
        mapping.extend_from_slice(&self.mapping);
        mapping.extend(self.len()..n);
        Ok(Self { mapping })
    }

    /// The standard generating set of the symmetric group on `n` points: the
    /// transposition `[1,0,2,..]` and the `n`-cycle `[n-1,0,1,..,n-2]`.
    ///
    /// Empty for `n < 2`, where the group is trivial. For `n == 2` both
    /// generators coincide and only one is returned.
    pub fn symmetric_generators(n: usize) -> Vec<Self> {
        if n < 2 {
            return Vec::new();
        }
        let mut transposition = Self::identity(n);
        transposition.mapping.swap(0, 1);

        let cycle = Self {
            mapping: core::iter::once(n - 1).chain(0..n - 1).collect(),
        };

        if cycle == transposition {
            vec![transposition]
        } else {
            vec![transposition, cycle]
        }
    }

    /// Decode a Lehmer index into a permutation of `n` points.
    ///
    /// The index is read as a mixed-radix number with place values
    /// `n, n-1, .., 1`, least significant digit first. Each digit picks the
    /// `digit`-th value not yet used, in ascending order. Indices past
    /// `n! - 1` wrap around, since the remaining high part is discarded.
    ///
    /// Index `0` always decodes to the identity.
    ///
    /// # Example
    ///
    /// ```
    /// use fingroup::Permutation;
    ///
    /// assert_eq!(Permutation::from_lehmer_index(0, 3).mapping(), &[0, 1, 2]);
    /// assert_eq!(Permutation::from_lehmer_index(1, 3).mapping(), &[1, 0, 2]);
    /// ```
    pub fn from_lehmer_index(index: usize, n: usize) -> Self {
        let mut mapping = Vec::with_capacity(n);
        let mut used = vec![false; n];
        let mut key = index;

        for place in (1..=n).rev() {
            let digit = key % place;
            key /= place;

            // digit < place == number of unused values, so this always hits
            let mut count = 0;
            for (value, taken) in used.iter_mut().enumerate() {
                if *taken {
                    continue;
                }
                if count == digit {
                    *taken = true;
                    mapping.push(value);
                    break;
                }
                count += 1;
            }
        }

        Self { mapping }
    }

    /// Position of this permutation in the carrier of the symmetric group of
    /// the same size, i.e. the inverse of [`from_lehmer_index`](Self::from_lehmer_index).
    ///
    /// Returns `None` if the index does not fit in a `usize`.
    pub fn lehmer_index(&self) -> Option<usize> {
        let n = self.mapping.len();
        let mut acc: usize = 0;
        for pos in (0..n).rev() {
            let current = self.mapping[pos];
            // unused values below `current` at this position
            let digit = self.mapping[pos + 1..]
                .iter()
                .filter(|&&later| later < current)
                .count();
            acc = acc.checked_mul(n - pos)?.checked_add(digit)?;
        }
        Some(acc)
    }

    /// Number of points acted on.
    #[inline]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// True for the (unique) permutation of zero points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// The lookup table.
    #[inline]
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    /// Image of `point`, or `None` if it is out of range.
    #[inline]
    pub fn apply(&self, point: usize) -> Option<usize> {
        self.mapping.get(point).copied()
    }

    /// Is this the identity?
    pub fn is_identity(&self) -> bool {
        self.mapping.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Function composition `self ∘ other`: apply `other` first, then `self`.
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::SizeMismatch` if the two permutations act
    /// on a different number of points.
    pub fn compose(&self, other: &Self) -> Result<Self, CompositionError> {
        if self.len() != other.len() {
            return Err(CompositionError::SizeMismatch {
                kind: ElementKind::Permutation,
                left: self.len() as u64,
                right: other.len() as u64,
            });
        }
        Ok(self.compose_same_len(other))
    }

    /// Composition for operands already known to have equal length.
    fn compose_same_len(&self, other: &Self) -> Self {
        Self {
            mapping: other.mapping.iter().map(|&i| self.mapping[i]).collect(),
        }
    }

    /// The inverse permutation.
    pub fn inverse(&self) -> Self {
        let mut mapping = vec![0; self.len()];
        for (i, &image) in self.mapping.iter().enumerate() {
            mapping[image] = i;
        }
        Self { mapping }
    }

    /// `self^exp` using square-and-multiply.
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = self.clone();
        let mut result = Self::identity(self.len());

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.compose_same_len(&base);
            }
            base = base.compose_same_len(&base);
            e >>= 1;
        }
        result
    }

    /// Disjoint cycle decomposition.
    ///
    /// Each cycle starts at its smallest point and cycles are listed in order
    /// of their first point. Fixed points are omitted, so the identity has no
    /// cycles.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.len()];
        let mut cycles = Vec::new();

        for start in 0..self.len() {
            if visited[start] || self.mapping[start] == start {
                visited[start] = true;
                continue;
            }
            let mut cycle = Vec::new();
            let mut point = start;
            while !visited[point] {
                visited[point] = true;
                cycle.push(point);
                point = self.mapping[point];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Order of the permutation: the lcm of its cycle lengths.
    pub fn order(&self) -> u64 {
        self.cycles()
            .iter()
            .fold(1, |acc, cycle| lcm(acc, cycle.len() as u64))
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = InvalidArgument;

    fn try_from(mapping: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(mapping)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.mapping
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permutation[")?;
        for (i, image) in self.mapping.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", image)?;
        }
        write!(f, "]")
    }
}
