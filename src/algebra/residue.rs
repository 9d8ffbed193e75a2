use core::fmt;

use crate::algebra::element::{CompositionError, ElementKind};
use crate::algebra::group::InvalidArgument;
use crate::utils::gcd;

/// An element of the additive group of integers modulo `modulus`.
///
/// The value is always the canonical representative in `[0, modulus)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerResidue {
    value: u64,
    modulus: u64,
}

impl IntegerResidue {
    /// Create the residue class of `value` modulo `modulus`.
    ///
    /// `value` is reduced, so `new(5, 3)` is the class of `2`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument::ZeroModulus` if `modulus == 0`.
    pub fn new(value: u64, modulus: u64) -> Result<Self, InvalidArgument> {
        if modulus == 0 {
            return Err(InvalidArgument::ZeroModulus);
        }
        Ok(Self {
            value: value % modulus,
            modulus,
        })
    }

    /// Skips validation; the caller guarantees `value < modulus`.
    pub(crate) const fn from_reduced(value: u64, modulus: u64) -> Self {
        Self { value, modulus }
    }

    /// Get the representative in `[0, modulus)`.
    #[inline]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// The modulus.
    #[inline]
    pub const fn modulus(self) -> u64 {
        self.modulus
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Group operation: `(self + other) mod modulus`.
    ///
    /// # Errors
    ///
    /// Returns `CompositionError::SizeMismatch` if the moduli differ.
    pub fn compose(self, other: Self) -> Result<Self, CompositionError> {
        if self.modulus != other.modulus {
            return Err(CompositionError::SizeMismatch {
                kind: ElementKind::IntegerResidue,
                left: self.modulus,
                right: other.modulus,
            });
        }
        // a + b >= m  <=>  a >= m - b, without overflowing u64
        let gap = self.modulus - other.value;
        let value = if self.value >= gap {
            self.value - gap
        } else {
            self.value + other.value
        };
        Ok(Self {
            value,
            modulus: self.modulus,
        })
    }

    /// Additive inverse.
    pub const fn inverse(self) -> Self {
        if self.value == 0 {
            self
        } else {
            Self {
                value: self.modulus - self.value,
                modulus: self.modulus,
            }
        }
    }

    /// `self` added to itself `exp` times, i.e. `exp * value mod modulus`.
    pub const fn pow(self, exp: u64) -> Self {
        let value = (self.value as u128 * exp as u128) % self.modulus as u128;
        Self {
            value: value as u64,
            modulus: self.modulus,
        }
    }

    /// Additive order: `modulus / gcd(value, modulus)`.
    pub const fn order(self) -> u64 {
        self.modulus / gcd(self.value, self.modulus)
    }
}

impl fmt::Display for IntegerResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerResidue({} mod {})", self.value, self.modulus)
    }
}

/// Serialized form of an [`IntegerResidue`]: the value alongside its modulus.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ResidueRepr {
    value: u64,
    modulus: u64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntegerResidue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ResidueRepr {
            value: self.value,
            modulus: self.modulus,
        }
        .serialize(serializer)
    }
}

/// Deserialization reduces `value` and rejects a zero modulus.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntegerResidue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = ResidueRepr::deserialize(deserializer)?;
        Self::new(repr.value, repr.modulus).map_err(serde::de::Error::custom)
    }
}
