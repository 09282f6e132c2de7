//! Fixed-size bitsets over nine-element universes.
//!
//! Candidate bookkeeping deals with small sets all the time: the digits still
//! possible in a cell, the positions a digit can take within a region, the
//! base lines of a fish. All of those universes have exactly nine members, so
//! a single `u16` word backs every set and the cardinality is always the
//! popcount of that word. The type parameter keeps digit sets and position
//! sets from being mixed up.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::board::Digit;

/// A set of digits still possible for a cell.
pub type CandidateSet = Set<Digit>;

/// Element types that can be stored in a [`Set`].
pub trait SetElement: Copy {
    /// Number of distinct elements, at most 16.
    const COUNT: u8;

    /// Maps the element to its bit position.
    fn as_index(self) -> usize;

    /// Inverse of [`as_index`](SetElement::as_index).
    fn from_index(index: u8) -> Self;
}

/// Fixed-universe bitset with O(1) membership and popcount cardinality.
pub struct Set<T: SetElement>(u16, PhantomData<T>);

// derive would bound these on T instead of the storage word
impl<T: SetElement> Clone for Set<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: SetElement> Copy for Set<T> {}
impl<T: SetElement> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<T: SetElement> Eq for Set<T> {}
impl<T: SetElement> std::hash::Hash for Set<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: SetElement> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({:#011b})", self.0)
    }
}

impl<T: SetElement> Default for Set<T> {
    fn default() -> Self {
        Set::NONE
    }
}

impl<T: SetElement> Set<T> {
    /// Set containing every element of the universe.
    pub const ALL: Set<T> = Set((1u16 << T::COUNT) - 1, PhantomData);

    /// The empty set.
    pub const NONE: Set<T> = Set(0, PhantomData);

    /// Constructs a set from a raw bit word.
    ///
    /// # Panic
    /// Panics if `bits` contains bits above [`Set::ALL`].
    pub fn from_bits(bits: u16) -> Self {
        assert!(bits < 1 << T::COUNT, "invalid bits for set: {:#b}", bits);
        Set(bits, PhantomData)
    }

    /// Returns the raw bit word backing the set.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Checks whether `element` is in the set.
    pub fn contains(self, element: T) -> bool {
        self.0 & (1 << element.as_index()) != 0
    }

    /// Adds `element`. Returns `true` if the set changed.
    pub fn insert(&mut self, element: T) -> bool {
        let old = self.0;
        self.0 |= 1 << element.as_index();
        self.0 != old
    }

    /// Removes `element`. Returns `true` if the set changed.
    pub fn remove(&mut self, element: T) -> bool {
        let old = self.0;
        self.0 &= !(1 << element.as_index());
        self.0 != old
    }

    /// Adds or removes `element`. Returns `true` if the set changed.
    pub fn set(&mut self, element: T, present: bool) -> bool {
        if present {
            self.insert(element)
        } else {
            self.remove(element)
        }
    }

    /// Returns the number of elements in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the elements of `self` that are not in `other`.
    pub fn without(self, other: Self) -> Self {
        Set(self.0 & !other.0, PhantomData)
    }

    /// Checks whether `self` and `other` share any element.
    pub fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the only element, iff the set holds exactly one.
    pub fn unique(self) -> Option<T> {
        if self.len() == 1 {
            Some(T::from_index(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Returns both elements in ascending order, iff the set holds exactly two.
    pub fn as_pair(self) -> Option<(T, T)> {
        if self.len() != 2 {
            return None;
        }
        let first = self.0.trailing_zeros() as u8;
        let second = (15 - self.0.leading_zeros()) as u8;
        Some((T::from_index(first), T::from_index(second)))
    }

    /// Iterates over the contained elements, lowest bit first.
    pub fn iter(self) -> Iter<T> {
        Iter(self.0, PhantomData)
    }
}

impl<T: SetElement> From<T> for Set<T> {
    fn from(element: T) -> Self {
        Set(1 << element.as_index(), PhantomData)
    }
}

impl<T: SetElement> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// Iterator over the elements of a [`Set`].
pub struct Iter<T: SetElement>(u16, PhantomData<T>);

impl<T: SetElement> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & self.0.wrapping_neg();
        self.0 ^= lowest_bit;
        Some(T::from_index(lowest_bit.trailing_zeros() as u8))
    }
}

macro_rules! impl_binary_bitops {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                type Output = Self;

                #[inline]
                fn $fn_name(self, other: Self) -> Self {
                    Set($trait::$fn_name(self.0, other.0), PhantomData)
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                type Output = Self;

                #[inline]
                fn $fn_name(self, other: T) -> Self {
                    $trait::$fn_name(self, Set::from(other))
                }
            }
        )*
    };
}

macro_rules! impl_bitops_assign {
    ( $( $trait:ident, $fn_name:ident );* $(;)* ) => {
        $(
            impl<T: SetElement> $trait for Set<T> {
                #[inline]
                fn $fn_name(&mut self, other: Self) {
                    $trait::$fn_name(&mut self.0, other.0)
                }
            }

            impl<T: SetElement> $trait<T> for Set<T> {
                #[inline]
                fn $fn_name(&mut self, other: T) {
                    $trait::$fn_name(self, Set::from(other))
                }
            }
        )*
    };
}

impl_binary_bitops!(
    BitAnd, bitand;
    BitOr, bitor;
    BitXor, bitxor;
);

impl_bitops_assign!(
    BitAndAssign, bitand_assign;
    BitOrAssign, bitor_assign;
    BitXorAssign, bitxor_assign;
);

impl<T: SetElement> Not for Set<T> {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL.without(self)
    }
}

#[cfg(feature = "serde")]
impl<T: SetElement> serde::Serialize for Set<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: SetElement> serde::Deserialize<'de> for Set<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = u16::deserialize(deserializer)?;
        if bits >= 1 << T::COUNT {
            return Err(serde::de::Error::custom("bit word exceeds set universe"));
        }
        Ok(Set(bits, PhantomData))
    }
}
