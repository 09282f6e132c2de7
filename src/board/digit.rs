use std::fmt;
use std::num::NonZeroU8;

use crate::bitset::SetElement;

// defined separately from positions because it has an offset
/// A digit that can be entered in a cell of a sudoku.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        match Self::new_checked(digit) {
            Some(digit) => digit,
            None => panic!("digit out of range 1..=9: {}", digit),
        }
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Returns an iterator over all digits, ascending.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit offset by `-1`, guaranteeing that the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl SetElement for Digit {
    const COUNT: u8 = 9;

    fn as_index(self) -> usize {
        Digit::as_index(self)
    }

    fn from_index(index: u8) -> Self {
        Digit::new(index + 1)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.get())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digit = u8::deserialize(deserializer)?;
        Digit::new_checked(digit)
            .ok_or_else(|| serde::de::Error::custom("digit out of range 1..=9"))
    }
}
