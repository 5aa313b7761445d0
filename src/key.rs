//! Keys for value types that are only partially ordered.
//!
//! The tree relies on a total order. Floating-point values are admitted
//! through [`FiniteF64`], which refuses NaN up front instead of letting it
//! reach the rotation logic.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum KeyError {
    #[error("value {0} has no place in a total order")]
    NotComparable(f64),
}

/// A non-NaN `f64` usable as a tree key.
///
/// `-0.0` is stored as `0.0` so values that compare equal are one key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FiniteF64(f64);

impl FiniteF64 {
    pub fn new(value: f64) -> Result<Self, KeyError> {
        if value.is_nan() {
            return Err(KeyError::NotComparable(value));
        }
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Eq for FiniteF64 {}

impl PartialOrd for FiniteF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FiniteF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = KeyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FiniteF64> for f64 {
    fn from(key: FiniteF64) -> Self {
        key.0
    }
}

impl fmt::Display for FiniteF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
