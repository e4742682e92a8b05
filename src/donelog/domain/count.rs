//! Validated occurrence count.

use super::DoneLogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many times an activity was done. Always at least [`Count::MIN`].
///
/// Totals that may be zero, such as sums over an empty period, use
/// [`CountTotal`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Count(i32);

impl Count {
    /// Smallest count accepted by [`Count::new`].
    pub const MIN: i32 = 1;

    /// Creates a count of at least one.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::CountBelowMinimum`] when `value < 1`.
    pub const fn new(value: i32) -> Result<Self, DoneLogDomainError> {
        if value < Self::MIN {
            return Err(DoneLogDomainError::CountBelowMinimum {
                value,
                minimum: Self::MIN,
            });
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns a new count increased by `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::CountOverflow`] when the sum does not fit
    /// or [`DoneLogDomainError::CountBelowMinimum`] when it is below one.
    pub const fn try_add(self, delta: Self) -> Result<Self, DoneLogDomainError> {
        match self.0.checked_add(delta.0) {
            Some(sum) => Self::new(sum),
            None => Err(DoneLogDomainError::CountOverflow),
        }
    }

    /// Returns a new count decreased by `delta`.
    ///
    /// Subtraction never clamps: a result below one is an error.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::CountBelowMinimum`] when the difference
    /// is below one or [`DoneLogDomainError::CountOverflow`] when it does not
    /// fit.
    pub const fn try_sub(self, delta: Self) -> Result<Self, DoneLogDomainError> {
        match self.0.checked_sub(delta.0) {
            Some(difference) => Self::new(difference),
            None => Err(DoneLogDomainError::CountOverflow),
        }
    }
}

impl TryFrom<i32> for Count {
    type Error = DoneLogDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Count> for i32 {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative sum of counts, for derived or aggregated totals.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub struct CountTotal(i32);

impl CountTotal {
    /// Creates a total that may be zero.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::NegativeCount`] when `value < 0`.
    pub const fn new(value: i32) -> Result<Self, DoneLogDomainError> {
        if value < 0 {
            return Err(DoneLogDomainError::NegativeCount(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` for a zero total.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the total with `count` added.
    ///
    /// # Errors
    ///
    /// Returns [`DoneLogDomainError::CountOverflow`] when the sum does not fit.
    pub const fn try_add(self, count: Count) -> Result<Self, DoneLogDomainError> {
        match self.0.checked_add(count.value()) {
            Some(sum) => Ok(Self(sum)),
            None => Err(DoneLogDomainError::CountOverflow),
        }
    }
}

impl From<Count> for CountTotal {
    fn from(count: Count) -> Self {
        Self(count.value())
    }
}

impl TryFrom<i32> for CountTotal {
    type Error = DoneLogDomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountTotal> for i32 {
    fn from(total: CountTotal) -> Self {
        total.0
    }
}

impl fmt::Display for CountTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
