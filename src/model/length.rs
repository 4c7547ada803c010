//! Length-with-variance: the (mean, variance) pair every position and size
//! in the scaffold graph is carried as.
//!
//! Two kinds of combination exist and they must not be confused:
//!
//! | Operation | Mean | Variance | Used for |
//! |-----------|------|----------|----------|
//! | `a + b` | add | add | chaining independent measurements |
//! | `a - b` | subtract | add | difference of independent measurements |
//! | [`Length::span`] | subtract | subtract | width between two absolute offsets |
//! | [`Length::rebase`] | subtract | subtract | moving an absolute offset to a new origin |
//!
//! Absolute offsets in one scaffold share the variance accumulated from the
//! scaffold origin, so subtracting them removes the shared part. Independent
//! measurements never share it, so their variances always add.

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Length {
    pub mean: f64,
    pub variance: f64,
}

impl Length {
    pub const ZERO: Length = Length { mean: 0.0, variance: 0.0 };

    pub const fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// Component-wise maximum. Mean and variance are taken independently,
    /// so the result need not equal either input.
    pub fn max_components(self, other: Length) -> Length {
        Length {
            mean: self.mean.max(other.mean),
            variance: self.variance.max(other.variance),
        }
    }

    /// True when either component is below zero.
    pub fn is_negative(&self) -> bool {
        self.mean < 0.0 || self.variance < 0.0
    }

    /// Width between two absolute offsets of the same scaffold.
    ///
    /// # Panics
    ///
    /// If the resulting variance is negative: `max` was not actually further
    /// from the origin than `min`.
    pub fn span(max: Length, min: Length) -> Length {
        let width = Length {
            mean: max.mean - min.mean,
            variance: max.variance - min.variance,
        };
        assert!(
            width.variance >= 0.0,
            "negative variance {} spanning ({}, {}) to ({}, {})",
            width.variance, min.mean, min.variance, max.mean, max.variance,
        );
        width
    }

    /// Express an absolute offset relative to `origin`. Unlike [`Length::span`]
    /// the result may be negative; callers that need a valid position must
    /// check it themselves.
    pub fn rebase(self, origin: Length) -> Length {
        Length {
            mean: self.mean - origin.mean,
            variance: self.variance - origin.variance,
        }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length {
            mean: self.mean + rhs.mean,
            variance: self.variance + rhs.variance,
        }
    }
}

impl AddAssign for Length {
    fn add_assign(&mut self, rhs: Length) {
        *self = *self + rhs;
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length {
            mean: self.mean - rhs.mean,
            variance: self.variance + rhs.variance,
        }
    }
}

impl std::fmt::Display for Length {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.mean, self.variance)
    }
}
