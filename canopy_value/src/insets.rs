// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-side inset values.

use core::fmt;

/// Insets for the four sides of a box, in the owning property's unit.
///
/// Shorthand conversions follow the usual authoring conventions:
/// a single number applies to all sides, a pair is `[vertical,
/// horizontal]`, and a quad is `[top, right, bottom, left]`.
///
/// # Example
///
/// ```rust
/// use canopy_value::Insets;
///
/// assert_eq!(Insets::from(10.0), Insets::uniform(10.0));
/// assert_eq!(Insets::from([8.0, 16.0]), Insets::symmetric(8.0, 16.0));
/// assert_eq!(
///     Insets::from([1.0, 2.0, 3.0, 4.0]),
///     Insets::new(1.0, 2.0, 3.0, 4.0),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Insets {
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Left inset.
    pub left: f64,
}

impl Insets {
    /// Zero insets on all sides.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates insets with explicit values for each side.
    #[must_use]
    #[inline]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets on all sides.
    #[must_use]
    #[inline]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates insets from vertical and horizontal values.
    #[must_use]
    #[inline]
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

impl From<f64> for Insets {
    #[inline]
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

impl From<[f64; 2]> for Insets {
    #[inline]
    fn from([vertical, horizontal]: [f64; 2]) -> Self {
        Self::symmetric(vertical, horizontal)
    }
}

impl From<[f64; 4]> for Insets {
    #[inline]
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

impl fmt::Display for Insets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.top, self.right, self.bottom, self.left
        )
    }
}
