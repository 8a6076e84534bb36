// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-attribute numeric range policies.
//!
//! Whether an out-of-range value is clamped or rejected is a per-attribute
//! contract, declared once in the attribute's metadata and applied in
//! exactly one place ([`AttrState::set`]). Setters, current or deprecated,
//! never carry range logic of their own.
//!
//! [`AttrState::set`]: crate::AttrState::set

use crate::error::AttrError;

/// The out-of-range outcome for an attribute's numeric values.
///
/// - [`RangePolicy::Clamp`] silently rounds into range. Used where
///   out-of-range input is a benign authoring mistake (font sizes, radii,
///   icon sizes, opacity).
/// - [`RangePolicy::Reject`] raises [`AttrError::OutOfRange`] below the
///   lower bound, with no upper enforcement. Used where silent clamping
///   would mask a caller bug (dimensional sizes such as width and height).
///
/// Only numeric payloads are checked; percentage and resource values
/// bypass the policy entirely.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RangePolicy {
    /// No numeric constraint.
    Unbounded,
    /// Clamp into `[min, max]`, silently.
    Clamp {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// Reject values below `min` with an error; no upper bound.
    Reject {
        /// Inclusive lower bound.
        min: f64,
    },
}

impl RangePolicy {
    /// Applies this policy to a numeric value for the named attribute.
    #[inline]
    pub fn apply(self, attr: &'static str, n: f64) -> Result<f64, AttrError> {
        match self {
            Self::Unbounded => Ok(n),
            Self::Clamp { min, max } => Ok(n.clamp(min, max)),
            Self::Reject { min } => {
                if n < min {
                    Err(AttrError::OutOfRange {
                        attr,
                        value: n,
                        min,
                    })
                } else {
                    Ok(n)
                }
            }
        }
    }

    /// Applies only the clamping half of this policy.
    ///
    /// Used for derived-default writes, which are produced internally and
    /// must never fail.
    #[must_use]
    #[inline]
    pub fn clamp_only(self, n: f64) -> f64 {
        match self {
            Self::Clamp { min, max } => n.clamp(min, max),
            Self::Unbounded | Self::Reject { .. } => n,
        }
    }
}
