// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute configuration errors.
//!
//! All failures are immediate and local to a single setter call; a failed
//! call never mutates configuration state.

use core::fmt;

use crate::value::ValueKind;

/// Error raised when a value cannot be stored for an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrError {
    /// A reject-policy attribute received a numeric value below its lower
    /// bound.
    OutOfRange {
        /// The attribute being set.
        attr: &'static str,
        /// The rejected value.
        value: f64,
        /// The attribute's lower bound.
        min: f64,
    },
    /// The supplied value's shape does not match the attribute's declared
    /// value kind.
    KindMismatch {
        /// The attribute being set.
        attr: &'static str,
        /// The kind the attribute is declared with.
        expected: ValueKind,
        /// The kind of the supplied value.
        got: ValueKind,
    },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { attr, value, min } => {
                write!(f, "{attr} must be at least {min}, got {value}")
            }
            Self::KindMismatch {
                attr,
                expected,
                got,
            } => {
                write!(f, "{attr} expects a {expected} value, got {got}")
            }
        }
    }
}

impl core::error::Error for AttrError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn out_of_range_names_attr_and_value() {
        let err = AttrError::OutOfRange {
            attr: "width",
            value: -5.0,
            min: 0.0,
        };
        assert_eq!(err.to_string(), "width must be at least 0, got -5");
    }

    #[test]
    fn kind_mismatch_names_both_kinds() {
        let err = AttrError::KindMismatch {
            attr: "enabled",
            expected: ValueKind::Flag,
            got: ValueKind::Length,
        };
        assert_eq!(err.to_string(), "enabled expects a flag value, got length");
    }
}
