// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length values and the raw-input parser.
//!
//! This module provides [`Length`], the canonical representation of a single
//! dimensional attribute value, and [`UnitFamily`] for declaring which unit
//! a property interprets its numbers in.

use alloc::string::{String, ToString};
use core::fmt;

/// The unit family a property interprets numeric values in.
///
/// A property is declared in exactly one unit family for its entire
/// lifetime; individual values never carry a unit tag of their own.
/// Unit suffixes in raw string input (`"100vp"`, `"16fp"`) are accepted
/// for readability but ignored; they are documentation, not semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    /// Unitless counts and ratios (e.g. opacity).
    Count,
    /// Density-independent length units.
    Dp,
    /// Font-relative length units.
    Fp,
}

impl UnitFamily {
    /// Returns the suffix conventionally used when displaying values of
    /// this family, or `""` for unitless properties.
    #[must_use]
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Count => "",
            Self::Dp => "dp",
            Self::Fp => "fp",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => f.write_str("count"),
            Self::Dp => f.write_str("dp"),
            Self::Fp => f.write_str("fp"),
        }
    }
}

/// A single length value.
///
/// `Length` is a tagged union over the three shapes a dimensional attribute
/// can take:
///
/// - [`Length::Dp`] - a canonical number, in the owning property's unit
///   family.
/// - [`Length::Percent`] - a percentage string stored verbatim. Percentages
///   are relative to a container that this crate knows nothing about, so
///   they are carried unparsed for a later layout pass.
/// - [`Length::Resource`] - an opaque indirect reference, resolved by an
///   external theme/resource system.
///
/// # Example
///
/// ```rust
/// use canopy_value::Length;
///
/// let w = Length::parse("240");
/// assert_eq!(w.as_dp(), Some(240.0));
///
/// let p = Length::parse("50%");
/// assert_eq!(p.as_dp(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Length {
    /// A canonical numeric value in the owning property's unit family.
    Dp(f64),
    /// A percentage string, stored verbatim (including the `%`).
    Percent(String),
    /// An opaque resource reference, stored verbatim.
    Resource(String),
}

impl Length {
    /// Parses raw string input into a [`Length`].
    ///
    /// The accepted grammar is `<digits-and-dots>` followed by an optional
    /// `vp`, `px`, or `fp` suffix (ignored) or a `%` (kept verbatim).
    /// Anything else (including negative or exponent notation) degrades
    /// to [`Length::Resource`] pass-through rather than an error.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(body) = raw.strip_suffix('%')
            && parse_plain_number(body).is_some()
        {
            return Self::Percent(raw.to_string());
        }

        let body = raw
            .strip_suffix("vp")
            .or_else(|| raw.strip_suffix("px"))
            .or_else(|| raw.strip_suffix("fp"))
            .unwrap_or(raw);
        if let Some(n) = parse_plain_number(body) {
            return Self::Dp(n);
        }

        Self::Resource(raw.to_string())
    }

    /// Returns the numeric value when this length is parseable to a number.
    ///
    /// Percentages and resource references return `None`; they bypass all
    /// numeric range policies.
    #[must_use]
    #[inline]
    pub fn as_dp(&self) -> Option<f64> {
        match self {
            Self::Dp(n) => Some(*n),
            Self::Percent(_) | Self::Resource(_) => None,
        }
    }

    /// Returns `true` if this length is an opaque resource reference.
    #[must_use]
    #[inline]
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }
}

impl From<f64> for Length {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Dp(value)
    }
}

impl From<&str> for Length {
    #[inline]
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dp(n) => write!(f, "{n}"),
            Self::Percent(s) | Self::Resource(s) => f.write_str(s),
        }
    }
}

/// Parses a string of ASCII digits and dots as a non-negative number.
///
/// Deliberately narrower than `f64::from_str`: signs, exponents, `inf`,
/// and `NaN` all fail here and fall through to resource pass-through.
fn parse_plain_number(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse().ok()
}
