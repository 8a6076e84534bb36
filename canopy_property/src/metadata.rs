// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute metadata definitions.
//!
//! This module provides [`AttrMetadata`] for storing an attribute's
//! declared contract (default value, unit family, range policy, and
//! whether a distinct "inherit" state exists) and [`AttrMetadataBuilder`]
//! for ergonomic construction.

use canopy_value::UnitFamily;

use crate::policy::RangePolicy;
use crate::value::AttrValue;

/// The declared contract of a single attribute.
///
/// # Example
///
/// ```rust
/// use canopy_property::AttrMetadataBuilder;
/// use canopy_value::{Length, UnitFamily};
///
/// let metadata = AttrMetadataBuilder::new(Length::Dp(16.0))
///     .unit(UnitFamily::Fp)
///     .clamp(0.0, 1000.0)
///     .build();
///
/// assert_eq!(metadata.unit(), UnitFamily::Fp);
/// assert!(!metadata.supports_inherit());
/// ```
#[derive(Clone, Debug)]
pub struct AttrMetadata {
    default: AttrValue,
    unit: UnitFamily,
    policy: RangePolicy,
    supports_inherit: bool,
}

impl AttrMetadata {
    /// Creates metadata with the given default value and no constraints.
    #[must_use]
    pub fn new(default: impl Into<AttrValue>) -> Self {
        Self {
            default: default.into(),
            unit: UnitFamily::Count,
            policy: RangePolicy::Unbounded,
            supports_inherit: false,
        }
    }

    /// Returns the documented default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &AttrValue {
        &self.default
    }

    /// Returns the unit family this attribute's numbers are read in.
    #[must_use]
    #[inline]
    pub fn unit(&self) -> UnitFamily {
        self.unit
    }

    /// Returns the out-of-range policy.
    #[must_use]
    #[inline]
    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    /// Returns whether "inherit from context" is a distinct state for this
    /// attribute, separate from "restore default".
    #[must_use]
    #[inline]
    pub fn supports_inherit(&self) -> bool {
        self.supports_inherit
    }
}

/// Builder for [`AttrMetadata`].
///
/// # Example
///
/// ```rust
/// use canopy_property::AttrMetadataBuilder;
/// use canopy_value::{Length, UnitFamily};
///
/// let metadata = AttrMetadataBuilder::new(Length::Dp(200.0))
///     .unit(UnitFamily::Dp)
///     .reject_below(0.0)
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct AttrMetadataBuilder {
    metadata: AttrMetadata,
}

impl AttrMetadataBuilder {
    /// Creates a new builder with the given default value.
    #[must_use]
    pub fn new(default: impl Into<AttrValue>) -> Self {
        Self {
            metadata: AttrMetadata::new(default),
        }
    }

    /// Sets the unit family.
    #[must_use]
    pub fn unit(mut self, unit: UnitFamily) -> Self {
        self.metadata.unit = unit;
        self
    }

    /// Declares a clamp policy over `[min, max]`.
    #[must_use]
    pub fn clamp(mut self, min: f64, max: f64) -> Self {
        self.metadata.policy = RangePolicy::Clamp { min, max };
        self
    }

    /// Declares a reject policy for values below `min`.
    #[must_use]
    pub fn reject_below(mut self, min: f64) -> Self {
        self.metadata.policy = RangePolicy::Reject { min };
        self
    }

    /// Declares that "inherit from context" is a distinct state for this
    /// attribute.
    #[must_use]
    pub fn supports_inherit(mut self, supports: bool) -> Self {
        self.metadata.supports_inherit = supports;
        self
    }

    /// Builds the [`AttrMetadata`].
    #[must_use]
    pub fn build(self) -> AttrMetadata {
        self.metadata
    }
}
