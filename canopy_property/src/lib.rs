// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute registration, metadata, and configuration state.
//!
//! ## Overview
//!
//! A component schema registers its attributes once with an
//! [`AttrRegistry`], declaring for each one a documented default, a unit
//! family, an out-of-range [`RangePolicy`], and whether a distinct
//! "inherit" state exists. Registration hands back typed [`Attr<T>`] keys.
//!
//! Per-instance configuration lives in an [`AttrState`]: a sparse record of
//! overrides over the registry's defaults. All writes funnel through
//! [`AttrState::set`], where the kind check and range policy are applied in
//! exactly one place. Reads go through [`AttrState::resolution`], which
//! falls back to the registered default for untouched attributes, so a
//! resolved configuration is always complete.
//!
//! ```rust
//! use canopy_property::{AttrMetadataBuilder, AttrRegistry, AttrState, Resolution};
//! use canopy_value::{Length, UnitFamily};
//!
//! let mut registry = AttrRegistry::new();
//! let width = registry.register(
//!     "width",
//!     AttrMetadataBuilder::new(Length::Dp(200.0))
//!         .unit(UnitFamily::Dp)
//!         .reject_below(0.0)
//!         .build(),
//! );
//!
//! let mut state = AttrState::new();
//! state.set(width, Length::Dp(120.0), &registry)?;
//! assert_eq!(
//!     state.resolution(width, &registry),
//!     Resolution::Value(Length::Dp(120.0)),
//! );
//!
//! // Negative widths are rejected, and the prior value survives.
//! assert!(state.set(width, Length::Dp(-5.0), &registry).is_err());
//! assert_eq!(
//!     state.resolution(width, &registry),
//!     Resolution::Value(Length::Dp(120.0)),
//! );
//! # Ok::<(), canopy_property::AttrError>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod error;
mod id;
mod metadata;
mod policy;
mod registry;
mod state;
mod value;

pub use error::AttrError;
pub use id::{Attr, AttrId};
pub use metadata::{AttrMetadata, AttrMetadataBuilder};
pub use policy::RangePolicy;
pub use registry::{AttrRegistration, AttrRegistry};
pub use state::{AttrState, Origin, Resolution};
pub use value::{AttrKind, AttrValue, ValueKind};
