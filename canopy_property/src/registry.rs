// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute registry.
//!
//! This module provides [`AttrRegistry`] for registering attributes and
//! looking up their metadata by ID or name.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::id::{Attr, AttrId};
use crate::metadata::AttrMetadata;
use crate::value::AttrKind;

/// A registration entry for an attribute.
#[derive(Clone, Debug)]
pub struct AttrRegistration {
    name: &'static str,
    metadata: AttrMetadata,
}

impl AttrRegistration {
    /// Returns the attribute name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the attribute's declared metadata.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> &AttrMetadata {
        &self.metadata
    }
}

/// A registry of attribute descriptors.
///
/// A component schema registers each of its attributes once, up front,
/// and receives typed [`Attr<T>`] keys back. The registry is the single
/// source of truth for defaults, unit families, and range policies.
///
/// # Example
///
/// ```rust
/// use canopy_property::{AttrMetadataBuilder, AttrRegistry};
/// use canopy_value::{Length, UnitFamily};
///
/// let mut registry = AttrRegistry::new();
/// let width = registry.register::<Length>(
///     "width",
///     AttrMetadataBuilder::new(Length::Dp(200.0))
///         .unit(UnitFamily::Dp)
///         .reject_below(0.0)
///         .build(),
/// );
///
/// assert_eq!(registry.name(width.id()), Some("width"));
/// assert_eq!(registry.by_name("width"), Some(width.id()));
/// ```
#[derive(Clone, Default)]
pub struct AttrRegistry {
    attrs: Vec<AttrRegistration>,
    by_name: HashMap<&'static str, AttrId>,
}

impl AttrRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new attribute with the given name and metadata.
    ///
    /// Returns a typed [`Attr<T>`] key for accessing the attribute.
    ///
    /// # Panics
    ///
    /// Panics if an attribute with the same name is already registered,
    /// if the metadata's default value is not of kind `T`, or if the u16
    /// ID space is exhausted.
    pub fn register<T: AttrKind>(
        &mut self,
        name: &'static str,
        metadata: AttrMetadata,
    ) -> Attr<T> {
        assert!(
            !self.by_name.contains_key(name),
            "Attribute '{name}' is already registered"
        );
        assert!(
            metadata.default_value().kind() == T::KIND,
            "Attribute '{name}' declared as {} but its default is {}",
            T::KIND,
            metadata.default_value().kind()
        );
        assert!(
            self.attrs.len() < u16::MAX as usize,
            "Too many attributes registered (max {})",
            u16::MAX
        );

        #[expect(clippy::cast_possible_truncation, reason = "checked above")]
        let id = AttrId::new(self.attrs.len() as u16);

        self.attrs.push(AttrRegistration { name, metadata });
        self.by_name.insert(name, id);

        Attr::from_id(id)
    }

    /// Returns the number of registered attributes.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if no attributes are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<AttrId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of an attribute.
    #[must_use]
    pub fn name(&self, id: AttrId) -> Option<&'static str> {
        self.attrs.get(id.index() as usize).map(|r| r.name)
    }

    /// Returns the registration for an attribute.
    #[must_use]
    pub fn get(&self, id: AttrId) -> Option<&AttrRegistration> {
        self.attrs.get(id.index() as usize)
    }

    /// Returns the metadata for an attribute.
    #[must_use]
    pub fn metadata(&self, id: AttrId) -> Option<&AttrMetadata> {
        self.get(id).map(AttrRegistration::metadata)
    }

    /// Returns an iterator over all registered attributes.
    pub fn iter(&self) -> impl Iterator<Item = (AttrId, &AttrRegistration)> {
        self.attrs.iter().enumerate().map(|(i, r)| {
            #[expect(clippy::cast_possible_truncation, reason = "index < len < u16::MAX")]
            (AttrId::new(i as u16), r)
        })
    }
}

impl core::fmt::Debug for AttrRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AttrRegistry")
            .field("count", &self.attrs.len())
            .field("attrs", &self.attrs.iter().map(|r| r.name).collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
