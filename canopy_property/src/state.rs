// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse attribute configuration state.
//!
//! This module provides [`AttrState`], the per-builder record of every
//! attribute's current value, and [`Resolution`], the outcome of reading
//! one back.
//!
//! # Implementation
//!
//! Storage is a sorted vector with binary search rather than a hash map:
//! contiguous memory, no hash buckets, O(log n) lookup for the small
//! attribute counts a component schema declares. The first few slots are
//! stored inline via `SmallVec`.
//!
//! # Slot Origins
//!
//! Each occupied slot remembers how it was written:
//!
//! - **Explicit** - set by the caller. Survives dependency recomputation.
//! - **Derived** - a recomputed default (e.g. a corner radius that follows
//!   the shape variant). Freely overwritten by later recomputations, never
//!   by them once the caller has set the attribute explicitly.
//! - **Inherit** - the override was removed in favor of contextual
//!   resolution. Only legal for attributes whose metadata declares
//!   [`supports_inherit`](crate::AttrMetadata::supports_inherit); strictly
//!   different from clearing back to the default.
//!
//! A vacant slot resolves to the registry default, so every registered
//! attribute always has a resolvable value.

use smallvec::SmallVec;

use crate::error::AttrError;
use crate::id::{Attr, AttrId};
use crate::registry::AttrRegistry;
use crate::value::{AttrKind, AttrValue};

/// Inline capacity for attribute slots.
///
/// Most builders override fewer than 8 attributes, so this avoids heap
/// allocation in the common case.
const INLINE_CAPACITY: usize = 8;

/// How an occupied slot was written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Set explicitly by the caller.
    Explicit,
    /// Recomputed as a dependent default.
    Derived,
    /// Override removed; resolve from context.
    Inherit,
}

/// One occupied slot.
#[derive(Clone, Debug)]
enum Slot {
    Explicit(AttrValue),
    Derived(AttrValue),
    Inherit,
}

impl Slot {
    fn origin(&self) -> Origin {
        match self {
            Self::Explicit(_) => Origin::Explicit,
            Self::Derived(_) => Origin::Derived,
            Self::Inherit => Origin::Inherit,
        }
    }

    fn value(&self) -> Option<&AttrValue> {
        match self {
            Self::Explicit(value) | Self::Derived(value) => Some(value),
            Self::Inherit => None,
        }
    }
}

/// The outcome of resolving an attribute.
///
/// Attributes that support a distinct inherit state resolve to
/// [`Resolution::Inherit`] once the override has been removed; everything
/// else always resolves to a concrete value (explicit, derived, or the
/// registry default).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution<T> {
    /// A concrete value.
    Value(T),
    /// Resolve from the surrounding context instead.
    Inherit,
}

impl<T> Resolution<T> {
    /// Returns the concrete value, or `None` for [`Resolution::Inherit`].
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Inherit => None,
        }
    }

    /// Returns `true` for [`Resolution::Inherit`].
    #[must_use]
    #[inline]
    pub fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }
}

/// Sparse per-builder attribute state.
///
/// All writes flow through [`AttrState::set`] (or its erased twin
/// [`AttrState::set_value`]), which is the single place the attribute's
/// kind check and range policy are applied. A rejected write leaves the
/// state untouched.
///
/// # Example
///
/// ```rust
/// use canopy_property::{AttrMetadataBuilder, AttrRegistry, AttrState, Resolution};
/// use canopy_value::Length;
///
/// let mut registry = AttrRegistry::new();
/// let font_size = registry.register(
///     "font_size",
///     AttrMetadataBuilder::new(Length::Dp(16.0)).clamp(0.0, 1000.0).build(),
/// );
///
/// let mut state = AttrState::new();
///
/// // Vacant slots resolve to the registry default.
/// assert_eq!(
///     state.resolution(font_size, &registry),
///     Resolution::Value(Length::Dp(16.0)),
/// );
///
/// // Out-of-range input clamps silently for clamp-policy attributes.
/// state.set(font_size, Length::Dp(1500.0), &registry).unwrap();
/// assert_eq!(
///     state.resolution(font_size, &registry),
///     Resolution::Value(Length::Dp(1000.0)),
/// );
///
/// // Clearing restores the default, however often the value was set.
/// state.clear(font_size);
/// assert_eq!(
///     state.resolution(font_size, &registry),
///     Resolution::Value(Length::Dp(16.0)),
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct AttrState {
    /// Occupied slots, sorted by [`AttrId`] for binary search lookup.
    entries: SmallVec<[(AttrId, Slot); INLINE_CAPACITY]>,
}

impl AttrState {
    /// Creates an empty state; every attribute resolves to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute has an occupied slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the attribute IDs with occupied slots.
    pub fn attr_ids(&self) -> impl Iterator<Item = AttrId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    #[inline]
    fn find(&self, id: AttrId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&id, |(aid, _)| *aid)
    }

    fn put(&mut self, id: AttrId, slot: Slot) {
        match self.find(id) {
            Ok(idx) => self.entries[idx].1 = slot,
            Err(idx) => self.entries.insert(idx, (id, slot)),
        }
    }

    /// Sets an explicit value for a typed attribute.
    ///
    /// The value's kind is checked against the registration and its
    /// numeric payload (if any) is passed through the attribute's range
    /// policy: clamp-policy attributes store the clamped value silently,
    /// reject-policy attributes fail without mutating the state.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry`.
    pub fn set<T: AttrKind>(
        &mut self,
        attr: Attr<T>,
        value: T,
        registry: &AttrRegistry,
    ) -> Result<(), AttrError> {
        self.set_value(attr.id(), value.into_value(), registry)
    }

    /// Sets an explicit value through the erased interface.
    ///
    /// Same contract as [`AttrState::set`]; this is the entry point for
    /// dynamic callers that address attributes by ID.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry`.
    pub fn set_value(
        &mut self,
        id: AttrId,
        value: AttrValue,
        registry: &AttrRegistry,
    ) -> Result<(), AttrError> {
        let registration = registry
            .get(id)
            .unwrap_or_else(|| panic!("Attribute {id:?} not found in registry"));
        let metadata = registration.metadata();

        let expected = metadata.default_value().kind();
        if value.kind() != expected {
            return Err(AttrError::KindMismatch {
                attr: registration.name(),
                expected,
                got: value.kind(),
            });
        }

        let value = match value.as_dp() {
            Some(n) => {
                let n = metadata.policy().apply(registration.name(), n)?;
                value.with_dp(n)
            }
            None => value,
        };

        self.put(id, Slot::Explicit(value));
        Ok(())
    }

    /// Writes a derived default for a typed attribute.
    ///
    /// Derived writes respect explicit overrides: if the caller has set
    /// the attribute explicitly, this is a no-op and returns `false`.
    /// The value is clamped (never rejected); derived defaults are
    /// produced by a schema, not by callers.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry`.
    pub fn set_derived<T: AttrKind>(
        &mut self,
        attr: Attr<T>,
        value: T,
        registry: &AttrRegistry,
    ) -> bool {
        let id = attr.id();
        if let Ok(idx) = self.find(id)
            && self.entries[idx].1.origin() == Origin::Explicit
        {
            return false;
        }

        let metadata = registry
            .metadata(id)
            .unwrap_or_else(|| panic!("Attribute {id:?} not found in registry"));
        let value = value.into_value();
        let value = match value.as_dp() {
            Some(n) => {
                let n = metadata.policy().clamp_only(n);
                value.with_dp(n)
            }
            None => value,
        };

        self.put(id, Slot::Derived(value));
        true
    }

    /// Removes a derived slot, if one is present.
    ///
    /// Explicit and inherit slots are left alone. Returns `true` if a
    /// slot was removed.
    pub fn clear_derived(&mut self, id: AttrId) -> bool {
        if let Ok(idx) = self.find(id)
            && self.entries[idx].1.origin() == Origin::Derived
        {
            self.entries.remove(idx);
            return true;
        }
        false
    }

    /// Clears any slot for a typed attribute, restoring the default.
    ///
    /// Returns `true` if a slot was removed.
    pub fn clear<T: AttrKind>(&mut self, attr: Attr<T>) -> bool {
        self.clear_value(attr.id())
    }

    /// Clears any slot through the erased interface.
    pub fn clear_value(&mut self, id: AttrId) -> bool {
        if let Ok(idx) = self.find(id) {
            self.entries.remove(idx);
            true
        } else {
            false
        }
    }

    /// Marks a typed attribute as inherited, removing any override.
    ///
    /// This is strictly different from [`AttrState::clear`]: the
    /// attribute stops resolving to its default and instead resolves to
    /// [`Resolution::Inherit`], for an external context to fill in.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry`, or if its
    /// metadata does not declare a distinct inherit state.
    pub fn set_inherit<T: AttrKind>(&mut self, attr: Attr<T>, registry: &AttrRegistry) {
        let id = attr.id();
        let metadata = registry
            .metadata(id)
            .unwrap_or_else(|| panic!("Attribute {id:?} not found in registry"));
        assert!(
            metadata.supports_inherit(),
            "Attribute {:?} has no distinct inherit state",
            registry.name(id)
        );
        self.put(id, Slot::Inherit);
    }

    /// Returns how a typed attribute's slot was written, or `None` when
    /// the slot is vacant (the attribute resolves to its default).
    #[must_use]
    pub fn origin<T: AttrKind>(&self, attr: Attr<T>) -> Option<Origin> {
        self.find(attr.id())
            .ok()
            .map(|idx| self.entries[idx].1.origin())
    }

    /// Returns `true` if the attribute has an explicit override.
    #[must_use]
    pub fn has_explicit<T: AttrKind>(&self, attr: Attr<T>) -> bool {
        self.origin(attr) == Some(Origin::Explicit)
    }

    /// Gets the stored value for a typed attribute, if any.
    ///
    /// Vacant and inherit slots return `None`; defaults are the
    /// registry's concern, via [`AttrState::resolution`].
    #[must_use]
    pub fn get<T: AttrKind>(&self, attr: Attr<T>) -> Option<T> {
        self.get_value(attr.id()).and_then(T::from_value)
    }

    /// Gets the stored erased value for an attribute, if any.
    #[must_use]
    pub fn get_value(&self, id: AttrId) -> Option<&AttrValue> {
        self.find(id)
            .ok()
            .and_then(|idx| self.entries[idx].1.value())
    }

    /// Resolves a typed attribute: explicit or derived value, else
    /// [`Resolution::Inherit`] for an inherit slot, else the registry
    /// default.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry` or was
    /// registered with a different value type.
    #[must_use]
    pub fn resolution<T: AttrKind>(
        &self,
        attr: Attr<T>,
        registry: &AttrRegistry,
    ) -> Resolution<T> {
        match self.resolution_value(attr.id(), registry) {
            Resolution::Value(value) => Resolution::Value(
                T::from_value(value)
                    .unwrap_or_else(|| panic!("Attribute {:?} stored with a different type", attr)),
            ),
            Resolution::Inherit => Resolution::Inherit,
        }
    }

    /// Resolves an attribute through the erased interface.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is not registered in `registry`.
    #[must_use]
    pub fn resolution_value<'a>(
        &'a self,
        id: AttrId,
        registry: &'a AttrRegistry,
    ) -> Resolution<&'a AttrValue> {
        if let Ok(idx) = self.find(id) {
            return match self.entries[idx].1.value() {
                Some(value) => Resolution::Value(value),
                None => Resolution::Inherit,
            };
        }
        let metadata = registry
            .metadata(id)
            .unwrap_or_else(|| panic!("Attribute {id:?} not found in registry"));
        Resolution::Value(metadata.default_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::AttrMetadataBuilder;
    use alloc::vec::Vec;
    use canopy_value::Length;

    fn setup() -> (AttrRegistry, Attr<Length>, Attr<Length>, Attr<f64>) {
        let mut registry = AttrRegistry::new();
        let width = registry.register(
            "width",
            AttrMetadataBuilder::new(Length::Dp(200.0))
                .reject_below(0.0)
                .build(),
        );
        let font_size = registry.register(
            "font_size",
            AttrMetadataBuilder::new(Length::Dp(16.0))
                .clamp(0.0, 1000.0)
                .build(),
        );
        let opacity = registry.register(
            "opacity",
            AttrMetadataBuilder::new(1.0_f64)
                .clamp(0.0, 1.0)
                .supports_inherit(true)
                .build(),
        );
        (registry, width, font_size, opacity)
    }

    #[test]
    fn vacant_resolves_to_default() {
        let (registry, width, _, _) = setup();
        let state = AttrState::new();

        assert!(state.is_empty());
        assert_eq!(state.origin(width), None);
        assert_eq!(
            state.resolution(width, &registry),
            Resolution::Value(Length::Dp(200.0)),
        );
    }

    #[test]
    fn set_stores_explicit() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();

        state.set(width, Length::Dp(120.0), &registry).unwrap();
        assert_eq!(state.origin(width), Some(Origin::Explicit));
        assert_eq!(state.get(width), Some(Length::Dp(120.0)));
    }

    #[test]
    fn reject_policy_leaves_state_untouched() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();
        state.set(width, Length::Dp(120.0), &registry).unwrap();

        let err = state.set(width, Length::Dp(-5.0), &registry).unwrap_err();
        assert_eq!(
            err,
            AttrError::OutOfRange {
                attr: "width",
                value: -5.0,
                min: 0.0,
            },
        );
        // Prior value survives the failed call.
        assert_eq!(state.get(width), Some(Length::Dp(120.0)));
    }

    #[test]
    fn clamp_policy_is_silent() {
        let (registry, _, font_size, _) = setup();
        let mut state = AttrState::new();

        state.set(font_size, Length::Dp(1500.0), &registry).unwrap();
        assert_eq!(state.get(font_size), Some(Length::Dp(1000.0)));

        state.set(font_size, Length::Dp(-3.0), &registry).unwrap();
        assert_eq!(state.get(font_size), Some(Length::Dp(0.0)));
    }

    #[test]
    fn percent_and_resource_bypass_policy() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();

        // A percentage on a reject-policy attribute is stored as-is.
        state
            .set(width, Length::Percent("50%".into()), &registry)
            .unwrap();
        assert_eq!(state.get(width), Some(Length::Percent("50%".into())));

        state
            .set(width, Length::Resource("app.float.w".into()), &registry)
            .unwrap();
        assert_eq!(
            state.get(width),
            Some(Length::Resource("app.float.w".into())),
        );
    }

    #[test]
    fn kind_mismatch_via_erased_interface() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();

        let err = state
            .set_value(width.id(), AttrValue::Flag(true), &registry)
            .unwrap_err();
        assert_eq!(
            err,
            AttrError::KindMismatch {
                attr: "width",
                expected: crate::ValueKind::Length,
                got: crate::ValueKind::Flag,
            },
        );
        assert!(state.is_empty());
    }

    #[test]
    fn clear_restores_default_idempotently() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();

        state.set(width, Length::Dp(120.0), &registry).unwrap();
        state.set(width, Length::Dp(130.0), &registry).unwrap();
        assert!(state.clear(width));
        assert_eq!(
            state.resolution(width, &registry),
            Resolution::Value(Length::Dp(200.0)),
        );

        // Clearing again is a no-op.
        assert!(!state.clear(width));
        assert_eq!(
            state.resolution(width, &registry),
            Resolution::Value(Length::Dp(200.0)),
        );
    }

    #[test]
    fn derived_never_overwrites_explicit() {
        let (registry, _, font_size, _) = setup();
        let mut state = AttrState::new();

        assert!(state.set_derived(font_size, Length::Dp(20.0), &registry));
        assert_eq!(state.origin(font_size), Some(Origin::Derived));
        assert_eq!(state.get(font_size), Some(Length::Dp(20.0)));

        state.set(font_size, Length::Dp(18.0), &registry).unwrap();
        assert!(!state.set_derived(font_size, Length::Dp(20.0), &registry));
        assert_eq!(state.get(font_size), Some(Length::Dp(18.0)));
    }

    #[test]
    fn derived_overwrites_derived() {
        let (registry, _, font_size, _) = setup();
        let mut state = AttrState::new();

        assert!(state.set_derived(font_size, Length::Dp(20.0), &registry));
        assert!(state.set_derived(font_size, Length::Dp(0.0), &registry));
        assert_eq!(state.get(font_size), Some(Length::Dp(0.0)));
    }

    #[test]
    fn clear_derived_leaves_explicit_alone() {
        let (registry, _, font_size, _) = setup();
        let mut state = AttrState::new();

        state.set(font_size, Length::Dp(18.0), &registry).unwrap();
        assert!(!state.clear_derived(font_size.id()));
        assert_eq!(state.get(font_size), Some(Length::Dp(18.0)));

        state.clear(font_size);
        state.set_derived(font_size, Length::Dp(20.0), &registry);
        assert!(state.clear_derived(font_size.id()));
        assert_eq!(state.origin(font_size), None);
    }

    #[test]
    fn inherit_is_distinct_from_default() {
        let (registry, _, _, opacity) = setup();
        let mut state = AttrState::new();

        state.set(opacity, 0.5, &registry).unwrap();
        state.set_inherit(opacity, &registry);

        assert_eq!(state.origin(opacity), Some(Origin::Inherit));
        assert_eq!(state.resolution(opacity, &registry), Resolution::Inherit);
        assert!(state.resolution(opacity, &registry).is_inherit());

        // Clearing afterwards goes back to the default, not to inherit.
        state.clear(opacity);
        assert_eq!(
            state.resolution(opacity, &registry),
            Resolution::Value(1.0),
        );
    }

    #[test]
    #[should_panic(expected = "no distinct inherit state")]
    fn inherit_requires_metadata_opt_in() {
        let (registry, width, _, _) = setup();
        let mut state = AttrState::new();
        state.set_inherit(width, &registry);
    }

    #[test]
    fn erased_resolution_walks_all_attrs() {
        let (registry, width, font_size, _) = setup();
        let mut state = AttrState::new();
        state.set(width, Length::Dp(100.0), &registry).unwrap();

        let resolved: Vec<_> = registry
            .iter()
            .map(|(id, r)| (r.name(), state.resolution_value(id, &registry)))
            .collect();
        assert_eq!(resolved.len(), 3);
        assert_eq!(
            resolved[0].1,
            Resolution::Value(&AttrValue::Length(Length::Dp(100.0))),
        );
        // Untouched attributes resolve to registry defaults.
        assert_eq!(
            state.resolution(font_size, &registry),
            Resolution::Value(Length::Dp(16.0)),
        );
    }

    #[test]
    fn slots_stay_sorted() {
        let (registry, width, font_size, opacity) = setup();
        let mut state = AttrState::new();

        state.set(opacity, 0.5, &registry).unwrap();
        state.set(width, Length::Dp(1.0), &registry).unwrap();
        state.set(font_size, Length::Dp(2.0), &registry).unwrap();

        let ids: Vec<_> = state.attr_ids().map(AttrId::index).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(state.len(), 3);
    }
}
