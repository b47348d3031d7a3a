//! Filter registry and evaluation engine.
//!
//! [`FilterSet`] stores an insertion-ordered list of `(key, group, predicate)`
//! entries and folds them into one combined predicate on demand: predicates
//! sharing a group are OR-combined, distinct groups are AND-combined.
//! Grouping is recomputed from the live entries on every evaluation, so
//! removed filters never leak into a later call.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{FilterError, Result};
use crate::ident::random_ident;
use crate::predicate::{Predicate, SharedPredicate};

/// Receipt for a registered filter.
///
/// Carries the key and group under which the entry was stored, including
/// generated ones. The key is the primary removal path; keep the handle if
/// the filter has to be removed later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterHandle {
    key: String,
    group: String,
}

impl FilterHandle {
    /// Key identifying the entry for [`FilterSet::remove`].
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Group the entry is OR-combined within.
    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }
}

struct FilterEntry<T> {
    key: String,
    group: String,
    predicate: SharedPredicate<T>,
}

/// A registry of grouped predicates over `T`.
///
/// Evaluation semantics: an element passes when, for every group, at least
/// one predicate of that group accepts it (OR within a group, AND across
/// groups).
///
/// A set with no filters excludes *everything*: [`FilterSet::apply_filters`]
/// on an empty set returns an empty result rather than passing the input
/// through. Callers expecting identity behavior for an unconfigured set must
/// check [`FilterSet::is_empty`] first.
///
/// # Example
///
/// ```
/// use predset::FilterSet;
///
/// let mut filters = FilterSet::new();
/// // Two groups: both must hold.
/// filters.add_with(|x: &i32| *x > 7, "", "lower-bound");
/// filters.add_with(|x: &i32| *x < 10, "", "upper-bound");
///
/// assert_eq!(filters.apply_filters(vec![0, 1, 3, 4, 9, 5, 17, 8]), vec![9, 8]);
/// ```
pub struct FilterSet<T> {
    entries: Vec<FilterEntry<T>>,
}

impl<T> FilterSet<T> {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Adds a filter under a generated key and a generated singleton group.
    pub fn add<P>(&mut self, predicate: P) -> FilterHandle
    where
        P: Predicate<T> + 'static,
    {
        self.add_with(predicate, "", "")
    }

    /// Adds a filter under an explicit key and/or group.
    ///
    /// An empty `key` gets a random 6-character identifier. An empty `group`
    /// gets an independently generated identifier, so an ungrouped predicate
    /// always forms its own singleton group and is never OR-combined with
    /// other ungrouped predicates.
    pub fn add_with<P>(&mut self, predicate: P, key: &str, group: &str) -> FilterHandle
    where
        P: Predicate<T> + 'static,
    {
        self.add_shared(Arc::new(predicate), key, group)
    }

    /// Adds an already-shared predicate.
    ///
    /// Keeping a clone of the `Arc` lets the caller later remove exactly
    /// this entry with [`FilterSet::remove_predicate`].
    pub fn add_shared(
        &mut self,
        predicate: SharedPredicate<T>,
        key: &str,
        group: &str,
    ) -> FilterHandle {
        let key = if key.is_empty() {
            random_ident()
        } else {
            key.to_owned()
        };
        let group = if group.is_empty() {
            random_ident()
        } else {
            group.to_owned()
        };
        debug!(key = %key, group = %group, "filter added");
        self.entries.push(FilterEntry {
            key: key.clone(),
            group: group.clone(),
            predicate,
        });
        FilterHandle { key, group }
    }

    /// Adds a filter if one is present; `None` is a no-op, not an error.
    pub fn add_optional<P>(
        &mut self,
        predicate: Option<P>,
        key: &str,
        group: &str,
    ) -> Option<FilterHandle>
    where
        P: Predicate<T> + 'static,
    {
        predicate.map(|p| self.add_with(p, key, group))
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes every entry stored under `key`.
    ///
    /// Keys are not enforced unique, so this can remove more than one entry.
    /// Returns true iff at least one entry was removed; an empty key removes
    /// nothing.
    pub fn remove(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let removed = self.remove_where(|entry| entry.key == key);
        if removed > 0 {
            debug!(key = %key, removed, "filters removed by key");
        }
        removed > 0
    }

    /// Removes every entry belonging to `group`.
    ///
    /// Returns true iff at least one entry was removed; an empty group name
    /// removes nothing.
    pub fn remove_by_group(&mut self, group: &str) -> bool {
        if group.is_empty() {
            return false;
        }
        let removed = self.remove_where(|entry| entry.group == group);
        if removed > 0 {
            debug!(group = %group, removed, "filters removed by group");
        }
        removed > 0
    }

    /// Removes every entry whose stored predicate is pointer-equal to
    /// `predicate`.
    ///
    /// This matches only the exact `Arc` registered via
    /// [`FilterSet::add_shared`]; a separately constructed but
    /// equal-looking closure never matches. Prefer key-based removal.
    pub fn remove_predicate(&mut self, predicate: &SharedPredicate<T>) -> bool {
        let removed = self.remove_where(|entry| Arc::ptr_eq(&entry.predicate, predicate));
        if removed > 0 {
            debug!(removed, "filters removed by identity");
        }
        removed > 0
    }

    /// Removes the entry at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        let len = self.entries.len();
        if index >= len {
            return Err(FilterError::IndexOutOfRange { index, len });
        }
        let entry = self.entries.remove(index);
        debug!(index, key = %entry.key, "filter removed by position");
        Ok(())
    }

    /// Removes all entries unconditionally.
    pub fn reset(&mut self) {
        debug!(removed = self.entries.len(), "filter set reset");
        self.entries.clear();
    }

    fn remove_where<F>(&mut self, mut matches: F) -> usize
    where
        F: FnMut(&FilterEntry<T>) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !matches(entry));
        before - self.entries.len()
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of registered entries (not groups).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no filters are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct groups among the live entries.
    pub fn group_count(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| entry.group.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Applies the combined predicate to `items`, preserving input order.
    ///
    /// An empty set yields an empty result for any input — the deliberate
    /// exclude-everything-by-default policy, not identity pass-through. A
    /// panic inside a predicate propagates to the caller; no partial result
    /// is returned.
    ///
    /// ```
    /// use predset::FilterSet;
    ///
    /// let mut filters = FilterSet::new();
    /// assert!(filters.apply_filters(vec![1, 2, 3]).is_empty());
    ///
    /// filters.add_with(|x: &i32| *x > 10, "", "wide");
    /// filters.add_with(|x: &i32| *x == 1, "", "wide");
    /// assert_eq!(filters.apply_filters(vec![0, 1, 3, 17]), vec![1, 17]);
    /// ```
    pub fn apply_filters<I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        if self.entries.is_empty() {
            trace!("apply_filters on empty set excludes everything");
            return Vec::new();
        }

        let mut groups: HashMap<&str, Vec<&SharedPredicate<T>>> = HashMap::new();
        for entry in &self.entries {
            groups
                .entry(entry.group.as_str())
                .or_default()
                .push(&entry.predicate);
        }
        trace!(
            filters = self.entries.len(),
            groups = groups.len(),
            "applying combined predicate"
        );

        items
            .into_iter()
            .filter(|item| {
                groups
                    .values()
                    .all(|group| group.iter().any(|p| p.test(item)))
            })
            .collect()
    }
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FilterSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSet")
            .field("len", &self.entries.len())
            .field("groups", &self.group_count())
            .finish()
    }
}
