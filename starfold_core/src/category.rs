// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category keys and the set of enabled categories.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashSet;

use crate::point::PhotPoint;

/// Category key for points without a band label.
pub const UNKNOWN_BAND: &str = "Unknown";

/// The dimension points are partitioned by for styling and show/hide toggling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GroupingMode {
    /// Group by source catalog.
    #[default]
    Catalog,
    /// Group by photometric band, with [`UNKNOWN_BAND`] for unlabeled points.
    Band,
}

impl GroupingMode {
    /// Returns the category key of `point` under this mode.
    pub fn key(self, point: &PhotPoint) -> &str {
        match self {
            Self::Catalog => &point.catalog,
            Self::Band => point.band.as_deref().unwrap_or(UNKNOWN_BAND),
        }
    }
}

/// The set of enabled category keys.
///
/// Membership is the only contract. A key that was never enabled is disabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    enabled: HashSet<String>,
    known: HashSet<String>,
}

impl CategoryFilter {
    /// Creates a filter with every category disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter with exactly `keys` enabled.
    pub fn with_enabled<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Self {
        let mut filter = Self::new();
        for key in keys {
            filter.enable(key);
        }
        filter
    }

    /// Returns `true` if `key` is enabled.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.enabled.contains(key)
    }

    /// Enables `key`.
    pub fn enable(&mut self, key: impl Into<String>) {
        let key = key.into();
        self.known.insert(key.clone());
        self.enabled.insert(key);
    }

    /// Disables `key`.
    pub fn disable(&mut self, key: &str) {
        if !self.known.contains(key) {
            self.known.insert(String::from(key));
        }
        self.enabled.remove(key);
    }

    /// Flips `key` and returns whether it is now enabled.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.is_enabled(key) {
            self.disable(key);
            false
        } else {
            self.enable(key);
            true
        }
    }

    /// Enables keys this filter has never seen, leaving existing choices untouched.
    ///
    /// Call this when new categories arrive so they show up by default while categories the user
    /// switched off stay off. Returns the number of newly enabled keys.
    pub fn sync_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        let mut added = 0;
        for key in keys {
            if !self.known.contains(key) {
                self.enable(key);
                added += 1;
            }
        }
        if added > 0 {
            log::debug!("enabled {added} new categories");
        }
        added
    }

    /// Iterates the enabled keys in unspecified order.
    pub fn enabled_keys(&self) -> impl Iterator<Item = &str> {
        self.enabled.iter().map(String::as_str)
    }

    /// Returns the number of enabled keys.
    pub fn len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns `true` if no key is enabled.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }

    /// Forgets every key, enabled or not.
    pub fn clear(&mut self) {
        self.enabled.clear();
        self.known.clear();
    }
}
