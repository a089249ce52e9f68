// Copyright 2026 the Starfold Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Order-preserving partition of points into categories.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use starfold_core::{CategoryFilter, GroupingMode, PhotPoint, PlotPoint, PointSeries};

/// The items sharing one category key, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Group<T> {
    /// Category key.
    pub key: String,
    /// Items in their original relative order.
    pub items: Vec<T>,
}

/// Items partitioned by category key.
///
/// Groups are kept in first-seen order. Every input item lands in exactly one group.
#[derive(Clone, Debug)]
pub struct Grouping<T> {
    groups: Vec<Group<T>>,
    index: HashMap<String, usize>,
}

impl<T> Default for Grouping<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Grouping<T> {
    /// Partitions `items` by the key `key` returns for each of them.
    pub fn by_key<K: AsRef<str>>(
        items: impl IntoIterator<Item = T>,
        mut key: impl FnMut(&T) -> K,
    ) -> Self {
        let mut out = Self::default();
        for item in items {
            let k = key(&item);
            let slot = out.slot(k.as_ref());
            out.groups[slot].items.push(item);
        }
        out
    }

    fn slot(&mut self, key: &str) -> usize {
        if let Some(&i) = self.index.get(key) {
            return i;
        }
        let i = self.groups.len();
        self.index.insert(String::from(key), i);
        self.groups.push(Group {
            key: String::from(key),
            items: Vec::new(),
        });
        i
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of grouped items.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Returns the group for `key`.
    pub fn get(&self, key: &str) -> Option<&Group<T>> {
        self.index.get(key).map(|&i| &self.groups[i])
    }

    /// Iterates groups in first-seen order.
    pub fn iter(&self) -> core::slice::Iter<'_, Group<T>> {
        self.groups.iter()
    }

    /// Iterates keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    /// Returns the keys sorted lexicographically.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates the groups whose key is enabled in `filter`.
    pub fn enabled<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = &'a Group<T>> + 'a {
        self.groups.iter().filter(|g| filter.is_enabled(&g.key))
    }

    /// Consumes the grouping, returning its groups in first-seen order.
    pub fn into_groups(self) -> Vec<Group<T>> {
        self.groups
    }
}

impl<'a, T> IntoIterator for &'a Grouping<T> {
    type Item = &'a Group<T>;
    type IntoIter = core::slice::Iter<'a, Group<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Groups source points by `mode`.
pub fn group_points<'a>(
    points: &'a [PhotPoint],
    mode: GroupingMode,
) -> Grouping<&'a PhotPoint> {
    Grouping::by_key(points, |p: &&'a PhotPoint| mode.key(*p))
}

/// Groups projected points by the category of their source row.
///
/// Points whose row is missing from `series` are grouped under the empty key.
pub fn group_plot_points(
    points: &[PlotPoint],
    series: &PointSeries,
    mode: GroupingMode,
) -> Grouping<PlotPoint> {
    Grouping::by_key(points.iter().copied(), |p: &PlotPoint| {
        series.get(p.row).map_or("", |src| mode.key(src))
    })
}
