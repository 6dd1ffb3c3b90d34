// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Row;

/// Per-column substring filters, in the order they were given.
///
/// Setting a key twice keeps the latest needle. Empty needles are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilters {
    entries: Vec<(String, String)>,
}

impl ColumnFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, needle: impl Into<String>) {
        let key = key.into();
        let needle = needle.into();
        if needle.is_empty() {
            self.entries.retain(|(existing, _)| *existing != key);
            return;
        }
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = needle,
            None => self.entries.push((key, needle)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, needle)| needle.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, needle)| (key.as_str(), needle.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColumnFilters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filters = Self::new();
        for (key, needle) in iter {
            filters.insert(key, needle);
        }
        filters
    }
}

/// Global search settings for one request.
#[derive(Debug, Clone, Copy)]
pub struct GlobalSearch<'a> {
    pub query: Option<&'a str>,
    pub searchable_keys: &'a [&'a str],
    pub enabled: bool,
}

impl<'a> GlobalSearch<'a> {
    /// A search that never narrows anything.
    pub fn disabled() -> Self {
        Self {
            query: None,
            searchable_keys: &[],
            enabled: false,
        }
    }

    fn active_needle(&self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.query
            .filter(|query| !query.is_empty())
            .map(str::to_lowercase)
    }
}

/// Rows matching the global search and every column filter.
///
/// Both match case-insensitively on the stringified cell; missing cells are empty. The
/// global search keeps a row when any searchable column contains the query.
pub fn filter_rows<'r>(
    rows: impl IntoIterator<Item = &'r Row>,
    search: GlobalSearch<'_>,
    column_filters: &ColumnFilters,
) -> Vec<&'r Row> {
    let needle = search.active_needle();
    let column_needles: Vec<(&str, String)> = column_filters
        .iter()
        .map(|(key, needle)| (key, needle.to_lowercase()))
        .collect();

    rows.into_iter()
        .filter(|row| match needle.as_deref() {
            Some(needle) => search
                .searchable_keys
                .iter()
                .any(|key| cell_contains(row, key, needle)),
            None => true,
        })
        .filter(|row| {
            column_needles
                .iter()
                .all(|(key, needle)| cell_contains(row, key, needle))
        })
        .collect()
}

fn cell_contains(row: &Row, key: &str, lowered_needle: &str) -> bool {
    row.text(key).to_lowercase().contains(lowered_needle)
}
