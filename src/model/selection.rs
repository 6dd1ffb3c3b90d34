// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Row selection under an include-list or exclude-list representation.
//!
//! In `Include` mode the selected rows are exactly `ids`. In `Exclude` mode the selected
//! rows are all rows matching the current search/filters minus `ids`, which lets a user
//! select every matching row without the server enumerating them. The matching set is
//! re-evaluated per request, so an exclude selection follows filter changes.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Include,
    Exclude,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Exclude => "exclude",
        }
    }

    /// Anything other than `exclude` reads as `include`.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw == "exclude" {
            Self::Exclude
        } else {
            Self::Include
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SelectionMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    mode: SelectionMode,
    ids: BTreeSet<String>,
}

/// Selection counts relative to the current matching row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSummary {
    pub count: usize,
    pub total: usize,
    pub is_global: bool,
    pub mode: SelectionMode,
}

impl Selection {
    pub fn new(mode: SelectionMode, ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            mode,
            ids: ids.into_iter().collect(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub(crate) fn ids_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.ids
    }

    /// Replaces the whole state.
    pub(crate) fn reset(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.ids.clear();
    }

    /// Whether the row with `row_id` renders as selected. Rows without an id use `""`.
    pub fn is_selected(&self, row_id: &str) -> bool {
        match self.mode {
            SelectionMode::Include => self.ids.contains(row_id),
            SelectionMode::Exclude => !self.ids.contains(row_id),
        }
    }

    /// Counts against the ids of the rows matching the current search and filters.
    ///
    /// In include mode only ids that still match are counted. In exclude mode the count is
    /// `total_matching - |ids|`, floored at zero; excluded ids that no longer match still
    /// count against the total.
    pub fn summary<I, S>(&self, matching_ids: I) -> SelectionSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total: usize = 0;
        let mut included = 0;
        for id in matching_ids {
            total += 1;
            if self.mode == SelectionMode::Include && self.ids.contains(id.as_ref()) {
                included += 1;
            }
        }

        let (count, is_global) = match self.mode {
            SelectionMode::Include => (included, false),
            SelectionMode::Exclude => (total.saturating_sub(self.ids.len()), self.ids.is_empty()),
        };
        SelectionSummary {
            count,
            total,
            is_global,
            mode: self.mode,
        }
    }
}
