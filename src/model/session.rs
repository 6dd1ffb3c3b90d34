// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::selection::Selection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Anything other than `desc` reads as ascending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw == "desc" {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortDir {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub dir: SortDir,
}

impl SortState {
    pub fn new(key: impl Into<String>, dir: SortDir) -> Self {
        Self {
            key: key.into(),
            dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub order: Vec<String>,
    pub visible: BTreeSet<String>,
}

/// Fully populated per-browser table state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSession {
    per_page: usize,
    columns: ColumnConfig,
    sort: SortState,
    selection: Selection,
}

impl TableSession {
    pub fn new(defaults: &SessionDefaults) -> Self {
        StoredSession::default().normalize(defaults).0
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Zero is ignored; pagination needs at least one row per page.
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 {
            self.per_page = per_page;
        }
    }

    pub fn columns(&self) -> &ColumnConfig {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnConfig {
        &mut self.columns
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn sort_mut(&mut self) -> &mut SortState {
        &mut self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }
}

/// Values a session falls back to for anything it has not stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    pub per_page: usize,
    pub column_keys: Vec<String>,
    pub sort: SortState,
}

impl SessionDefaults {
    pub const SORT_KEY: &'static str = "created_date";
    pub const SORT_DIR: SortDir = SortDir::Desc;

    pub fn new(per_page: usize, column_keys: Vec<String>) -> Self {
        Self {
            per_page,
            column_keys,
            sort: SortState::new(Self::SORT_KEY, Self::SORT_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredColumns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSort {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<SortDir>,
}

/// Session as found on disk: any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<StoredColumns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<StoredSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
}

impl StoredSession {
    /// Fills every missing field from `defaults`.
    ///
    /// Returns the populated session and whether any default had to be applied.
    pub fn normalize(self, defaults: &SessionDefaults) -> (TableSession, bool) {
        let mut defaulted = false;

        let per_page = match self.per_page {
            Some(per_page) if per_page > 0 => per_page,
            _ => {
                defaulted = true;
                defaults.per_page
            }
        };

        let stored_columns = self.columns.unwrap_or_default();
        let order = stored_columns.order.unwrap_or_else(|| {
            defaulted = true;
            defaults.column_keys.clone()
        });
        let visible = match stored_columns.visible {
            Some(visible) => visible.into_iter().collect(),
            None => {
                defaulted = true;
                defaults.column_keys.iter().cloned().collect()
            }
        };

        let stored_sort = self.sort.unwrap_or_default();
        let key = stored_sort.key.unwrap_or_else(|| {
            defaulted = true;
            defaults.sort.key.clone()
        });
        let dir = stored_sort.dir.unwrap_or_else(|| {
            defaulted = true;
            defaults.sort.dir
        });

        let selection = self.selection.unwrap_or_else(|| {
            defaulted = true;
            Selection::default()
        });

        let session = TableSession {
            per_page,
            columns: ColumnConfig { order, visible },
            sort: SortState { key, dir },
            selection,
        };
        (session, defaulted)
    }
}
