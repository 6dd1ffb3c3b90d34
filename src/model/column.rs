// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::settings::ColumnOverride;

/// Display metadata for one column of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    key: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_pattern: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            custom_pattern: None,
            default_pattern: None,
        }
    }

    pub fn with_default_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.default_pattern = Some(pattern.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn custom_pattern(&self) -> Option<&str> {
        self.custom_pattern.as_deref()
    }

    pub fn default_pattern(&self) -> Option<&str> {
        self.default_pattern.as_deref()
    }

    pub fn set_custom_pattern(&mut self, pattern: Option<String>) {
        self.custom_pattern = pattern;
    }

    /// Pattern applied when rendering: the custom one wins over the default, and blank
    /// patterns count as absent.
    pub fn display_pattern(&self) -> Option<&str> {
        self.custom_pattern()
            .filter(|pattern| !pattern.is_empty())
            .or_else(|| self.default_pattern().filter(|pattern| !pattern.is_empty()))
    }

    fn apply_override(&mut self, conf: &ColumnOverride) {
        if let Some(label) = conf.label.as_ref() {
            self.label = label.clone();
        }
        if conf.custom_pattern.is_some() {
            self.custom_pattern = conf.custom_pattern.clone();
        }
        if conf.default_pattern.is_some() {
            self.default_pattern = conf.default_pattern.clone();
        }
    }
}

/// Ordered, process-wide list of the columns the table knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnCatalog {
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// The user-profile columns the bundled dataset ships with.
    pub fn builtin() -> Self {
        Self::new(vec![
            ColumnDescriptor::new("full_name", "Name"),
            ColumnDescriptor::new("email", "Email"),
            ColumnDescriptor::new("country", "Country"),
            ColumnDescriptor::new("status", "Status"),
            ColumnDescriptor::new("age", "Age"),
            ColumnDescriptor::new("balance_eur", "Balance"),
            ColumnDescriptor::new("created_date", "Created").with_default_pattern("YYYY-MM-DD"),
        ])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(ColumnDescriptor::key)
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ColumnDescriptor> {
        self.columns.iter_mut().find(|column| column.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Merges persisted per-column overrides. Keys unknown to the catalog are ignored.
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, ColumnOverride>) {
        for (key, conf) in overrides {
            if let Some(column) = self.get_mut(key) {
                column.apply_override(conf);
            }
        }
    }
}

impl Default for ColumnCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
