// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Process-wide application settings, persisted as `app_settings.json`.
///
/// Every field has its own default so a partially written document still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub features: Features,
    pub defaults: PageDefaults,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<String, ColumnOverride>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub search: bool,
    pub column_settings: bool,
    pub pagination: bool,
    pub column_filters: bool,
    pub row_selection: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            search: true,
            column_settings: true,
            pagination: true,
            column_filters: false,
            row_selection: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageDefaults {
    pub per_page: usize,
    pub per_page_options: Vec<usize>,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            per_page: 10,
            per_page_options: vec![10, 25, 50, 100],
        }
    }
}

/// Per-column display overrides merged into the column catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pattern: Option<String>,
}

impl AppSettings {
    /// Page size for new sessions; a zero in the document falls back to the built-in
    /// default.
    pub fn default_per_page(&self) -> usize {
        if self.defaults.per_page == 0 {
            PageDefaults::default().per_page
        } else {
            self.defaults.per_page
        }
    }

    pub fn set_custom_pattern(&mut self, key: &str, pattern: String) {
        self.columns.entry(key.to_owned()).or_default().custom_pattern = Some(pattern);
    }
}
