// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{ColumnCatalog, ColumnConfig, ColumnDescriptor};

/// Session order followed by any catalog keys the session has never seen.
///
/// Duplicate keys in the session order keep their first position; keys no longer in the
/// catalog are kept here and dropped by the callers that need descriptors.
pub fn ordered_keys<'a>(config: &'a ColumnConfig, catalog: &'a ColumnCatalog) -> Vec<&'a str> {
    let mut seen = BTreeSet::new();
    let mut keys = Vec::with_capacity(config.order.len() + catalog.len());

    for key in config.order.iter().map(String::as_str).chain(catalog.keys()) {
        if seen.insert(key) {
            keys.push(key);
        }
    }

    keys
}

/// Visible columns in display order.
pub fn active_columns<'a>(
    config: &'a ColumnConfig,
    catalog: &'a ColumnCatalog,
) -> Vec<&'a ColumnDescriptor> {
    ordered_keys(config, catalog)
        .into_iter()
        .filter(|key| config.visible.contains(*key))
        .filter_map(|key| catalog.get(key))
        .collect()
}

/// One line of the column settings editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSettingsItem<'a> {
    pub key: &'a str,
    pub label: &'a str,
    pub visible: bool,
    pub custom_pattern: Option<&'a str>,
    pub default_pattern: Option<&'a str>,
}

/// Every catalog column, visible or not, in the session's order.
pub fn settings_items<'a>(
    config: &'a ColumnConfig,
    catalog: &'a ColumnCatalog,
) -> Vec<ColumnSettingsItem<'a>> {
    ordered_keys(config, catalog)
        .into_iter()
        .filter_map(|key| catalog.get(key))
        .map(|column| ColumnSettingsItem {
            key: column.key(),
            label: column.label(),
            visible: config.visible.contains(column.key()),
            custom_pattern: column.custom_pattern(),
            default_pattern: column.default_pattern(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{active_columns, ordered_keys, settings_items};
    use crate::model::{ColumnCatalog, ColumnConfig, ColumnDescriptor};

    fn catalog(keys: &[&str]) -> ColumnCatalog {
        ColumnCatalog::new(
            keys.iter()
                .map(|key| ColumnDescriptor::new(*key, key.to_uppercase()))
                .collect(),
        )
    }

    fn config(order: &[&str], visible: &[&str]) -> ColumnConfig {
        ColumnConfig {
            order: order.iter().map(|k| (*k).to_owned()).collect(),
            visible: visible.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    fn keys(columns: &[&ColumnDescriptor]) -> Vec<String> {
        columns.iter().map(|c| c.key().to_owned()).collect()
    }

    #[test]
    fn keeps_session_order_filtered_to_visible() {
        let catalog = catalog(&["a", "b", "c"]);
        let config = config(&["b", "a", "c"], &["a", "c"]);
        assert_eq!(keys(&active_columns(&config, &catalog)), ["a", "c"]);
    }

    #[test]
    fn appends_new_catalog_columns_after_session_order() {
        let catalog = catalog(&["a", "b", "c", "d"]);
        let config = config(&["c", "a"], &["a", "b", "c", "d"]);
        assert_eq!(ordered_keys(&config, &catalog), ["c", "a", "b", "d"]);
        assert_eq!(keys(&active_columns(&config, &catalog)), ["c", "a", "b", "d"]);
    }

    #[test]
    fn drops_stale_and_duplicate_keys() {
        let catalog = catalog(&["a", "b"]);
        let config = config(&["gone", "b", "b", "a"], &["gone", "a", "b"]);
        assert_eq!(keys(&active_columns(&config, &catalog)), ["b", "a"]);
    }

    #[test]
    fn nothing_visible_yields_no_columns() {
        let catalog = catalog(&["a", "b"]);
        let config = config(&["a", "b"], &[]);
        assert!(active_columns(&config, &catalog).is_empty());
    }

    #[test]
    fn settings_items_list_hidden_columns_too() {
        let catalog = catalog(&["a", "b", "c"]);
        let config = config(&["b"], &["b"]);
        let items = settings_items(&config, &catalog);
        let summary: Vec<(&str, bool)> = items.iter().map(|i| (i.key, i.visible)).collect();
        assert_eq!(summary, [("b", true), ("a", false), ("c", false)]);
        assert_eq!(items[0].label, "B");
    }
}
