// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Settings/sort application helpers used by the HTTP handlers.
// Keeps `ops::mod` focused on public op types and selection transitions.
const PATTERN_FIELD_PREFIX: &str = "pattern_";

fn form_key(raw: &str) -> &str {
    raw.strip_suffix("[]").unwrap_or(raw)
}

impl SettingsUpdate {
    /// Collects the settings fields from decoded form pairs.
    ///
    /// `visible` and `order` may repeat and may carry a `[]` suffix. An unparseable
    /// `per_page` is ignored.
    pub fn from_form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut update = Self::default();
        let mut order = Vec::new();
        let mut visible = Vec::new();
        let mut saw_order = false;

        for (raw_key, value) in pairs {
            match form_key(raw_key) {
                "per_page" => {
                    update.per_page = value.trim().parse().ok().or(update.per_page);
                }
                "order" => {
                    saw_order = true;
                    order.push(value.to_owned());
                }
                "visible" => visible.push(value.to_owned()),
                key => {
                    if let Some(column) = key.strip_prefix(PATTERN_FIELD_PREFIX) {
                        update.patterns.push((column.to_owned(), value.to_owned()));
                    }
                }
            }
        }

        if saw_order {
            update.columns = Some(ColumnsUpdate { order, visible });
        }
        update
    }
}

/// Applies a settings form to the session and, for pattern overrides, to the global
/// settings and live catalog.
///
/// Page size needs the pagination feature; column changes and patterns need the column
/// settings feature and an `order` list. With `order` present, a missing `visible` list
/// hides every column.
pub fn apply_settings_update(
    update: &SettingsUpdate,
    session: &mut TableSession,
    settings: &mut AppSettings,
    catalog: &mut ColumnCatalog,
) -> SettingsOutcome {
    let mut outcome = SettingsOutcome::default();

    if let Some(per_page) = update.per_page {
        if settings.features.pagination && per_page > 0 && per_page != session.per_page() {
            session.set_per_page(per_page);
            outcome.session_changed = true;
        }
    }

    if !settings.features.column_settings {
        return outcome;
    }
    let Some(columns) = update.columns.as_ref() else {
        return outcome;
    };

    let config = session.columns_mut();
    let visible: std::collections::BTreeSet<String> = columns.visible.iter().cloned().collect();
    if config.order != columns.order || config.visible != visible {
        config.order = columns.order.clone();
        config.visible = visible;
        outcome.session_changed = true;
    }

    for (key, pattern) in &update.patterns {
        let Some(column) = catalog.get_mut(key) else {
            continue;
        };
        if column.custom_pattern() == Some(pattern.as_str()) {
            continue;
        }
        column.set_custom_pattern(Some(pattern.clone()));
        settings.set_custom_pattern(key, pattern.clone());
        outcome.settings_changed = true;
    }

    outcome
}

/// Switches the session sort to `update` when the key is a catalog column.
///
/// Returns whether the session changed; unknown keys leave it untouched.
pub fn apply_sort_update(
    update: &SortUpdate,
    session: &mut TableSession,
    catalog: &ColumnCatalog,
) -> bool {
    if !catalog.contains(&update.key) {
        return false;
    }
    let sort = session.sort_mut();
    if sort.key == update.key && sort.dir == update.dir {
        return false;
    }
    sort.key = update.key.clone();
    sort.dir = update.dir;
    true
}
