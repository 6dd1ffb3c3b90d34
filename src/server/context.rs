// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::model::{AppSettings, ColumnCatalog, Row, SessionDefaults, SessionId};
use crate::ops::{
    apply_selection_op, apply_settings_update, apply_sort_update, SelectionOp, SettingsUpdate,
    SortUpdate,
};
use crate::query::{build_table_view, settings_items, ColumnFilters, TableRequest};
use crate::render::{
    render_header, render_index, render_per_page, render_settings_modal, render_table,
};
use crate::store::{load_or_default, save_logged, Document, DocumentStore, SessionStore};

/// A rendered fragment plus the session id to hand back in a cookie, if one was minted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub new_session: Option<SessionId>,
}

impl Rendered {
    fn plain(html: String) -> Self {
        Self {
            html,
            new_session: None,
        }
    }
}

#[derive(Debug)]
struct AppState {
    dataset: Vec<Row>,
    catalog: ColumnCatalog,
    settings: AppSettings,
    sessions: SessionStore,
}

impl AppState {
    fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults::new(
            self.settings.default_per_page(),
            self.catalog.keys().map(str::to_owned).collect(),
        )
    }
}

/// Shared application context handed to every handler.
///
/// All session and settings mutations go through one async mutex held for the whole
/// request, so read-modify-write cycles never interleave.
#[derive(Clone)]
pub struct TableApp {
    state: Arc<Mutex<AppState>>,
    store: Arc<dyn DocumentStore>,
}

impl TableApp {
    /// Builds the context from already loaded parts. Settings column overrides are merged
    /// into `catalog`.
    pub fn new(
        dataset: Vec<Row>,
        mut catalog: ColumnCatalog,
        settings: AppSettings,
        sessions: SessionStore,
        store: Arc<dyn DocumentStore>,
    ) -> Self {
        catalog.apply_overrides(&settings.columns);
        Self {
            state: Arc::new(Mutex::new(AppState {
                dataset,
                catalog,
                settings,
                sessions,
            })),
            store,
        }
    }

    /// Loads dataset, settings and sessions from `store`, falling back to empty/default
    /// documents when any of them is missing or unreadable.
    pub fn load(store: Arc<dyn DocumentStore>) -> Self {
        let dataset: Vec<Row> = load_or_default(&*store, Document::Dataset, Vec::new);
        let settings: AppSettings = load_or_default(&*store, Document::Settings, AppSettings::default);
        let sessions_doc: Value = load_or_default(&*store, Document::Sessions, || {
            Value::Object(serde_json::Map::new())
        });
        let sessions = SessionStore::from_value(sessions_doc);

        tracing::info!(
            rows = dataset.len(),
            sessions = sessions.len(),
            "loaded table state"
        );
        Self::new(dataset, ColumnCatalog::builtin(), settings, sessions, store)
    }

    pub async fn catalog(&self) -> ColumnCatalog {
        self.state.lock().await.catalog.clone()
    }

    pub async fn index(&self) -> String {
        render_index(&self.state.lock().await.settings.features)
    }

    pub async fn header(&self) -> String {
        render_header(&self.state.lock().await.settings.features)
    }

    /// `GET /table-data`: optional sort update, then the table fragment.
    pub async fn table_data(&self, session_cookie: Option<&str>, params: &[(String, String)]) -> Rendered {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let defaults = state.session_defaults();
        let request = table_request(params, &state.catalog);
        let sort = SortUpdate::parse(param(params, "sort"), param(params, "dir"));

        let resolved = state.sessions.resolve(session_cookie, &defaults);
        let mut dirty = resolved.needs_save;
        if let Some(sort) = sort {
            if apply_sort_update(&sort, resolved.session, &state.catalog) {
                tracing::debug!(key = %sort.key, dir = %sort.dir, "sort updated");
                dirty = true;
            } else if !state.catalog.contains(&sort.key) {
                tracing::debug!(key = %sort.key, "ignoring sort on unknown column");
            }
        }
        let new_session = resolved.is_new.then(|| resolved.session_id.clone());

        let view = build_table_view(
            &state.dataset,
            &state.catalog,
            &state.settings,
            resolved.session,
            &request,
        );
        let html = render_table(&view, &state.settings.features);

        if dirty {
            save_logged(&*self.store, Document::Sessions, &state.sessions);
        }
        Rendered { html, new_session }
    }

    /// `GET /table-settings`: page-size control, empty when pagination is off.
    pub async fn per_page_control(&self, session_cookie: Option<&str>) -> Rendered {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        if !state.settings.features.pagination {
            return Rendered::plain(String::new());
        }

        let defaults = state.session_defaults();
        let resolved = state.sessions.resolve(session_cookie, &defaults);
        let html = render_per_page(&state.settings.defaults.per_page_options, resolved.session.per_page());
        let new_session = resolved.is_new.then(|| resolved.session_id.clone());

        if resolved.needs_save {
            save_logged(&*self.store, Document::Sessions, &state.sessions);
        }
        Rendered { html, new_session }
    }

    /// `GET /table-settings-modal`: column editor, empty when column settings are off.
    pub async fn settings_modal(&self, session_cookie: Option<&str>, query: Option<&str>) -> Rendered {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        if !state.settings.features.column_settings {
            return Rendered::plain(String::new());
        }

        let defaults = state.session_defaults();
        let resolved = state.sessions.resolve(session_cookie, &defaults);
        let items = settings_items(resolved.session.columns(), &state.catalog);
        let html = render_settings_modal(&items, query);
        let new_session = resolved.is_new.then(|| resolved.session_id.clone());

        if resolved.needs_save {
            save_logged(&*self.store, Document::Sessions, &state.sessions);
        }
        Rendered { html, new_session }
    }

    /// `POST /table-settings`: applies page size, column layout and patterns, then
    /// re-renders the table.
    pub async fn update_settings(&self, session_cookie: Option<&str>, form: &[(String, String)]) -> Rendered {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let defaults = state.session_defaults();
        let request = table_request(form, &state.catalog);
        let update = SettingsUpdate::from_form(form.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let resolved = state.sessions.resolve(session_cookie, &defaults);
        tracing::info!(
            per_page = ?update.per_page,
            order = ?update.columns.as_ref().map(|c| &c.order),
            visible = ?update.columns.as_ref().map(|c| &c.visible),
            patterns = ?update.patterns,
            "update settings"
        );
        let outcome = apply_settings_update(
            &update,
            resolved.session,
            &mut state.settings,
            &mut state.catalog,
        );
        let new_session = resolved.is_new.then(|| resolved.session_id.clone());

        let view = build_table_view(
            &state.dataset,
            &state.catalog,
            &state.settings,
            resolved.session,
            &request,
        );
        let html = render_table(&view, &state.settings.features);

        if outcome.settings_changed {
            save_logged(&*self.store, Document::Settings, &state.settings);
        }
        save_logged(&*self.store, Document::Sessions, &state.sessions);
        Rendered { html, new_session }
    }

    /// `POST /selection`: applies one selection action, then re-renders the table.
    pub async fn update_selection(&self, session_cookie: Option<&str>, form: &[(String, String)]) -> Rendered {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let defaults = state.session_defaults();
        let request = table_request(form, &state.catalog);

        let resolved = state.sessions.resolve(session_cookie, &defaults);
        let action = param(form, "action").unwrap_or_default();
        match SelectionOp::parse(action, param(form, "id"), param(form, "ids")) {
            Ok(op) => {
                let changed = apply_selection_op(resolved.session.selection_mut(), &op);
                tracing::debug!(action = op.name(), changed, "selection updated");
            }
            Err(err) => tracing::warn!(error = %err, "ignoring selection request"),
        }
        let new_session = resolved.is_new.then(|| resolved.session_id.clone());

        let view = build_table_view(
            &state.dataset,
            &state.catalog,
            &state.settings,
            resolved.session,
            &request,
        );
        let html = render_table(&view, &state.settings.features);

        save_logged(&*self.store, Document::Sessions, &state.sessions);
        Rendered { html, new_session }
    }
}

/// First value for `key`, if present.
fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Read parameters shared by every table render. Column filters are taken from any
/// parameter named after a catalog column; a repeated key keeps its last value.
fn table_request(pairs: &[(String, String)], catalog: &ColumnCatalog) -> TableRequest {
    let query = param(pairs, "q")
        .filter(|q| !q.is_empty())
        .map(str::to_owned);
    let page = param(pairs, "page")
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(1);

    let mut column_filters = ColumnFilters::new();
    for (key, value) in pairs {
        if catalog.contains(key) {
            column_filters.insert(key.as_str(), value.as_str());
        }
    }

    TableRequest {
        query,
        page,
        column_filters,
    }
}
