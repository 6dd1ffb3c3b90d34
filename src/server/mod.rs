// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface: an axum router over a shared [`TableApp`].
//!
//! Handlers only translate between HTTP and the context methods: they read the session
//! cookie and the ordered parameter pairs, and attach `Set-Cookie` when a session was
//! minted.

use axum::extract::{Form, Query, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

pub mod context;

pub use context::{Rendered, TableApp};

use crate::model::SessionId;

pub const SESSION_COOKIE: &str = "session_id";

pub fn router(app: TableApp) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/table-header", get(table_header))
        .route("/table-data", get(table_data))
        .route("/table-settings", get(per_page_control).post(update_settings))
        .route("/table-settings-modal", get(settings_modal))
        .route("/selection", post(update_selection))
        .with_state(app)
}

/// Value of the session cookie, if the request carries one.
pub fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim_matches('"'))
}

pub fn set_cookie_value(session_id: &SessionId) -> String {
    format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

fn fragment(rendered: Rendered) -> Response {
    let mut response = Html(rendered.html).into_response();
    if let Some(session_id) = rendered.new_session {
        match HeaderValue::from_str(&set_cookie_value(&session_id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(err) => tracing::error!(%session_id, error = %err, "cannot encode session cookie"),
        }
    }
    response
}

async fn index(State(app): State<TableApp>) -> Html<String> {
    Html(app.index().await)
}

async fn table_header(State(app): State<TableApp>) -> Html<String> {
    Html(app.header().await)
}

async fn table_data(
    State(app): State<TableApp>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    fragment(app.table_data(session_cookie(&headers), &params).await)
}

async fn per_page_control(State(app): State<TableApp>, headers: HeaderMap) -> Response {
    fragment(app.per_page_control(session_cookie(&headers)).await)
}

async fn settings_modal(
    State(app): State<TableApp>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let query = params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str());
    fragment(app.settings_modal(session_cookie(&headers), query).await)
}

async fn update_settings(
    State(app): State<TableApp>,
    headers: HeaderMap,
    Form(form): Form<Vec<(String, String)>>,
) -> Response {
    fragment(app.update_settings(session_cookie(&headers), &form).await)
}

async fn update_selection(
    State(app): State<TableApp>,
    headers: HeaderMap,
    Form(form): Form<Vec<(String, String)>>,
) -> Response {
    fragment(app.update_selection(session_cookie(&headers), &form).await)
}
