// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tabulon::config::DataPaths;
use tabulon::server::TableApp;
use tabulon::store::JsonFileStore;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct DataDir {
    path: PathBuf,
}

impl DataDir {
    fn new(name: &str) -> Self {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "tabulon_it_{name}_{}_{counter}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create data dir");
        Self { path }
    }

    fn paths(&self) -> DataPaths {
        DataPaths::in_dir(&self.path)
    }

    fn write(&self, file: &str, value: &Value) {
        fs::write(self.path.join(file), value.to_string()).expect("write document");
    }

    fn read(&self, file: &Path) -> Value {
        let raw = fs::read_to_string(file).unwrap_or_else(|err| panic!("read {file:?}: {err}"));
        serde_json::from_str(&raw).unwrap_or_else(|err| panic!("parse {file:?}: {err}"))
    }

    fn app(&self) -> TableApp {
        TableApp::load(Arc::new(JsonFileStore::new(self.paths())))
    }
}

impl Drop for DataDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn seed(dir: &DataDir) {
    dir.write(
        "users_1000.json",
        &json!([
            {"id": 1, "full_name": "Bob Stone", "email": "bob@example.com", "country": "Germany",
             "status": "active", "age": 30, "balance_eur": 120.5, "created_date": "2023-05-01"},
            {"id": 2, "full_name": "Amy Lowe", "email": "amy@example.com", "country": "Spain",
             "status": "inactive", "age": 25, "balance_eur": 80, "created_date": "2024-01-15"},
            {"id": 3, "full_name": "Carla Diaz", "email": "carla@example.com", "country": "Spain",
             "status": "active", "age": 41, "balance_eur": 310.0, "created_date": "2022-11-30"},
        ]),
    );
    dir.write(
        "app_settings.json",
        &json!({"features": {"row_selection": true}, "defaults": {"per_page": 2}}),
    );
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

#[tokio::test]
async fn sessions_survive_a_restart() {
    let dir = DataDir::new("restart");
    seed(&dir);

    let cookie = {
        let app = dir.app();
        let first = app.table_data(None, &[]).await;
        let session_id = first.new_session.expect("minted session");
        let cookie = session_id.as_str().to_owned();

        // Newest first by default; two rows per page from app settings.
        assert!(first.html.contains("Page 1 of 2 (3 rows)"));
        assert!(first.html.find("data-id=\"2\"") < first.html.find("data-id=\"1\""));

        app.table_data(Some(&cookie), &pairs(&[("sort", "age"), ("dir", "asc")]))
            .await;
        app.update_selection(Some(&cookie), &pairs(&[("action", "toggle"), ("id", "3")]))
            .await;
        cookie
    };

    let sessions = dir.read(&dir.paths().sessions);
    assert_eq!(sessions[&cookie]["sort"], json!({"key": "age", "dir": "asc"}));
    assert_eq!(
        sessions[&cookie]["selection"],
        json!({"mode": "include", "ids": ["3"]})
    );

    let restarted = dir.app();
    let page = restarted
        .table_data(Some(&cookie), &pairs(&[("page", "2")]))
        .await;
    assert!(page.new_session.is_none());
    assert!(page.html.contains("<tr data-id=\"3\" class=\"selected\">"));
    assert!(page.html.contains("1 of 3 selected"));
}

#[tokio::test]
async fn partial_stored_session_is_completed_on_first_use() {
    let dir = DataDir::new("partial");
    seed(&dir);
    dir.write(
        "sessions.json",
        &json!({"kept-session": {"per_page": 3}, "other": {"sort": {"key": "email"}}}),
    );

    let app = dir.app();
    let rendered = app.table_data(Some("kept-session"), &[]).await;
    assert!(rendered.new_session.is_none());
    assert!(rendered.html.contains("Page 1 of 1 (3 rows)"));

    let sessions = dir.read(&dir.paths().sessions);
    let kept = &sessions["kept-session"];
    assert_eq!(kept["per_page"], 3);
    assert_eq!(kept["sort"], json!({"key": "created_date", "dir": "desc"}));
    assert_eq!(kept["selection"], json!({"mode": "include", "ids": []}));
    // Untouched sessions are written back as they were read.
    assert_eq!(sessions["other"], json!({"sort": {"key": "email"}}));
}

#[tokio::test]
async fn settings_updates_persist_patterns_and_page_size() {
    let dir = DataDir::new("settings");
    seed(&dir);

    let app = dir.app();
    let session_id = app
        .table_data(None, &[])
        .await
        .new_session
        .expect("minted session");
    let cookie = session_id.as_str();

    let rendered = app
        .update_settings(
            Some(cookie),
            &pairs(&[
                ("per_page", "25"),
                ("order", "created_date"),
                ("order", "full_name"),
                ("visible", "created_date"),
                ("visible", "full_name"),
                ("pattern_created_date", "DD.MM.YYYY"),
            ]),
        )
        .await;
    assert!(rendered.html.contains("15.01.2024"));
    assert!(!rendered.html.contains("<th data-key=\"email\">"));

    let settings = dir.read(&dir.paths().settings);
    assert_eq!(
        settings["columns"]["created_date"]["custom_pattern"],
        "DD.MM.YYYY"
    );
    assert_eq!(settings["features"]["row_selection"], true);

    let sessions = dir.read(&dir.paths().sessions);
    assert_eq!(sessions[cookie]["per_page"], 25);
    assert_eq!(
        sessions[cookie]["columns"]["visible"],
        json!(["created_date", "full_name"])
    );

    // A fresh process picks the pattern up from app settings.
    let restarted = dir.app();
    let catalog = restarted.catalog().await;
    assert_eq!(
        catalog.get("created_date").and_then(|column| column.custom_pattern()),
        Some("DD.MM.YYYY")
    );
}

#[tokio::test]
async fn failed_session_write_keeps_the_change_in_memory() {
    let dir = DataDir::new("unwritable");
    seed(&dir);
    // A directory where the sessions document belongs makes every save fail.
    let sessions_path = dir.paths().sessions;
    fs::create_dir_all(sessions_path.join("blocked")).expect("block sessions path");

    let app = dir.app();
    let session_id = app
        .table_data(None, &[])
        .await
        .new_session
        .expect("minted session");
    let cookie = session_id.as_str();

    let selected = app
        .update_selection(Some(cookie), &pairs(&[("action", "select_global")]))
        .await;
    assert!(selected.new_session.is_none());
    assert!(selected.html.contains("All 3 matching rows selected"));
    assert!(sessions_path.is_dir());

    let again = app.table_data(Some(cookie), &[]).await;
    assert!(again.new_session.is_none());
    assert!(again.html.contains("All 3 matching rows selected"));
    for id in ["2", "1"] {
        assert!(again
            .html
            .contains(&format!("<tr data-id=\"{id}\" class=\"selected\">")));
    }
}

#[tokio::test]
async fn missing_data_directory_serves_an_empty_table() {
    let dir = DataDir::new("missing");
    let app = TableApp::load(Arc::new(JsonFileStore::new(DataPaths::in_dir(
        dir.path.join("nowhere"),
    ))));

    let rendered = app.table_data(None, &[]).await;
    assert!(rendered.html.contains("No matching rows"));
    assert!(rendered.new_session.is_some());
}
