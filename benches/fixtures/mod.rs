// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;
use tabulon::model::{Row, SessionDefaults, SessionId, StoredSession};
use tabulon::store::SessionStore;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("tabulon_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create bench temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Size of the bundled dataset.
    Rows1k,
    Rows10k,
}

impl Case {
    pub fn rows(self) -> usize {
        match self {
            Self::Rows1k => 1_000,
            Self::Rows10k => 10_000,
        }
    }
}

const FIRST_NAMES: [&str; 8] = ["Ada", "Bruno", "Chen", "Dana", "Emil", "Fatima", "Greta", "Hugo"];
const LAST_NAMES: [&str; 6] = ["Meier", "Okafor", "Silva", "Tanaka", "Novak", "Larsen"];
const COUNTRIES: [&str; 5] = ["Germany", "Spain", "France", "Japan", "Brazil"];
const STATUSES: [&str; 3] = ["active", "inactive", "pending"];

/// Deterministic user rows shaped like the production dataset.
pub fn dataset(case: Case) -> Vec<Row> {
    (1..=case.rows())
        .map(|id| {
            let first = FIRST_NAMES[id % FIRST_NAMES.len()];
            let last = LAST_NAMES[(id / FIRST_NAMES.len()) % LAST_NAMES.len()];
            let mut row = json!({
                "id": id,
                "full_name": format!("{first} {last}"),
                "email": format!("{}.{}{id}@example.com", first.to_lowercase(), last.to_lowercase()),
                "country": COUNTRIES[id % COUNTRIES.len()],
                "status": STATUSES[id % STATUSES.len()],
                "age": 18 + (id * 7) % 60,
                "created_date": format!("20{:02}-{:02}-{:02}", 15 + id % 10, 1 + id % 12, 1 + id % 28),
            });
            // Every 17th row has no balance, like sparse real data.
            if id % 17 != 0 {
                row["balance_eur"] = json!(((id * 3137) % 100_000) as f64 / 100.0);
            }
            Row::from(row)
        })
        .collect()
}

/// A session store with `count` partially populated sessions, as loaded from disk.
pub fn sessions(count: usize, defaults: &SessionDefaults) -> SessionStore {
    let mut entries = serde_json::Map::new();
    for n in 0..count {
        let stored = StoredSession {
            per_page: Some(10 + n % 3 * 15),
            ..StoredSession::default()
        };
        let value = serde_json::to_value(stored).expect("encode stored session");
        entries.insert(format!("bench-session-{n:05}"), value);
    }
    let mut store = SessionStore::from_value(serde_json::Value::Object(entries));

    // Touch half so serialization sees both normalized and raw entries.
    for n in (0..count).step_by(2) {
        let id = SessionId::new(format!("bench-session-{n:05}")).expect("session id");
        store.resolve(Some(id.as_str()), defaults);
    }
    store
}
