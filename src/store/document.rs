// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::DataPaths;

/// The persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Document {
    Dataset,
    Sessions,
    Settings,
}

impl Document {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Sessions => "sessions",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Load/save access to the persisted JSON documents.
///
/// Implementations only move JSON values; typed decoding and the fall-back-to-default
/// policy live in [`load_or_default`] and [`save_logged`].
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when the document has never been written.
    fn load_value(&self, document: Document) -> Result<Option<Value>, StoreError>;

    fn save_value(&self, document: Document, value: &Value) -> Result<(), StoreError>;
}

/// File-backed store writing indented JSON, one file per document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    paths: DataPaths,
}

impl JsonFileStore {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    pub fn path(&self, document: Document) -> &Path {
        match document {
            Document::Dataset => &self.paths.dataset,
            Document::Sessions => &self.paths.sessions,
            Document::Settings => &self.paths.settings,
        }
    }
}

impl DocumentStore for JsonFileStore {
    fn load_value(&self, document: Document) -> Result<Option<Value>, StoreError> {
        let path = self.path(document);
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    fn save_value(&self, document: Document, value: &Value) -> Result<(), StoreError> {
        let path = self.path(document);
        let mut contents = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        contents.push(b'\n');
        write_atomic(path, &contents)
    }
}

/// Writes `contents` to a temp file next to `path`, then renames it into place.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| StoreError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".tabulon.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    if let Err(source) = file.write_all(contents) {
        drop(file);
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// In-memory store for tests and benches.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<Document, Value>>,
    saves: Mutex<BTreeMap<Document, usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, document: Document, value: Value) -> Self {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document, value);
        self
    }

    pub fn document(&self, document: Document) -> Option<Value> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&document)
            .cloned()
    }

    /// Number of successful saves of `document`.
    pub fn save_count(&self, document: Document) -> usize {
        self.saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&document)
            .copied()
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn load_value(&self, document: Document) -> Result<Option<Value>, StoreError> {
        Ok(self.document(document))
    }

    fn save_value(&self, document: Document, value: &Value) -> Result<(), StoreError> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(document, value.clone());
        *self
            .saves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(document)
            .or_default() += 1;
        Ok(())
    }
}

/// Loads and decodes `document`, falling back to `default` when it is missing,
/// unreadable or does not decode as `T`.
pub fn load_or_default<T, F>(store: &dyn DocumentStore, document: Document, default: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.load_value(document) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::error!(%document, error = %err, "document has unexpected shape; using default");
                default()
            }
        },
        Ok(None) => {
            tracing::debug!(%document, "document not found; using default");
            default()
        }
        Err(err) => {
            tracing::error!(%document, error = %err, "cannot load document; using default");
            default()
        }
    }
}

/// Encodes and saves `value`. Failures are logged and reported as `false`; in-memory
/// state stays as it is.
pub fn save_logged<T: Serialize + ?Sized>(
    store: &dyn DocumentStore,
    document: Document,
    value: &T,
) -> bool {
    let encoded = match serde_json::to_value(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            tracing::error!(%document, error = %err, "cannot encode document");
            return false;
        }
    };
    match store.save_value(document, &encoded) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(%document, error = %err, "cannot save document");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::{load_or_default, save_logged, Document, DocumentStore, JsonFileStore, MemoryStore};
    use crate::config::DataPaths;
    use crate::model::AppSettings;

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: std::path::PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!("tabulon-{prefix}-{}-{nanos}-{counter}", std::process::id()));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    struct FileStoreCtx {
        tmp: TempDir,
        store: JsonFileStore,
    }

    #[fixture]
    fn ctx() -> FileStoreCtx {
        let tmp = TempDir::new("store");
        let store = JsonFileStore::new(DataPaths::in_dir(tmp.path().join("data")));
        FileStoreCtx { tmp, store }
    }

    #[rstest]
    fn missing_file_loads_default(ctx: FileStoreCtx) {
        assert!(ctx.store.load_value(Document::Sessions).unwrap().is_none());
        let settings: AppSettings = load_or_default(&ctx.store, Document::Settings, AppSettings::default);
        assert_eq!(settings, AppSettings::default());
    }

    #[rstest]
    fn save_writes_indented_json_and_reloads(ctx: FileStoreCtx) {
        let value = json!({"abc": {"per_page": 25}});
        assert!(save_logged(&ctx.store, Document::Sessions, &value));

        let path = ctx.store.path(Document::Sessions);
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("\n  \"abc\": {"), "{text}");
        assert_eq!(ctx.store.load_value(Document::Sessions).unwrap(), Some(value));

        let leftovers: Vec<_> = std::fs::read_dir(ctx.tmp.path().join("data"))
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().starts_with(".tabulon.tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[rstest]
    fn corrupt_file_falls_back_to_default(ctx: FileStoreCtx) {
        let path = ctx.store.path(Document::Settings).to_path_buf();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ctx.store.load_value(Document::Settings),
            Err(super::StoreError::Json { .. })
        ));
        let settings: AppSettings = load_or_default(&ctx.store, Document::Settings, AppSettings::default);
        assert_eq!(settings, AppSettings::default());
    }

    #[rstest]
    fn unwritable_target_reports_failure(ctx: FileStoreCtx) {
        let path = ctx.store.path(Document::Dataset).to_path_buf();
        std::fs::create_dir_all(&path).unwrap();
        assert!(!save_logged(&ctx.store, Document::Dataset, &json!([])));
    }

    #[test]
    fn wrong_shape_falls_back_to_default() {
        let store = MemoryStore::new().with_document(Document::Dataset, json!({"id": 1}));
        let rows: Vec<serde_json::Value> = load_or_default(&store, Document::Dataset, Vec::new);
        assert!(rows.is_empty());
    }

    #[test]
    fn memory_store_counts_saves() {
        let store = MemoryStore::new();
        assert_eq!(store.save_count(Document::Sessions), 0);
        save_logged(&store, Document::Sessions, &json!({}));
        save_logged(&store, Document::Sessions, &json!({"a": {}}));
        assert_eq!(store.save_count(Document::Sessions), 2);
        assert_eq!(store.document(Document::Sessions), Some(json!({"a": {}})));
        assert_eq!(store.save_count(Document::Settings), 0);
    }
}
