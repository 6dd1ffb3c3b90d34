// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the dataset, sessions and settings documents.
//!
//! A [`DocumentStore`] moves raw JSON values; the helpers here decode them and degrade to
//! defaults with a log line instead of failing the request.

pub mod document;
pub mod session_store;

pub use document::{
    load_or_default, save_logged, Document, DocumentStore, JsonFileStore, MemoryStore,
    StoreError,
};
pub use session_store::{Resolved, SessionStore};
