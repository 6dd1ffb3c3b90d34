// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Rows are open JSON records; sessions hold per-browser table state (page size, columns,
//! sort, selection); settings and the column catalog are process-wide.

pub mod column;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod row;
pub mod selection;
pub mod session;
pub mod settings;

pub use column::{ColumnCatalog, ColumnDescriptor};
pub use ids::{canonical_row_id, IdError, SessionId};
pub use row::{Row, ROW_ID_FIELD};
pub use selection::{Selection, SelectionMode, SelectionSummary};
pub use session::{
    ColumnConfig, SessionDefaults, SortDir, SortState, StoredColumns, StoredSession, StoredSort,
    TableSession,
};
pub use settings::{AppSettings, ColumnOverride, Features, PageDefaults};
