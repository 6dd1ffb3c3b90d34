// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the dataset and session state.
//!
//! Queries derive the views the HTML fragments render: matching rows, sort order, visible
//! columns and the current page.

pub mod columns;
pub mod filter;
pub mod page;
pub mod sort;
pub mod table;

pub use columns::{active_columns, ordered_keys, settings_items, ColumnSettingsItem};
pub use filter::{filter_rows, ColumnFilters, GlobalSearch};
pub use page::{clamp_page, paginate, PageInfo, UNPAGINATED_LIMIT};
pub use sort::sort_rows;
pub use table::{build_table_view, TableRequest, TableView, ViewRow};
