// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{
    AppSettings, ColumnCatalog, ColumnDescriptor, Row, SelectionSummary, SortState, TableSession,
};

use super::columns::active_columns;
use super::filter::{filter_rows, ColumnFilters, GlobalSearch};
use super::page::{paginate, PageInfo, UNPAGINATED_LIMIT};
use super::sort::sort_rows;

/// Read parameters of one table render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    pub query: Option<String>,
    pub page: i64,
    pub column_filters: ColumnFilters,
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            query: None,
            page: 1,
            column_filters: ColumnFilters::new(),
        }
    }
}

/// A row on the rendered page, annotated with its selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow<'a> {
    pub row: &'a Row,
    pub id: String,
    pub selected: bool,
}

/// Everything the table fragment needs.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub rows: Vec<ViewRow<'a>>,
    pub columns: Vec<&'a ColumnDescriptor>,
    pub sort: SortState,
    pub page: Option<PageInfo>,
    pub query: Option<String>,
    pub filters: ColumnFilters,
    pub selection: SelectionSummary,
}

impl TableView<'_> {
    /// Ids of the rows on this page, in display order, skipping rows without an id.
    pub fn page_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.id.as_str())
            .filter(|id| !id.is_empty())
            .collect()
    }

    pub fn all_on_page_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.selected)
    }
}

/// Runs search, column filters, sort, selection annotation and pagination.
///
/// Column filters for keys outside the catalog are dropped here. Selection counts are
/// computed against all matching rows, before pagination.
pub fn build_table_view<'a>(
    dataset: &'a [Row],
    catalog: &'a ColumnCatalog,
    settings: &AppSettings,
    session: &'a TableSession,
    request: &TableRequest,
) -> TableView<'a> {
    let searchable_keys: Vec<&str> = catalog.keys().collect();
    let filters: ColumnFilters = request
        .column_filters
        .iter()
        .filter(|(key, _)| catalog.contains(key))
        .collect();

    let search = GlobalSearch {
        query: request.query.as_deref(),
        searchable_keys: &searchable_keys,
        enabled: settings.features.search,
    };

    let mut matching = filter_rows(dataset, search, &filters);
    let sort = session.sort().clone();
    sort_rows(&mut matching, &sort.key, sort.dir);

    let selection = session.selection();
    let summary = selection.summary(matching.iter().map(|row| row.id().unwrap_or_default()));

    let (range, page) = if settings.features.pagination {
        let (range, info) = paginate(matching.len(), session.per_page(), request.page);
        (range, Some(info))
    } else {
        (0..matching.len().min(UNPAGINATED_LIMIT), None)
    };

    let rows = matching[range]
        .iter()
        .map(|&row| {
            let id = row.id().unwrap_or_default();
            let selected = selection.is_selected(&id);
            ViewRow { row, id, selected }
        })
        .collect();

    TableView {
        rows,
        columns: active_columns(session.columns(), catalog),
        sort,
        page,
        query: request.query.clone(),
        filters,
        selection: summary,
    }
}
