// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use serde_json::json;

use crate::format::format_date;
use crate::model::{ColumnDescriptor, Features, SelectionMode, SortDir};
use crate::query::{TableView, ViewRow};

use super::text::{escape_html, link};
use super::{CONTAINER_ID, SEARCH_INPUT};

const SORT_ASC_MARK: &str = " \u{25B2}";
const SORT_DESC_MARK: &str = " \u{25BC}";

/// Inputs a POST from the table carries along so the re-render keeps search and filters.
fn include_selector() -> String {
    format!("[name='{SEARCH_INPUT}'], .filter-row input")
}

/// The table fragment swapped into the table container.
pub fn render_table(view: &TableView<'_>, features: &Features) -> String {
    let mut out = String::with_capacity(4096 + view.rows.len() * 256);
    out.push_str("<div class=\"table-fragment\">\n");

    if features.row_selection {
        write_selection_bar(&mut out, view);
    }

    out.push_str("<table class=\"data-table\">\n<thead>\n<tr>\n");
    if features.row_selection {
        write_page_checkbox(&mut out, view);
    }
    for column in &view.columns {
        write_sort_header(&mut out, view, column);
    }
    out.push_str("</tr>\n");
    if features.column_filters {
        write_filter_row(&mut out, view, features.row_selection);
    }
    out.push_str("</thead>\n<tbody>\n");

    if view.rows.is_empty() {
        let span = view.columns.len() + usize::from(features.row_selection);
        let _ = writeln!(
            out,
            "<tr><td class=\"empty\" colspan=\"{}\">No matching rows</td></tr>",
            span.max(1)
        );
    }
    for row in &view.rows {
        write_row(&mut out, view, row, features.row_selection);
    }
    out.push_str("</tbody>\n</table>\n");

    if let Some(page) = view.page {
        write_pagination(&mut out, view, page);
    }

    out.push_str("</div>\n");
    out
}

/// Query parameters that keep the current search and column filters on a link.
fn carried_params<'v>(view: &'v TableView<'_>) -> Vec<(&'v str, &'v str)> {
    let mut params = Vec::with_capacity(view.filters.len() + 1);
    if let Some(query) = view.query.as_deref() {
        params.push((SEARCH_INPUT, query));
    }
    params.extend(view.filters.iter());
    params
}

fn write_selection_bar(out: &mut String, view: &TableView<'_>) {
    let summary = view.selection;
    let _ = writeln!(
        out,
        "<div class=\"selection-bar\" data-mode=\"{}\">",
        summary.mode
    );
    if summary.is_global {
        let _ = writeln!(
            out,
            "<span class=\"selection-count\">All {} matching rows selected</span>",
            summary.total
        );
    } else {
        let _ = writeln!(
            out,
            "<span class=\"selection-count\">{} of {} selected</span>",
            summary.count, summary.total
        );
    }
    if !summary.is_global && summary.total > 0 {
        write_selection_button(out, view, json!({"action": "select_global"}), "Select all matching");
    }
    if summary.count > 0 || summary.mode == SelectionMode::Exclude {
        write_selection_button(out, view, json!({"action": "clear"}), "Clear selection");
    }
    out.push_str("</div>\n");
}

fn write_selection_button(out: &mut String, view: &TableView<'_>, vals: serde_json::Value, label: &str) {
    let _ = writeln!(
        out,
        "<button type=\"button\" {}>{}</button>",
        selection_post_attrs(view, vals),
        escape_html(label)
    );
}

/// `hx-*` attributes posting a selection action and re-rendering the current page.
fn selection_post_attrs(view: &TableView<'_>, mut vals: serde_json::Value) -> String {
    if let (Some(page), Some(object)) = (view.page, vals.as_object_mut()) {
        object.insert("page".to_owned(), json!(page.current.to_string()));
    }
    format!(
        "hx-post=\"/selection\" hx-target=\"#{CONTAINER_ID}\" hx-include=\"{}\" hx-vals=\"{}\"",
        include_selector(),
        escape_html(&vals.to_string())
    )
}

fn write_page_checkbox(out: &mut String, view: &TableView<'_>) {
    let ids = view.page_ids().join(",");
    let all = view.all_on_page_selected();
    let action = if all { "deselect_page" } else { "select_page" };
    let _ = writeln!(
        out,
        "<th class=\"select\"><input type=\"checkbox\" aria-label=\"Select page\"{} {}></th>",
        if all { " checked" } else { "" },
        selection_post_attrs(view, json!({"action": action, "ids": ids}))
    );
}

fn write_sort_header(out: &mut String, view: &TableView<'_>, column: &ColumnDescriptor) {
    let key = column.key();
    let (dir, mark) = if view.sort.key == key {
        let mark = match view.sort.dir {
            SortDir::Asc => SORT_ASC_MARK,
            SortDir::Desc => SORT_DESC_MARK,
        };
        (view.sort.dir.flipped(), mark)
    } else {
        (SortDir::Asc, "")
    };

    let mut params = vec![("sort", key), ("dir", dir.as_str())];
    params.extend(carried_params(view));
    let href = link("/table-data", params);

    let _ = writeln!(
        out,
        "<th data-key=\"{}\"><a href=\"#\" hx-get=\"{}\" hx-target=\"#{CONTAINER_ID}\">{}{mark}</a></th>",
        escape_html(key),
        escape_html(&href),
        escape_html(column.label())
    );
}

fn write_filter_row(out: &mut String, view: &TableView<'_>, with_select_cell: bool) {
    out.push_str("<tr class=\"filter-row\">\n");
    if with_select_cell {
        out.push_str("<th></th>\n");
    }
    for column in &view.columns {
        let key = column.key();
        let value = view.filters.get(key).unwrap_or_default();
        let _ = writeln!(
            out,
            "<th><input type=\"text\" name=\"{key}\" value=\"{value}\" placeholder=\"Filter {label}\" \
             hx-get=\"/table-data\" hx-trigger=\"input changed delay:300ms\" \
             hx-target=\"#{CONTAINER_ID}\" hx-include=\"{include}\"></th>",
            key = escape_html(key),
            value = escape_html(value),
            label = escape_html(column.label()),
            include = include_selector(),
        );
    }
    out.push_str("</tr>\n");
}

fn write_row(out: &mut String, view: &TableView<'_>, row: &ViewRow<'_>, with_checkbox: bool) {
    let _ = write!(out, "<tr data-id=\"{}\"", escape_html(&row.id));
    if row.selected {
        out.push_str(" class=\"selected\"");
    }
    out.push_str(">\n");

    if with_checkbox {
        let _ = writeln!(
            out,
            "<td class=\"select\"><input type=\"checkbox\" aria-label=\"Select row\"{} {}></td>",
            if row.selected { " checked" } else { "" },
            selection_post_attrs(view, json!({"action": "toggle", "id": row.id}))
        );
    }

    for column in &view.columns {
        let raw = row.row.text(column.key());
        let shown = match column.display_pattern() {
            Some(pattern) => format_date(&raw, pattern).into_owned(),
            None => raw.into_owned(),
        };
        let _ = writeln!(out, "<td>{}</td>", escape_html(&shown));
    }
    out.push_str("</tr>\n");
}

fn write_pagination(out: &mut String, view: &TableView<'_>, page: crate::query::PageInfo) {
    out.push_str("<nav class=\"pagination\">\n");
    let carried = carried_params(view);

    let page_link = |target: usize| {
        let number = target.to_string();
        let mut params = vec![("page", number.as_str())];
        params.extend(carried.iter().copied());
        link("/table-data", params)
    };

    if page.has_prev() {
        let _ = writeln!(
            out,
            "<a href=\"#\" rel=\"prev\" hx-get=\"{}\" hx-target=\"#{CONTAINER_ID}\">Previous</a>",
            escape_html(&page_link(page.current - 1))
        );
    }
    let _ = writeln!(
        out,
        "<span class=\"page-status\">Page {} of {} ({} rows)</span>",
        page.current,
        page.total_pages.max(1),
        page.total_items
    );
    if page.has_next() {
        let _ = writeln!(
            out,
            "<a href=\"#\" rel=\"next\" hx-get=\"{}\" hx-target=\"#{CONTAINER_ID}\">Next</a>",
            escape_html(&page_link(page.current + 1))
        );
    }
    out.push_str("</nav>\n");
}
