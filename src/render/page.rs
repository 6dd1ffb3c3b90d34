// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::Features;

use super::{CONTAINER_ID, HEADER_ID, MODAL_ID, PER_PAGE_SLOT_ID, SEARCH_INPUT};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem;color:#1f2328}\
.table-toolbar{display:flex;gap:.75rem;align-items:center;margin-bottom:1rem}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.4rem .6rem;border-bottom:1px solid #d0d7de;text-align:left}\
tr.selected{background:#ddf4ff}\
.selection-bar{display:flex;gap:.5rem;align-items:center;margin-bottom:.5rem}\
.pagination{display:flex;gap:1rem;align-items:center;margin-top:1rem}\
.modal{position:fixed;inset:0;background:rgba(0,0,0,.35);display:flex;align-items:center;justify-content:center}\
.modal form{background:#fff;padding:1.5rem;border-radius:6px;min-width:22rem}\
.column-list{list-style:none;padding:0}\
.column-list li{display:flex;gap:.5rem;align-items:center;padding:.25rem 0}";

/// Landing page shell; every piece of the table loads as a fragment.
pub fn render_index(features: &Features) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>Users</title>\n");
    let _ = writeln!(out, "<script src=\"{HTMX_SRC}\"></script>");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n<main class=\"table-app\">\n");

    let _ = writeln!(
        out,
        "<div id=\"{HEADER_ID}\" hx-get=\"/table-header\" hx-trigger=\"load\" hx-swap=\"outerHTML\"></div>"
    );
    let _ = writeln!(
        out,
        "<div id=\"{CONTAINER_ID}\" hx-get=\"/table-data\" hx-trigger=\"load\" hx-swap=\"innerHTML\"></div>"
    );
    if features.column_settings {
        let _ = writeln!(out, "<div id=\"{MODAL_ID}\"></div>");
    }
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

/// Toolbar above the table: search box, column settings button and page-size slot,
/// each present only when its feature is enabled.
pub fn render_header(features: &Features) -> String {
    let mut out = String::with_capacity(512);
    let _ = writeln!(out, "<div id=\"{HEADER_ID}\" class=\"table-toolbar\">");

    if features.search {
        let _ = writeln!(
            out,
            "<input type=\"search\" name=\"{SEARCH_INPUT}\" placeholder=\"Search\" autocomplete=\"off\" \
             hx-get=\"/table-data\" hx-trigger=\"input changed delay:300ms, search\" \
             hx-target=\"#{CONTAINER_ID}\" hx-include=\".filter-row input\">"
        );
    }
    if features.column_settings {
        let _ = writeln!(
            out,
            "<button type=\"button\" hx-get=\"/table-settings-modal\" hx-target=\"#{MODAL_ID}\" \
             hx-include=\"[name='{SEARCH_INPUT}']\">Columns</button>"
        );
    }
    if features.pagination {
        let _ = writeln!(
            out,
            "<div id=\"{PER_PAGE_SLOT_ID}\" hx-get=\"/table-settings\" hx-trigger=\"load\" hx-swap=\"innerHTML\"></div>"
        );
    }

    out.push_str("</div>\n");
    out
}
