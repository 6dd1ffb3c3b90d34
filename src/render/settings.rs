// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::query::ColumnSettingsItem;

use super::text::escape_html;
use super::{CONTAINER_ID, MODAL_ID, SEARCH_INPUT};

/// Page-size selector. The current size is listed even when it is not one of `options`.
pub fn render_per_page(options: &[usize], current: usize) -> String {
    let mut sizes = options.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }

    let mut out = String::with_capacity(256 + sizes.len() * 48);
    out.push_str("<label class=\"per-page\">Rows per page\n");
    let _ = writeln!(
        out,
        "<select name=\"per_page\" hx-post=\"/table-settings\" hx-trigger=\"change\" \
         hx-target=\"#{CONTAINER_ID}\" hx-include=\"[name='{SEARCH_INPUT}']\">"
    );
    for size in sizes {
        let selected = if size == current { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{size}\"{selected}>{size}</option>");
    }
    out.push_str("</select>\n</label>\n");
    out
}

/// Column visibility/order editor.
///
/// Every column posts its key as `order` (in list order) and, when checked, as `visible`.
/// Columns with a date pattern get a `pattern_<key>` input prefilled with the override.
pub fn render_settings_modal(items: &[ColumnSettingsItem<'_>], query: Option<&str>) -> String {
    let mut out = String::with_capacity(1024 + items.len() * 320);
    let _ = writeln!(out, "<div class=\"modal\" role=\"dialog\" aria-label=\"Column settings\">");
    let _ = writeln!(
        out,
        "<form hx-post=\"/table-settings\" hx-target=\"#{CONTAINER_ID}\" \
         hx-on::after-request=\"document.getElementById('{MODAL_ID}').innerHTML = ''\">"
    );
    let _ = writeln!(
        out,
        "<input type=\"hidden\" name=\"{SEARCH_INPUT}\" value=\"{}\">",
        escape_html(query.unwrap_or_default())
    );

    out.push_str("<ul class=\"column-list\">\n");
    for item in items {
        let key = escape_html(item.key);
        let _ = writeln!(out, "<li draggable=\"true\" data-key=\"{key}\">");
        let _ = writeln!(out, "<input type=\"hidden\" name=\"order\" value=\"{key}\">");
        let _ = writeln!(
            out,
            "<label><input type=\"checkbox\" name=\"visible\" value=\"{key}\"{}> {}</label>",
            if item.visible { " checked" } else { "" },
            escape_html(item.label)
        );
        if item.custom_pattern.is_some() || item.default_pattern.is_some() {
            let _ = writeln!(
                out,
                "<input type=\"text\" name=\"pattern_{key}\" value=\"{}\" placeholder=\"{}\" \
                 aria-label=\"Date pattern for {}\">",
                escape_html(item.custom_pattern.unwrap_or_default()),
                escape_html(item.default_pattern.unwrap_or("YYYY-MM-DD")),
                escape_html(item.label)
            );
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");

    out.push_str("<button type=\"submit\">Apply</button>\n");
    let _ = writeln!(
        out,
        "<button type=\"button\" onclick=\"document.getElementById('{MODAL_ID}').innerHTML = ''\">Cancel</button>"
    );
    out.push_str("</form>\n</div>\n");
    out
}
