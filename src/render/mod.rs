// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTML rendering for the landing page and the htmx fragments.
//!
//! Renderers are plain functions from query views to markup strings. Every dynamic value
//! passes through [`text::escape_html`]; links are built with percent-encoded parameters.

pub mod page;
pub mod settings;
pub mod table;
mod text;

pub use page::{render_header, render_index};
pub use settings::{render_per_page, render_settings_modal};
pub use table::render_table;

pub(crate) const HEADER_ID: &str = "table-header";
pub(crate) const CONTAINER_ID: &str = "table-container";
pub(crate) const MODAL_ID: &str = "modal-container";
pub(crate) const PER_PAGE_SLOT_ID: &str = "per-page-slot";
pub(crate) const SEARCH_INPUT: &str = "q";
