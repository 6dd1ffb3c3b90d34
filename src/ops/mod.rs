// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on session and settings state.
//!
//! Operations are parsed from request parameters, applied in place, and report whether
//! anything changed so the caller knows what to persist.

use std::fmt;

use crate::model::{AppSettings, ColumnCatalog, Selection, SelectionMode, SortDir, TableSession};

/// Row selection transitions.
///
/// The same operation means different set updates depending on the current mode; see
/// [`apply_selection_op`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOp {
    Toggle(String),
    SelectPage(Vec<String>),
    DeselectPage(Vec<String>),
    SelectGlobal,
    Clear,
}

impl SelectionOp {
    /// Parses the `action`, `id` and comma-separated `ids` form fields.
    ///
    /// A missing `id` parses as an empty toggle, which applies as a no-op.
    pub fn parse(action: &str, id: Option<&str>, ids: Option<&str>) -> Result<Self, OpParseError> {
        match action {
            "toggle" => Ok(Self::Toggle(id.map(str::trim).unwrap_or_default().to_owned())),
            "select_page" => Ok(Self::SelectPage(split_ids(ids))),
            "deselect_page" => Ok(Self::DeselectPage(split_ids(ids))),
            "select_global" => Ok(Self::SelectGlobal),
            "clear" => Ok(Self::Clear),
            other => Err(OpParseError::UnknownSelectionAction {
                action: other.to_owned(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::SelectPage(_) => "select_page",
            Self::DeselectPage(_) => "deselect_page",
            Self::SelectGlobal => "select_global",
            Self::Clear => "clear",
        }
    }
}

fn split_ids(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Applies `op` and returns whether the selection changed.
///
/// | op | include mode | exclude mode |
/// |---|---|---|
/// | toggle(r) | flip r in ids | flip r in ids |
/// | select_page(P) | ids ∪= P | ids −= P |
/// | deselect_page(P) | ids −= P | ids ∪= P |
/// | select_global | exclude, ∅ | exclude, ∅ |
/// | clear | include, ∅ | include, ∅ |
pub fn apply_selection_op(selection: &mut Selection, op: &SelectionOp) -> bool {
    let before = selection.clone();
    match op {
        SelectionOp::Toggle(id) => {
            if !id.is_empty() {
                let ids = selection.ids_mut();
                if !ids.remove(id) {
                    ids.insert(id.clone());
                }
            }
        }
        SelectionOp::SelectPage(page_ids) => match selection.mode() {
            SelectionMode::Include => add_ids(selection, page_ids),
            SelectionMode::Exclude => remove_ids(selection, page_ids),
        },
        SelectionOp::DeselectPage(page_ids) => match selection.mode() {
            SelectionMode::Include => remove_ids(selection, page_ids),
            SelectionMode::Exclude => add_ids(selection, page_ids),
        },
        SelectionOp::SelectGlobal => selection.reset(SelectionMode::Exclude),
        SelectionOp::Clear => selection.reset(SelectionMode::Include),
    }
    *selection != before
}

fn add_ids(selection: &mut Selection, page_ids: &[String]) {
    selection.ids_mut().extend(page_ids.iter().cloned());
}

fn remove_ids(selection: &mut Selection, page_ids: &[String]) {
    let ids = selection.ids_mut();
    for id in page_ids {
        ids.remove(id);
    }
}

/// Column visibility/order submitted from the settings editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnsUpdate {
    pub order: Vec<String>,
    pub visible: Vec<String>,
}

/// Parsed `POST /table-settings` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub per_page: Option<usize>,
    /// Present only when the form carried at least one `order` entry.
    pub columns: Option<ColumnsUpdate>,
    /// `pattern_<column key>` fields, in form order.
    pub patterns: Vec<(String, String)>,
}

/// What an applied [`SettingsUpdate`] touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOutcome {
    pub session_changed: bool,
    pub settings_changed: bool,
}

/// Requested sort from `sort`/`dir` query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortUpdate {
    pub key: String,
    pub dir: SortDir,
}

impl SortUpdate {
    /// `None` when no sort key was given; a missing `dir` means ascending.
    pub fn parse(sort: Option<&str>, dir: Option<&str>) -> Option<Self> {
        let key = sort.filter(|key| !key.is_empty())?;
        Some(Self {
            key: key.to_owned(),
            dir: dir.map(SortDir::parse_lenient).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpParseError {
    UnknownSelectionAction { action: String },
}

impl fmt::Display for OpParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSelectionAction { action } => {
                write!(f, "unknown selection action {action:?}")
            }
        }
    }
}

impl std::error::Error for OpParseError {}

// Settings and sort application helpers.
include!("ops_impl.rs");
