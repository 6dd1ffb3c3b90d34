// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::canonical_row_id;
use crate::format::CalendarDate;

/// Field that identifies a row for selection purposes.
pub const ROW_ID_FIELD: &str = "id";

/// One dataset record.
///
/// Rows keep every field they were loaded with; the table only reads them through the
/// typed accessors below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Canonical id, or `None` when the row has no usable `id` field.
    pub fn id(&self) -> Option<String> {
        self.fields.get(ROW_ID_FIELD).and_then(canonical_row_id)
    }

    /// String form used by search, filters and rendering. Missing and `null` values are
    /// empty.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(text)) => Cow::Borrowed(text.as_str()),
            Some(Value::Number(number)) => Cow::Owned(number.to_string()),
            Some(Value::Bool(flag)) => Cow::Borrowed(if *flag { "true" } else { "false" }),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(Value::as_f64)
    }

    pub fn date(&self, key: &str) -> Option<CalendarDate> {
        match self.fields.get(key) {
            Some(Value::String(text)) => CalendarDate::parse_iso(text),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Builds a row from a JSON object literal; non-objects yield an empty row.
impl From<Value> for Row {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self::new(fields),
            _ => Self::default(),
        }
    }
}
