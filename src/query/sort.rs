// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use serde_json::Value;

use crate::model::{Row, SortDir};

/// Comparison key of one cell.
///
/// Numbers (and booleans, as 0/1) compare numerically, everything else as lowercased
/// text; missing or `null` cells are the empty string. Numbers order before text.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    fn of(row: &Row, key: &str) -> Self {
        match row.get(key) {
            None | Some(Value::Null) => Self::Text(String::new()),
            Some(Value::Number(number)) => Self::Number(number.as_f64().unwrap_or(0.0)),
            Some(Value::Bool(flag)) => Self::Number(if *flag { 1.0 } else { 0.0 }),
            Some(_) => Self::Text(row.text(key).to_lowercase()),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

/// Stable sort of `rows` by the cell at `key`.
///
/// Descending order reverses the comparison rather than the result, so rows with equal
/// keys keep their input order in both directions.
pub fn sort_rows(rows: &mut Vec<&Row>, key: &str, dir: SortDir) {
    if key.is_empty() || rows.len() < 2 {
        return;
    }

    let mut keyed: Vec<(SortValue, &Row)> =
        rows.drain(..).map(|row| (SortValue::of(row, key), row)).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}
