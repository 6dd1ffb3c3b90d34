// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::sync::OnceLock;

use regex::{Captures, Regex};

static ISO_DATE: OnceLock<Regex> = OnceLock::new();
static PATTERN_TOKEN: OnceLock<Regex> = OnceLock::new();

fn iso_date() -> &'static Regex {
    ISO_DATE.get_or_init(|| {
        Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("static iso date regex")
    })
}

fn pattern_token() -> &'static Regex {
    PATTERN_TOKEN.get_or_init(|| Regex::new("YYYY|MM|DD").expect("static pattern regex"))
}

/// A validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parses `YYYY-MM-DD`; month and day may omit their leading zero.
    pub fn parse_iso(text: &str) -> Option<Self> {
        let caps = iso_date().captures(text)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        Self::new(year, month, day)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// Replaces `YYYY`, `MM` and `DD` in `pattern`; everything else is copied through.
    pub fn format_with(&self, pattern: &str) -> String {
        pattern_token()
            .replace_all(pattern, |caps: &Captures<'_>| {
                let mut out = String::with_capacity(4);
                let _ = match &caps[0] {
                    "YYYY" => write!(out, "{:04}", self.year),
                    "MM" => write!(out, "{:02}", self.month),
                    _ => write!(out, "{:02}", self.day),
                };
                out
            })
            .into_owned()
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Formats an ISO date string with a display pattern.
///
/// Empty inputs and values that are not valid dates come back unchanged.
pub fn format_date<'a>(value: &'a str, pattern: &str) -> Cow<'a, str> {
    if value.is_empty() || pattern.is_empty() {
        return Cow::Borrowed(value);
    }

    match CalendarDate::parse_iso(value) {
        Some(date) => Cow::Owned(date.format_with(pattern)),
        None => {
            tracing::debug!(value, pattern, "value is not an ISO date; leaving unformatted");
            Cow::Borrowed(value)
        }
    }
}
