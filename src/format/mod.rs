// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Display formatting of cell values.
//!
//! Columns may carry a display pattern (`YYYY`, `MM`, `DD` placeholders) that reshapes
//! ISO dates before they reach the HTML.

pub mod date;

pub use date::{format_date, CalendarDate};
