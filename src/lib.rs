// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabulon: a server-driven data table (search, sort, filters, pagination, column layout,
//! include/exclude row selection) served as htmx fragments.

pub mod config;
pub mod format;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod server;
pub mod store;

