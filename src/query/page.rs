// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;

/// Rows shown when pagination is switched off.
pub const UNPAGINATED_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl PageInfo {
    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

/// Clamps a requested 1-based page into `[1, total_pages]`, or 1 when there are no pages.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    if total_pages == 0 {
        return 1;
    }
    let requested = usize::try_from(requested.max(1)).unwrap_or(usize::MAX);
    requested.min(total_pages)
}

/// Slice bounds of the requested page over `total_items` rows.
pub fn paginate(total_items: usize, per_page: usize, requested: i64) -> (Range<usize>, PageInfo) {
    let per_page = per_page.max(1);
    let total_pages = total_items.div_ceil(per_page);
    let current = clamp_page(requested, total_pages);

    let start = ((current - 1) * per_page).min(total_items);
    let end = (start + per_page).min(total_items);

    let info = PageInfo {
        current,
        total_pages,
        total_items,
        per_page,
    };
    (start..end, info)
}
