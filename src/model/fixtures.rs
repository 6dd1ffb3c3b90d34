// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::json;

use super::row::Row;

/// Small user-profile dataset shaped like the bundled one.
pub(crate) fn users() -> Vec<Row> {
    [
        json!({"id": 1, "full_name": "Bob Stone", "email": "bob@example.com", "country": "Germany",
               "status": "active", "age": 30, "balance_eur": 120.5, "created_date": "2023-05-01"}),
        json!({"id": 2, "full_name": "Amy Pond", "email": "amy@example.org", "country": "United Kingdom",
               "status": "inactive", "age": 25, "balance_eur": 80, "created_date": "2024-01-15"}),
        json!({"id": 3, "full_name": "Carla Ruiz", "email": "carla@example.es", "country": "Spain",
               "status": "active", "age": 41, "balance_eur": 310.0, "created_date": "2022-11-30"}),
        json!({"id": 4, "full_name": "dave brown", "email": "dave@example.com", "country": "Germany",
               "status": "pending", "age": 30, "balance_eur": 5, "created_date": "2024-06-02"}),
        json!({"id": 5, "full_name": "Eve Adams", "email": "eve@example.net", "country": "France",
               "status": "active", "age": 52, "created_date": "2021-08-19"}),
    ]
    .into_iter()
    .map(Row::from)
    .collect()
}

/// `count` rows with ids `1..=count`, cycling through a few countries and statuses.
pub(crate) fn numbered_users(count: usize) -> Vec<Row> {
    const COUNTRIES: [&str; 3] = ["Germany", "Spain", "France"];
    const STATUSES: [&str; 2] = ["active", "inactive"];

    (1..=count)
        .map(|id| {
            Row::from(json!({
                "id": id,
                "full_name": format!("User {id:03}"),
                "email": format!("user{id}@example.com"),
                "country": COUNTRIES[id % COUNTRIES.len()],
                "status": STATUSES[id % STATUSES.len()],
                "age": 20 + (id % 40),
                "balance_eur": (id * 7) as f64 / 2.0,
                "created_date": format!("2024-01-{:02}", 1 + id % 28),
            }))
        })
        .collect()
}
