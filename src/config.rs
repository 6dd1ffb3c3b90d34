// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Startup configuration: bind address and data file locations.

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

const DATASET_FILE: &str = "users_1000.json";
const SESSIONS_FILE: &str = "sessions.json";
const SETTINGS_FILE: &str = "app_settings.json";

/// The three JSON documents kept inside the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dataset: PathBuf,
    pub sessions: PathBuf,
    pub settings: PathBuf,
}

impl DataPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dataset: dir.join(DATASET_FILE),
            sessions: dir.join(SESSIONS_FILE),
            settings: dir.join(SETTINGS_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data: DataPaths,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            data: DataPaths::default(),
        }
    }
}
