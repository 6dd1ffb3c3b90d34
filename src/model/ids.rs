// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SESSION_ID_MAX_LEN: usize = 128;

/// Opaque identifier of a browser session.
///
/// The value travels in the `session_id` cookie, so it is restricted to visible ASCII
/// without the characters that would break a `Cookie` header (`;`, `,`, `"`, `\`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId {
    value: String,
}

impl SessionId {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_session_id(&value)?;
        Ok(Self { value })
    }

    /// Mints a fresh random identifier.
    pub fn generate() -> Self {
        Self {
            value: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SessionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for SessionId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Serialize for SessionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    TooLong { len: usize },
    InvalidChar { ch: char },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::TooLong { len } => {
                write!(f, "id must be at most {SESSION_ID_MAX_LEN} bytes, got {len}")
            }
            Self::InvalidChar { ch } => write!(f, "id must not contain {ch:?}"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_session_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.len() > SESSION_ID_MAX_LEN {
        return Err(IdError::TooLong { len: value.len() });
    }
    if let Some(ch) = value
        .chars()
        .find(|ch| !ch.is_ascii_graphic() || matches!(ch, ';' | ',' | '"' | '\\'))
    {
        return Err(IdError::InvalidChar { ch });
    }
    Ok(())
}

/// Canonical string form of a row's `id` field.
///
/// Integers are written in decimal without leading zeros, strings are used verbatim and
/// other numbers use their JSON text. Selection state only ever stores this form.
pub fn canonical_row_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                Some(itoa::Buffer::new().format(n).to_owned())
            } else if let Some(n) = number.as_u64() {
                Some(itoa::Buffer::new().format(n).to_owned())
            } else {
                Some(number.to_string())
            }
        }
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        }
    }
}
