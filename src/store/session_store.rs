// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tabulon-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabulon and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::model::{SessionDefaults, SessionId, StoredSession, TableSession};

/// All known sessions, keyed by cookie identifier. Sessions never expire.
///
/// Loaded sessions stay in their stored form until first resolved, then are normalized
/// once and kept populated.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    ready: BTreeMap<SessionId, TableSession>,
    stored: BTreeMap<SessionId, StoredSession>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SlotRef<'a> {
    Ready(&'a TableSession),
    Stored(&'a StoredSession),
}

/// Result of [`SessionStore::resolve`].
#[derive(Debug)]
pub struct Resolved<'a> {
    pub session_id: SessionId,
    /// A new identifier was minted; the caller must set the cookie.
    pub is_new: bool,
    /// Defaults were filled in; the caller must persist the store.
    pub needs_save: bool,
    pub session: &'a mut TableSession,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the store from the persisted sessions document.
    ///
    /// Entries with an unusable id or an undecodable body are skipped, so one bad entry
    /// does not discard the rest.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(entries) = value else {
            tracing::warn!("sessions document is not an object; starting empty");
            return Self::default();
        };

        let mut stored = BTreeMap::new();
        for (raw_id, body) in entries {
            let session_id = match SessionId::new(raw_id) {
                Ok(session_id) => session_id,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping stored session with invalid id");
                    continue;
                }
            };
            match serde_json::from_value::<StoredSession>(body) {
                Ok(session) => {
                    stored.insert(session_id, session);
                }
                Err(err) => {
                    tracing::warn!(%session_id, error = %err, "skipping undecodable stored session");
                }
            }
        }
        Self {
            ready: BTreeMap::new(),
            stored,
        }
    }

    pub fn len(&self) -> usize {
        self.ready.len() + self.stored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty() && self.stored.is_empty()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.ready.contains_key(session_id) || self.stored.contains_key(session_id)
    }

    /// Finds the session for `requested`, or mints a new one when it is absent, invalid
    /// or unknown. The returned session always has every field populated.
    pub fn resolve(&mut self, requested: Option<&str>, defaults: &SessionDefaults) -> Resolved<'_> {
        let known = requested
            .and_then(|raw| SessionId::new(raw).ok())
            .filter(|session_id| self.contains(session_id.as_str()));

        let (session_id, is_new) = match known {
            Some(session_id) => (session_id, false),
            None => (self.mint_id(), true),
        };

        let mut needs_save = is_new;
        if !self.ready.contains_key(&session_id) {
            let stored = self.stored.remove(&session_id).unwrap_or_default();
            let (session, defaulted) = stored.normalize(defaults);
            needs_save |= defaulted;
            self.ready.insert(session_id.clone(), session);
        }
        let session = self
            .ready
            .entry(session_id.clone())
            .or_insert_with(|| TableSession::new(defaults));

        Resolved {
            session_id,
            is_new,
            needs_save,
            session,
        }
    }

    fn mint_id(&self) -> SessionId {
        loop {
            let candidate = SessionId::generate();
            if !self.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }
}

impl Serialize for SessionStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut slots: BTreeMap<&str, SlotRef<'_>> = BTreeMap::new();
        for (session_id, session) in &self.ready {
            slots.insert(session_id.as_str(), SlotRef::Ready(session));
        }
        for (session_id, stored) in &self.stored {
            slots.insert(session_id.as_str(), SlotRef::Stored(stored));
        }

        let mut map = serializer.serialize_map(Some(slots.len()))?;
        for (session_id, slot) in &slots {
            map.serialize_entry(session_id, slot)?;
        }
        map.end()
    }
}
