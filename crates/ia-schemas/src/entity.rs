use std::fmt;

use ia_reconcile::Identified;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Per-kind metadata and field-level behaviour.
pub trait EntityKind: Clone + Default + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    /// Entity name used in error keys (e.g. `"storeManager"`).
    const NAME: &'static str;
    /// Human label used in logs (e.g. `"StoreManager"`).
    const LABEL: &'static str;
    /// REST resource path relative to the server url (e.g. `"api/store-managers"`).
    const RESOURCE: &'static str;

    /// Partial update: every field present in `patch` overwrites `self`;
    /// absent fields keep their current value. Kinds may leave relations out
    /// of the merge (Intent does).
    fn merge_patch(&mut self, patch: Self);

    /// First required field that is absent, if any.
    fn missing_required(&self) -> Option<&'static str> {
        None
    }
}

/// A persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<K> {
    pub id: String,
    #[serde(flatten)]
    pub data: K,
}

impl<K> Entity<K> {
    pub fn new(id: impl Into<String>, data: K) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

impl<K> Identified for Entity<K> {
    type Id = str;

    fn identifier(&self) -> &str {
        &self.id
    }
}

/// A form value: an existing record being edited, or a new one (`id == None`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Draft<K> {
    pub id: Option<String>,
    #[serde(flatten)]
    pub data: K,
}

impl<K> Draft<K> {
    /// Draft for a record that does not exist yet.
    pub fn new(data: K) -> Self {
        Self { id: None, data }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Promote to a persisted shape. `None` for a new draft.
    pub fn into_entity(self) -> Option<Entity<K>> {
        let id = self.id?;
        Some(Entity { id, data: self.data })
    }
}

/// A new draft has no identifier; two new drafts compare equal.
impl<K> Identified for Draft<K> {
    type Id = Option<String>;

    fn identifier(&self) -> &Option<String> {
        &self.id
    }
}

impl<K> From<Entity<K>> for Draft<K> {
    fn from(e: Entity<K>) -> Self {
        Self {
            id: Some(e.id),
            data: e.data,
        }
    }
}
