//! ia-schemas
//!
//! Entity models shared by forms, services and the CLI.
//!
//! Each kind exists in two shapes:
//! - `Entity<K>`: persisted, always carries an id
//! - `Draft<K>`: form value, id is `None` until the record is created
//!
//! JSON layout matches the REST API: camelCase fields, id flattened next to
//! the kind's own fields, absent values as `null`.

mod entity;
mod model;

pub use entity::{Draft, Entity, EntityKind};
pub use model::*;
