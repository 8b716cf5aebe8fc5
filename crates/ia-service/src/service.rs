use std::cmp::Ordering;
use std::hash::Hash;
use std::str::FromStr;

use ia_reconcile::{reconcile, same_entity, Identified};
use ia_schemas::{Draft, Entity, EntityKind};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::ServiceError;

/// Sorting, then paging, for [`EntityService::query`]. `size == None` returns
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRequest {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<Sort>,
}

impl QueryRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn page(page: usize, size: usize) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Sort key on a JSON field name (camelCase, `id` included).
///
/// Records whose field is missing or null go last in either order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Parses `"<field>"` or `"<field>,<asc|desc>"`.
impl FromStr for Sort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = match s.split_once(',') {
            Some((field, order)) => (field.trim(), order.trim()),
            None => (s.trim(), "asc"),
        };
        if field.is_empty() {
            return Err(format!("sort field is empty in '{s}'"));
        }
        let order = match order.to_ascii_lowercase().as_str() {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => return Err(format!("sort order must be asc or desc (got '{other}')")),
        };
        Ok(Self {
            field: field.to_string(),
            order,
        })
    }
}

/// CRUD service for one entity kind, backed by an insertion-ordered store.
#[derive(Debug, Clone)]
pub struct EntityService<K> {
    records: Vec<Entity<K>>,
}

impl<K: EntityKind> Default for EntityService<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntityKind> EntityService<K> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store a new record under a fresh UUID.
    pub fn create(&mut self, draft: Draft<K>) -> Result<Entity<K>, ServiceError> {
        debug!("request to save {} : {:?}", K::LABEL, draft);
        if let Some(id) = draft.id {
            return Err(ServiceError::IdExists {
                entity: K::NAME,
                id,
            });
        }
        check_required(&draft.data)?;

        let entity = Entity::new(Uuid::new_v4().to_string(), draft.data);
        self.records.push(entity.clone());
        Ok(entity)
    }

    /// Insert a record that already carries an id (seed loading).
    pub fn import(&mut self, entity: Entity<K>) -> Result<(), ServiceError> {
        if self.position(&entity.id).is_some() {
            return Err(ServiceError::IdExists {
                entity: K::NAME,
                id: entity.id,
            });
        }
        self.records.push(entity);
        Ok(())
    }

    /// Replace the record at `id` with `draft`.
    pub fn update(&mut self, id: &str, draft: Draft<K>) -> Result<Entity<K>, ServiceError> {
        debug!("request to update {} : {}, {:?}", K::LABEL, id, draft);
        let idx = self.check_target(id, draft.id.as_deref())?;
        check_required(&draft.data)?;

        let entity = Entity::new(id, draft.data);
        self.records[idx] = entity.clone();
        Ok(entity)
    }

    /// Merge present fields of `patch` into the record at `id`.
    pub fn partial_update(&mut self, id: &str, patch: Draft<K>) -> Result<Entity<K>, ServiceError> {
        debug!("request to partial update {} : {}, {:?}", K::LABEL, id, patch);
        let idx = self.check_target(id, patch.id.as_deref())?;

        let mut merged = self.records[idx].data.clone();
        merged.merge_patch(patch.data);
        check_required(&merged)?;

        self.records[idx].data = merged;
        Ok(self.records[idx].clone())
    }

    /// Update when the draft has an id, create otherwise.
    pub fn save(&mut self, draft: Draft<K>) -> Result<Entity<K>, ServiceError> {
        match draft.id.clone() {
            Some(id) => self.update(&id, draft),
            None => self.create(draft),
        }
    }

    pub fn find(&self, id: &str) -> Result<Entity<K>, ServiceError> {
        debug!("request to get {} : {}", K::LABEL, id);
        self.position(id)
            .map(|idx| self.records[idx].clone())
            .ok_or_else(|| ServiceError::NotFound {
                entity: K::NAME,
                id: id.to_string(),
            })
    }

    pub fn query(&self, req: &QueryRequest) -> Vec<Entity<K>> {
        debug!("request to get all {} : {:?}", K::LABEL, req);
        let mut records: Vec<&Entity<K>> = self.records.iter().collect();
        if let Some(sort) = &req.sort {
            sort_records(&mut records, sort);
        }

        match req.size {
            None => records.into_iter().cloned().collect(),
            Some(size) => records
                .into_iter()
                .skip(req.page.unwrap_or(0).saturating_mul(size))
                .take(size)
                .cloned()
                .collect(),
        }
    }

    /// Remove the record at `id`. A missing id is not an error.
    pub fn delete(&mut self, id: &str) {
        debug!("request to delete {} : {}", K::LABEL, id);
        self.records.retain(|e| e.id != id);
    }

    pub fn identifier<'a>(&self, entity: &'a Entity<K>) -> &'a str {
        entity.identifier()
    }

    /// Selected-option comparison for relationship dropdowns.
    pub fn compare(&self, a: Option<&Entity<K>>, b: Option<&Entity<K>>) -> bool {
        same_entity(a, b)
    }

    /// Prepend the candidates missing from `collection`, once each.
    pub fn add_to_collection_if_missing<T, I>(&self, collection: Vec<T>, candidates: I) -> Vec<T>
    where
        T: Identified,
        <T::Id as ToOwned>::Owned: Eq + Hash,
        I: IntoIterator<Item = Option<T>>,
    {
        reconcile(collection, candidates)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|e| e.id == id)
    }

    fn check_target(&self, path_id: &str, body_id: Option<&str>) -> Result<usize, ServiceError> {
        let body_id = body_id.ok_or(ServiceError::IdNull { entity: K::NAME })?;
        if body_id != path_id {
            return Err(ServiceError::IdInvalid {
                entity: K::NAME,
                path_id: path_id.to_string(),
                body_id: body_id.to_string(),
            });
        }
        self.position(path_id).ok_or_else(|| ServiceError::IdNotFound {
            entity: K::NAME,
            id: path_id.to_string(),
        })
    }
}

fn check_required<K: EntityKind>(data: &K) -> Result<(), ServiceError> {
    match data.missing_required() {
        Some(field) => Err(ServiceError::Invalid {
            entity: K::NAME,
            field,
        }),
        None => Ok(()),
    }
}

/// Stable sort on the serialized field; missing and null keys go last.
fn sort_records<K: EntityKind>(records: &mut Vec<&Entity<K>>, sort: &Sort) {
    let mut keyed: Vec<(Option<Value>, &Entity<K>)> = records
        .iter()
        .map(|e| {
            let key = serde_json::to_value(e)
                .ok()
                .and_then(|mut v| v.get_mut(&sort.field).map(Value::take))
                .filter(|v| !v.is_null());
            (key, *e)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match sort.order {
            SortOrder::Asc => cmp_json(a, b),
            SortOrder::Desc => cmp_json(b, a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    *records = keyed.into_iter().map(|(_, e)| e).collect();
}

fn cmp_json(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        // Mixed or nested values: fall back to their JSON text.
        _ => a.to_string().cmp(&b.to_string()),
    }
}
