use std::fmt;

/// Errors surfaced by [`crate::EntityService`].
///
/// `key()` returns the error key the REST API reports for the same condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Create called with a record that already has an id.
    IdExists { entity: &'static str, id: String },
    /// Update called with a record without id.
    IdNull { entity: &'static str },
    /// Path id and record id differ.
    IdInvalid {
        entity: &'static str,
        path_id: String,
        body_id: String,
    },
    /// Update target does not exist.
    IdNotFound { entity: &'static str, id: String },
    /// Lookup target does not exist.
    NotFound { entity: &'static str, id: String },
    /// A required field is absent.
    Invalid {
        entity: &'static str,
        field: &'static str,
    },
}

impl ServiceError {
    pub fn key(&self) -> &'static str {
        match self {
            ServiceError::IdExists { .. } => "idexists",
            ServiceError::IdNull { .. } => "idnull",
            ServiceError::IdInvalid { .. } => "idinvalid",
            ServiceError::IdNotFound { .. } => "idnotfound",
            ServiceError::NotFound { .. } => "notfound",
            ServiceError::Invalid { .. } => "validation",
        }
    }

    pub fn entity(&self) -> &'static str {
        match self {
            ServiceError::IdExists { entity, .. }
            | ServiceError::IdNull { entity }
            | ServiceError::IdInvalid { entity, .. }
            | ServiceError::IdNotFound { entity, .. }
            | ServiceError::NotFound { entity, .. }
            | ServiceError::Invalid { entity, .. } => entity,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::IdExists { entity, id } => {
                write!(f, "{entity}.idexists: a new {entity} cannot already have an ID ({id})")
            }
            ServiceError::IdNull { entity } => write!(f, "{entity}.idnull: invalid id"),
            ServiceError::IdInvalid {
                entity,
                path_id,
                body_id,
            } => write!(
                f,
                "{entity}.idinvalid: path id '{path_id}' does not match body id '{body_id}'"
            ),
            ServiceError::IdNotFound { entity, id } => {
                write!(f, "{entity}.idnotfound: entity not found ({id})")
            }
            ServiceError::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            ServiceError::Invalid { entity, field } => {
                write!(f, "{entity}.validation: field '{field}' is required")
            }
        }
    }
}

impl std::error::Error for ServiceError {}
