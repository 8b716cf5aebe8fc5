use ia_schemas::{Entity, EntityKind};

use crate::{EntityService, ServiceError};

/// Route resolution for detail/update screens.
///
/// - no id => `Ok(None)` (create screen)
/// - known id => `Ok(Some(entity))`
/// - unknown id => `NotFound` (callers show the 404 page)
pub fn resolve<K: EntityKind>(
    service: &EntityService<K>,
    id: Option<&str>,
) -> Result<Option<Entity<K>>, ServiceError> {
    match id {
        None | Some("") => Ok(None),
        Some(id) => service.find(id).map(Some),
    }
}
