use ia_schemas::{Article, Coupon, Entity, Intent, RdCheckout, Store, StoreManager, User};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{EntityService, ServiceError};

/// Seed document: one array per entity kind, records carry their ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Seed {
    pub articles: Vec<Entity<Article>>,
    pub coupons: Vec<Entity<Coupon>>,
    pub stores: Vec<Entity<Store>>,
    pub store_managers: Vec<Entity<StoreManager>>,
    pub rd_checkouts: Vec<Entity<RdCheckout>>,
    pub users: Vec<Entity<User>>,
    pub intents: Vec<Entity<Intent>>,
}

impl Seed {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// One service per entity kind.
#[derive(Debug, Clone, Default)]
pub struct Backoffice {
    pub articles: EntityService<Article>,
    pub coupons: EntityService<Coupon>,
    pub stores: EntityService<Store>,
    pub store_managers: EntityService<StoreManager>,
    pub rd_checkouts: EntityService<RdCheckout>,
    pub users: EntityService<User>,
    pub intents: EntityService<Intent>,
}

impl Backoffice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import every seeded record in file order. Duplicate ids fail with `IdExists`.
    pub fn from_seed(seed: Seed) -> Result<Self, ServiceError> {
        let mut b = Self::new();
        import_all(&mut b.articles, seed.articles)?;
        import_all(&mut b.coupons, seed.coupons)?;
        import_all(&mut b.stores, seed.stores)?;
        import_all(&mut b.store_managers, seed.store_managers)?;
        import_all(&mut b.rd_checkouts, seed.rd_checkouts)?;
        import_all(&mut b.users, seed.users)?;
        import_all(&mut b.intents, seed.intents)?;

        info!(
            "backoffice seeded: articles={} coupons={} stores={} store_managers={} rd_checkouts={} users={} intents={}",
            b.articles.len(),
            b.coupons.len(),
            b.stores.len(),
            b.store_managers.len(),
            b.rd_checkouts.len(),
            b.users.len(),
            b.intents.len()
        );
        Ok(b)
    }
}

fn import_all<K: ia_schemas::EntityKind>(
    service: &mut EntityService<K>,
    records: Vec<Entity<K>>,
) -> Result<(), ServiceError> {
    for e in records {
        service.import(e)?;
    }
    Ok(())
}
