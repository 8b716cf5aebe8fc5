use ia_reconcile::reconcile;
use ia_schemas::{Article, Coupon, Entity, Intent, RdCheckout, Store, StoreManager, User};
use serde::Serialize;
use tracing::debug;

use crate::{Backoffice, QueryRequest};

/// Option lists for every relationship field of the intent update screen.
///
/// Each list is guaranteed to contain the intent's current relation, even when
/// the queried collection does not.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRelationshipOptions {
    pub articles: Vec<Entity<Article>>,
    pub users: Vec<Entity<User>>,
    pub store_managers: Vec<Entity<StoreManager>>,
    pub stores: Vec<Entity<Store>>,
    pub coupons: Vec<Entity<Coupon>>,
    pub rd_checkouts: Vec<Entity<RdCheckout>>,
}

impl IntentRelationshipOptions {
    /// Query each related collection and reconcile it with `intent`'s relations.
    pub fn load(backoffice: &Backoffice, intent: Option<&Entity<Intent>>) -> Self {
        let all = QueryRequest::all();
        let fetched = Self {
            articles: backoffice.articles.query(&all),
            users: backoffice.users.query(&all),
            store_managers: backoffice.store_managers.query(&all),
            stores: backoffice.stores.query(&all),
            coupons: backoffice.coupons.query(&all),
            rd_checkouts: backoffice.rd_checkouts.query(&all),
        };

        match intent {
            Some(intent) => fetched.with_intent(intent),
            None => fetched,
        }
    }

    /// Make sure every relation of `intent` is present in its option list.
    pub fn with_intent(self, intent: &Entity<Intent>) -> Self {
        debug!("reconciling relationship options for Intent : {}", intent.id);
        let rel = &intent.data;
        Self {
            articles: reconcile(self.articles, [rel.article.clone()]),
            users: reconcile(self.users, [rel.user.clone()]),
            store_managers: reconcile(self.store_managers, [rel.store_manager.clone()]),
            stores: reconcile(self.stores, [rel.store.clone()]),
            coupons: reconcile(self.coupons, [rel.coupon.clone()]),
            rd_checkouts: reconcile(self.rd_checkouts, [rel.rd_checkout.clone()]),
        }
    }
}
