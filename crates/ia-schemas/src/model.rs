use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, EntityKind};

fn take_some<T>(slot: &mut Option<T>, patch: Option<T>) {
    if patch.is_some() {
        *slot = patch;
    }
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Article {
    pub price: Option<f64>,
}

impl EntityKind for Article {
    const NAME: &'static str = "article";
    const LABEL: &'static str = "Article";
    const RESOURCE: &'static str = "api/articles";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.price, patch.price);
    }
}

// ---------------------------------------------------------------------------
// Coupon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponType {
    Percent,
    Fixed,
}

impl CouponType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CouponType::Percent => "PERCENT",
            CouponType::Fixed => "FIXED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coupon {
    pub text: Option<String>,
    pub r#type: Option<CouponType>,
    pub value: Option<f64>,
}

impl EntityKind for Coupon {
    const NAME: &'static str = "coupon";
    const LABEL: &'static str = "Coupon";
    const RESOURCE: &'static str = "api/coupons";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.text, patch.text);
        take_some(&mut self.r#type, patch.r#type);
        take_some(&mut self.value, patch.value);
    }
}

// ---------------------------------------------------------------------------
// Store / StoreManager
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Store {
    pub name: Option<String>,
}

impl EntityKind for Store {
    const NAME: &'static str = "store";
    const LABEL: &'static str = "Store";
    const RESOURCE: &'static str = "api/stores";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.name, patch.name);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreManager {
    pub name: Option<String>,
}

impl EntityKind for StoreManager {
    const NAME: &'static str = "storeManager";
    const LABEL: &'static str = "StoreManager";
    const RESOURCE: &'static str = "api/store-managers";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.name, patch.name);
    }
}

// ---------------------------------------------------------------------------
// RdCheckout
// ---------------------------------------------------------------------------

/// Checkout record as reported by the payment side. Status values are free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RdCheckout {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub order_id: Option<String>,
    pub order_delivery_status: Option<String>,
}

impl EntityKind for RdCheckout {
    const NAME: &'static str = "rdCheckout";
    const LABEL: &'static str = "RDCheckout";
    const RESOURCE: &'static str = "api/rd-checkouts";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.status, patch.status);
        take_some(&mut self.payment_status, patch.payment_status);
        take_some(&mut self.order_id, patch.order_id);
        take_some(&mut self.order_delivery_status, patch.order_delivery_status);
    }
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// Account reference. Only the login is carried; accounts are managed elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub login: Option<String>,
}

impl EntityKind for User {
    const NAME: &'static str = "user";
    const LABEL: &'static str = "User";
    const RESOURCE: &'static str = "api/users";

    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.login, patch.login);
    }
}

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Intent {
    pub commission: Option<f64>,
    pub created_time: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_time: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
    pub article: Option<Entity<Article>>,
    pub user: Option<Entity<User>>,
    pub store_manager: Option<Entity<StoreManager>>,
    pub store: Option<Entity<Store>>,
    pub coupon: Option<Entity<Coupon>>,
    pub rd_checkout: Option<Entity<RdCheckout>>,
}

impl EntityKind for Intent {
    const NAME: &'static str = "intent";
    const LABEL: &'static str = "Intent";
    const RESOURCE: &'static str = "api/intents";

    /// Scalar fields only; relations are changed through a full update.
    fn merge_patch(&mut self, patch: Self) {
        take_some(&mut self.commission, patch.commission);
        take_some(&mut self.created_time, patch.created_time);
        take_some(&mut self.created_by, patch.created_by);
        take_some(&mut self.updated_time, patch.updated_time);
        take_some(&mut self.updated_by, patch.updated_by);
    }

    fn missing_required(&self) -> Option<&'static str> {
        if self.created_time.is_none() {
            return Some("createdTime");
        }
        None
    }
}
