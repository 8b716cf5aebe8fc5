//! Scenario: partial update merges present fields only
//!
//! 1. Present patch fields overwrite; absent fields keep their value.
//! 2. Intent relations are not touched by a partial update.
//! 3. Intent requires createdTime; other kinds have no required field.

use chrono::{TimeZone, Utc};
use ia_schemas::{Coupon, CouponType, Entity, EntityKind, Intent, Store};

#[test]
fn present_fields_overwrite_absent_fields_keep() {
    let mut c = Coupon {
        text: Some("old".to_string()),
        r#type: Some(CouponType::Percent),
        value: Some(10.0),
    };

    c.merge_patch(Coupon {
        text: None,
        r#type: Some(CouponType::Fixed),
        value: None,
    });

    assert_eq!(c.text.as_deref(), Some("old"));
    assert_eq!(c.r#type, Some(CouponType::Fixed));
    assert_eq!(c.value, Some(10.0));
}

#[test]
fn intent_patch_ignores_relations() {
    let mut current = Intent {
        created_time: Some(Utc.with_ymd_and_hms(2025, 7, 22, 23, 40, 0).unwrap()),
        store: Some(Entity::new("s-1", Store::default())),
        ..Intent::default()
    };

    current.merge_patch(Intent {
        updated_by: Some("ops".to_string()),
        store: Some(Entity::new("s-2", Store::default())),
        ..Intent::default()
    });

    assert_eq!(current.updated_by.as_deref(), Some("ops"));
    assert_eq!(current.store.as_ref().map(|s| s.id.as_str()), Some("s-1"));
}

#[test]
fn intent_requires_created_time() {
    assert_eq!(Intent::default().missing_required(), Some("createdTime"));

    let ok = Intent {
        created_time: Some(Utc::now()),
        ..Intent::default()
    };
    assert_eq!(ok.missing_required(), None);
    assert_eq!(Coupon::default().missing_required(), None);
}
