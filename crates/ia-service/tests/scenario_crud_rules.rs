//! Scenario: CRUD rules of the entity services
//!
//! 1. Create assigns an id; a draft that already has one is rejected (idexists).
//! 2. Update requires a body id (idnull), matching the path (idinvalid),
//!    of an existing record (idnotfound).
//! 3. Partial update merges present fields only.
//! 4. Intent create/update rejects a missing createdTime.
//! 5. `save` dispatches on the presence of an id.
//! 6. Delete removes; deleting an unknown id is a no-op.
//! 7. Query keeps insertion order.

use chrono::Utc;
use ia_schemas::{Coupon, CouponType, Draft, Entity, Intent, Store};
use ia_service::{EntityService, QueryRequest, ServiceError};

fn coupon(text: &str) -> Draft<Coupon> {
    Draft::new(Coupon {
        text: Some(text.to_string()),
        r#type: Some(CouponType::Percent),
        value: Some(10.0),
    })
}

// ---------------------------------------------------------------------------
// 1. Create
// ---------------------------------------------------------------------------

#[test]
fn create_assigns_id_and_stores_record() {
    let mut svc = EntityService::<Coupon>::new();
    let created = svc.create(coupon("AAAAAAAAAA")).unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(svc.len(), 1);
    assert_eq!(svc.find(&created.id).unwrap(), created);
}

#[test]
fn create_with_existing_id_is_rejected() {
    let mut svc = EntityService::<Coupon>::new();
    let mut draft = coupon("x");
    draft.id = Some("already".to_string());

    let err = svc.create(draft).unwrap_err();
    assert_eq!(err.key(), "idexists");
    assert_eq!(err.entity(), "coupon");
    assert!(svc.is_empty(), "rejected create must not store anything");
}

// ---------------------------------------------------------------------------
// 2. Update id rules
// ---------------------------------------------------------------------------

#[test]
fn update_id_rules() {
    let mut svc = EntityService::<Coupon>::new();
    let created = svc.create(coupon("before")).unwrap();

    let no_id = coupon("after");
    assert_eq!(
        svc.update(&created.id, no_id).unwrap_err(),
        ServiceError::IdNull { entity: "coupon" }
    );

    let mut other = coupon("after");
    other.id = Some("someone-else".to_string());
    assert_eq!(svc.update(&created.id, other).unwrap_err().key(), "idinvalid");

    let mut ghost = coupon("after");
    ghost.id = Some("ghost".to_string());
    assert_eq!(svc.update("ghost", ghost).unwrap_err().key(), "idnotfound");

    let mut ok = coupon("after");
    ok.id = Some(created.id.clone());
    let updated = svc.update(&created.id, ok).unwrap();
    assert_eq!(updated.data.text.as_deref(), Some("after"));
    assert_eq!(svc.len(), 1);
}

// ---------------------------------------------------------------------------
// 3. Partial update
// ---------------------------------------------------------------------------

#[test]
fn partial_update_merges_present_fields() {
    let mut svc = EntityService::<Coupon>::new();
    let created = svc.create(coupon("keep me")).unwrap();

    let patch = Draft {
        id: Some(created.id.clone()),
        data: Coupon {
            r#type: Some(CouponType::Fixed),
            ..Coupon::default()
        },
    };
    let patched = svc.partial_update(&created.id, patch).unwrap();

    assert_eq!(patched.data.text.as_deref(), Some("keep me"));
    assert_eq!(patched.data.r#type, Some(CouponType::Fixed));
    assert_eq!(patched.data.value, Some(10.0));
    assert_eq!(svc.find(&created.id).unwrap(), patched);
}

#[test]
fn partial_update_applies_id_rules() {
    let mut svc = EntityService::<Store>::new();
    let err = svc
        .partial_update(
            "nope",
            Draft {
                id: Some("nope".to_string()),
                data: Store::default(),
            },
        )
        .unwrap_err();
    assert_eq!(err.key(), "idnotfound");
}

// ---------------------------------------------------------------------------
// 4. Required fields
// ---------------------------------------------------------------------------

#[test]
fn intent_without_created_time_is_rejected() {
    let mut svc = EntityService::<Intent>::new();
    let err = svc.create(Draft::new(Intent::default())).unwrap_err();
    assert_eq!(
        err,
        ServiceError::Invalid {
            entity: "intent",
            field: "createdTime"
        }
    );
    assert!(err.to_string().contains("createdTime"));

    let created = svc
        .create(Draft::new(Intent {
            created_time: Some(Utc::now()),
            ..Intent::default()
        }))
        .unwrap();

    let cleared = Draft {
        id: Some(created.id.clone()),
        data: Intent::default(),
    };
    assert_eq!(svc.update(&created.id, cleared).unwrap_err().key(), "validation");
}

// ---------------------------------------------------------------------------
// 5. Save
// ---------------------------------------------------------------------------

#[test]
fn save_creates_then_updates() {
    let mut svc = EntityService::<Store>::new();
    let created = svc
        .save(Draft::new(Store {
            name: Some("Harbor".to_string()),
        }))
        .unwrap();

    let mut edit = Draft::from(created.clone());
    edit.data.name = Some("Harbor East".to_string());
    let saved = svc.save(edit).unwrap();

    assert_eq!(saved.id, created.id);
    assert_eq!(svc.len(), 1);
    assert_eq!(saved.data.name.as_deref(), Some("Harbor East"));
}

// ---------------------------------------------------------------------------
// 6. Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_removes_and_ignores_unknown() {
    let mut svc = EntityService::<Store>::new();
    let a = svc.create(Draft::new(Store::default())).unwrap();

    svc.delete("unknown");
    assert_eq!(svc.len(), 1);

    svc.delete(&a.id);
    assert!(svc.is_empty());
    assert_eq!(svc.find(&a.id).unwrap_err().key(), "notfound");
}

// ---------------------------------------------------------------------------
// 7. Query order + helpers
// ---------------------------------------------------------------------------

#[test]
fn query_keeps_insertion_order_and_helpers_delegate() {
    let mut svc = EntityService::<Store>::new();
    for id in ["s-3", "s-1", "s-2"] {
        svc.import(Entity::new(id, Store::default())).unwrap();
    }

    let all = svc.query(&QueryRequest::all());
    let ids: Vec<&str> = all.iter().map(|e| svc.identifier(e)).collect();
    assert_eq!(ids, vec!["s-3", "s-1", "s-2"]);

    assert!(svc.compare(Some(&all[0]), Some(&all[0])));
    assert!(!svc.compare(Some(&all[0]), Some(&all[1])));
    assert!(svc.compare(None, None));

    let extra = Entity::new("s-9", Store::default());
    let merged = svc.add_to_collection_if_missing(all.clone(), [Some(extra), Some(all[1].clone())]);
    assert_eq!(merged.len(), 4);
    assert_eq!(merged[0].id, "s-9");

    assert_eq!(
        svc.import(Entity::new("s-1", Store::default())).unwrap_err().key(),
        "idexists"
    );
}
