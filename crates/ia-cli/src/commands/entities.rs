use std::fs;

use anyhow::{anyhow, Context, Result};
use ia_config::AdminConfig;
use ia_schemas::EntityKind;
use ia_service::{
    resolve, Backoffice, EntityService, IntentRelationshipOptions, QueryRequest, Seed, Sort,
};
use tracing::info;

use crate::Kind;

/// Seed path precedence: `--seed`, then `data.seed_path`.
pub fn load_backoffice(seed_flag: Option<&str>, cfg: &AdminConfig) -> Result<Backoffice> {
    let path = seed_flag
        .map(str::to_string)
        .or_else(|| cfg.seed_path.clone())
        .ok_or_else(|| anyhow!("no seed document: pass --seed or set data.seed_path"))?;

    info!("loading seed document {}", path);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read seed document: {path}"))?;
    let seed = Seed::from_json_str(&raw)
        .with_context(|| format!("failed to parse seed document: {path}"))?;
    Backoffice::from_seed(seed).context("invalid seed document")
}

/// Sorted first, then paged by `api.page_size`.
pub fn list(
    b: &Backoffice,
    kind: Kind,
    page: Option<usize>,
    sort: Option<Sort>,
    cfg: &AdminConfig,
) -> Result<String> {
    let mut req = match page {
        Some(p) => QueryRequest::page(p, cfg.page_size),
        None => QueryRequest::all(),
    };
    req.sort = sort;

    match kind {
        Kind::Article => list_json(&b.articles, &req),
        Kind::Coupon => list_json(&b.coupons, &req),
        Kind::Store => list_json(&b.stores, &req),
        Kind::StoreManager => list_json(&b.store_managers, &req),
        Kind::RdCheckout => list_json(&b.rd_checkouts, &req),
        Kind::User => list_json(&b.users, &req),
        Kind::Intent => list_json(&b.intents, &req),
    }
}

/// Returns the record JSON and its endpoint.
pub fn show(b: &Backoffice, kind: Kind, id: &str, cfg: &AdminConfig) -> Result<(String, String)> {
    match kind {
        Kind::Article => show_json(&b.articles, id, cfg),
        Kind::Coupon => show_json(&b.coupons, id, cfg),
        Kind::Store => show_json(&b.stores, id, cfg),
        Kind::StoreManager => show_json(&b.store_managers, id, cfg),
        Kind::RdCheckout => show_json(&b.rd_checkouts, id, cfg),
        Kind::User => show_json(&b.users, id, cfg),
        Kind::Intent => show_json(&b.intents, id, cfg),
    }
}

pub fn options(b: &Backoffice, intent_id: Option<&str>) -> Result<String> {
    let intent = resolve(&b.intents, intent_id)?;
    let opts = IntentRelationshipOptions::load(b, intent.as_ref());
    serde_json::to_string_pretty(&opts).context("options serialize failed")
}

fn list_json<K: EntityKind>(svc: &EntityService<K>, req: &QueryRequest) -> Result<String> {
    let records = svc.query(req);
    serde_json::to_string_pretty(&records).context("list serialize failed")
}

fn show_json<K: EntityKind>(
    svc: &EntityService<K>,
    id: &str,
    cfg: &AdminConfig,
) -> Result<(String, String)> {
    let record = svc.find(id)?;
    let json = serde_json::to_string_pretty(&record).context("record serialize failed")?;
    let location = format!("{}/{}", cfg.endpoint_for(K::RESOURCE), record.id);
    Ok((json, location))
}
