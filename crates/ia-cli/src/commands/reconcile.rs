use std::fs;

use anyhow::{Context, Result};
use ia_reconcile::{reconcile, Identified};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Any JSON object with a string `id`; other fields pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    pub id: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Identified for JsonRecord {
    type Id = str;

    fn identifier(&self) -> &str {
        &self.id
    }
}

pub fn reconcile_files(existing_path: &str, candidates_path: &str) -> Result<String> {
    let existing: Vec<JsonRecord> = read_json(existing_path)?;
    let candidates: Vec<Option<JsonRecord>> = read_json(candidates_path)?;

    let out = reconcile(existing, candidates);
    serde_json::to_string_pretty(&out).context("reconciled list serialize failed")
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read json path: {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid json in {path}"))
}
