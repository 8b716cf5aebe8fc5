use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_APP_NAME: &str = "intentAdmin";
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 1000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Typed view over the effective config JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    pub app_name: String,
    /// Prefix prepended to resource paths (empty = same origin).
    pub server_url: String,
    pub page_size: usize,
    pub seed_path: Option<String>,
    pub log_filter: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            server_url: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            seed_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AdminConfig {
    /// Build from canonical config JSON (produced by `load_layered_yaml*`).
    ///
    /// All fields are optional:
    /// - app.name (default "intentAdmin")
    /// - api.server_url (default "")
    /// - api.page_size (number or string, 1..=1000, default 20)
    /// - data.seed_path
    /// - logging.filter (default "info")
    pub fn from_config_json(cfg: &Value) -> Result<Self> {
        let d = Self::default();

        let app_name = opt_str(cfg, "/app/name")?.unwrap_or(d.app_name);
        let server_url = opt_str(cfg, "/api/server_url")?.unwrap_or(d.server_url);
        let seed_path = opt_str(cfg, "/data/seed_path")?;
        let log_filter = opt_str(cfg, "/logging/filter")?.unwrap_or(d.log_filter);

        let page_size = match cfg.pointer("/api/page_size") {
            None | Some(Value::Null) => d.page_size,
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| anyhow!("api.page_size must be a positive integer (got {n})"))?
                as usize,
            Some(Value::String(s)) => s
                .trim()
                .parse::<usize>()
                .map_err(|_| anyhow!("api.page_size must be a positive integer (got '{s}')"))?,
            Some(other) => return Err(anyhow!("api.page_size has invalid type: {other}")),
        };
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(anyhow!(
                "api.page_size out of bounds (1..={MAX_PAGE_SIZE}): {page_size}"
            ));
        }

        Ok(Self {
            app_name,
            server_url,
            page_size,
            seed_path,
            log_filter,
        })
    }

    /// Absolute endpoint for a resource path such as `api/coupons`.
    pub fn endpoint_for(&self, resource: &str) -> String {
        format!("{}{}", self.server_url, resource)
    }
}

fn opt_str(cfg: &Value, ptr: &str) -> Result<Option<String>> {
    match cfg.pointer(ptr) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(anyhow!(
            "config {} must be a string (got {other})",
            ptr.trim_start_matches('/').replace('/', ".")
        )),
    }
}
