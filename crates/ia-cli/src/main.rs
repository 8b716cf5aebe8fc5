use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ia_config::{AdminConfig, UnusedKeyPolicy};
use ia_service::Sort;
use tracing::{debug, warn};

mod commands;

#[derive(Parser)]
#[command(name = "ia")]
#[command(about = "Intent administration console", long_about = None)]
struct Cli {
    /// Layered config paths in merge order (base -> env -> local)
    #[arg(long = "config", global = true)]
    config_paths: Vec<String>,

    /// Seed document (JSON, one array per entity kind). Overrides data.seed_path.
    #[arg(long, global = true)]
    seed: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List records of one kind as JSON
    List {
        kind: Kind,

        /// Zero-based page; page size comes from api.page_size
        #[arg(long)]
        page: Option<usize>,

        /// Sort before paging: <field>[,asc|desc], e.g. name,desc
        #[arg(long)]
        sort: Option<Sort>,
    },

    /// Show one record as JSON plus its endpoint
    Show { kind: Kind, id: String },

    /// Relationship option lists for the intent update screen
    Options {
        /// Intent being edited; omit for the create screen
        #[arg(long)]
        intent: Option<String>,
    },

    /// Reconcile JSON records: prepend missing candidates to an existing list
    Reconcile {
        /// JSON array of objects with an "id"
        #[arg(long)]
        existing: String,

        /// JSON array of objects with an "id", or null
        #[arg(long)]
        candidates: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Kind {
    Article,
    Coupon,
    Store,
    StoreManager,
    RdCheckout,
    User,
    Intent,
}

fn main() -> Result<()> {
    // Silent if the file does not exist.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();
    let (cfg, unused_keys) = load_admin_config(&cli.config_paths)?;
    init_tracing(&cfg.log_filter);
    if !unused_keys.is_empty() {
        warn!("unused config keys: {}", unused_keys.join(", "));
    }
    debug!("effective config: {:?}", cfg);

    match cli.cmd {
        Commands::ConfigHash { paths } => {
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = ia_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }

        Commands::List { kind, page, sort } => {
            let b = commands::load_backoffice(cli.seed.as_deref(), &cfg)?;
            println!("{}", commands::list(&b, kind, page, sort, &cfg)?);
        }

        Commands::Show { kind, id } => {
            let b = commands::load_backoffice(cli.seed.as_deref(), &cfg)?;
            let (json, location) = commands::show(&b, kind, &id, &cfg)?;
            println!("{json}");
            println!("location={location}");
        }

        Commands::Options { intent } => {
            let b = commands::load_backoffice(cli.seed.as_deref(), &cfg)?;
            println!("{}", commands::options(&b, intent.as_deref())?);
        }

        Commands::Reconcile {
            existing,
            candidates,
        } => {
            println!("{}", commands::reconcile_files(&existing, &candidates)?);
        }
    }

    Ok(())
}

/// Defaults when no `--config` is given. Unused keys are returned for a warning.
fn load_admin_config(paths: &[String]) -> Result<(AdminConfig, Vec<String>)> {
    if paths.is_empty() {
        return Ok((AdminConfig::default(), Vec::new()));
    }

    let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
    let loaded = ia_config::load_layered_yaml(&path_refs)?;
    let cfg = AdminConfig::from_config_json(&loaded.config_json)
        .context("invalid admin config")?;

    let report = ia_config::report_unused_keys(&loaded.config_json, UnusedKeyPolicy::Warn)?;
    Ok((cfg, report.unused_leaf_pointers))
}

fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
