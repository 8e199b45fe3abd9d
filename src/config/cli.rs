use crate::config::toml_config::TomlConfig;
use crate::config::StoreSettings;
use crate::core::browse::{BrowseQuery, SortOrder};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog and fill a shopping cart from the terminal")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Product API base URL (overrides catalog.base_url)
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Number of products to load (overrides catalog.product_limit)
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Request timeout in seconds (overrides catalog.timeout_seconds)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Emit JSON logs
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List products, optionally searched, filtered and sorted
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },
    /// List the categories present in the catalog
    Categories,
    /// Show one product
    Show { id: u64 },
    /// Start an interactive cart session on stdin
    Shop,
}

impl Command {
    pub fn browse_query(&self) -> Option<BrowseQuery> {
        match self {
            Command::List {
                search,
                category,
                sort,
            } => Some(BrowseQuery {
                search: search.clone(),
                category: category.clone(),
                sort: *sort,
            }),
            _ => None,
        }
    }
}

impl CliConfig {
    /// Defaults, then the `--config` file if given, then flags.
    pub fn resolve(&self) -> Result<StoreSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.settings(),
            None => StoreSettings::default(),
        };

        if let Some(url) = &self.api_base_url {
            settings.api_base_url = url.clone();
        }
        if let Some(limit) = self.limit {
            settings.product_limit = limit;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = timeout;
        }
        if self.json_logs {
            settings.json_logs = true;
        }
        if self.verbose {
            settings.log_level = Some("debug".to_string());
        }

        Ok(settings)
    }
}
