pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use self::config::{toml_config::TomlConfig, StoreSettings};
pub use self::core::{
    browse::{BrowseQuery, BrowseResult, SortOrder},
    cart::Cart,
    catalog::HttpCatalog,
    session::Session,
    storefront::Storefront,
};
pub use utils::error::{Result, StoreError};
