use crate::domain::model::{Product, ProductPage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn product_limit(&self) -> usize;
    /// Limit used when scanning the catalog for categories. 0 asks the API for everything.
    fn categories_limit(&self) -> usize;
    fn request_timeout(&self) -> Duration;
}

/// Read-only access to a product catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn products(&self, limit: usize) -> Result<ProductPage>;
    /// `Ok(None)` when the catalog has no product with this id.
    async fn product(&self, id: u64) -> Result<Option<Product>>;
}
