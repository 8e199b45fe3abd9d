use crate::domain::model::{Product, ProductPage};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

/// `CatalogSource` backed by a DummyJSON-style products API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: Url,
}

impl HttpCatalog {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Self::with_client(client, config.api_base_url())
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        // A trailing slash makes `join` append to the path instead of replacing its last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized).map_err(|e| StoreError::InvalidConfigValueError {
            field: "api_base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::ConfigError {
                message: format!("Cannot build catalog URL for '{}': {}", path, e),
            })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn products(&self, limit: usize) -> Result<ProductPage> {
        let mut url = self.endpoint("products")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(StoreError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let page: ProductPage = response.json().await?;
        tracing::debug!(
            "Fetched {} of {} products",
            page.products.len(),
            page.total
        );
        Ok(page)
    }

    async fn product(&self, id: u64) -> Result<Option<Product>> {
        let url = self.endpoint(&format!("products/{}", id))?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(StoreError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}
