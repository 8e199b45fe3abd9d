use crate::core::browse::{self, BrowseQuery, BrowseResult};
use crate::core::cart::Cart;
use crate::domain::model::Product;
use crate::domain::ports::CatalogSource;

/// What the views talk to: catalog reads plus the session cart.
///
/// Catalog failures never reach the caller. They are logged and the
/// view gets an empty list or `None`.
pub struct Storefront<S: CatalogSource> {
    source: S,
    product_limit: usize,
    categories_limit: usize,
    cart: Cart,
}

impl<S: CatalogSource> Storefront<S> {
    pub fn new(source: S, product_limit: usize, categories_limit: usize) -> Self {
        Self {
            source,
            product_limit,
            categories_limit,
            cart: Cart::new(),
        }
    }

    pub async fn load_products(&self) -> Vec<Product> {
        match self.source.products(self.product_limit).await {
            Ok(page) => {
                tracing::info!("Loaded {} products", page.products.len());
                page.products
            }
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn browse(&self, query: &BrowseQuery) -> BrowseResult {
        let products = self.load_products().await;
        browse::browse(&products, query)
    }

    pub async fn categories(&self) -> Vec<String> {
        match self.source.products(self.categories_limit).await {
            Ok(page) => browse::categories(&page.products),
            Err(e) => {
                tracing::error!("Error fetching categories: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn product_details(&self, id: u64) -> Option<Product> {
        match self.source.product(id).await {
            Ok(Some(product)) => Some(product),
            Ok(None) => {
                tracing::warn!("Product {} not found", id);
                None
            }
            Err(e) => {
                tracing::error!("Error fetching product {}: {}", id, e);
                None
            }
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
