use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product as served by the products API. Everything but `id` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<Decimal>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub discount_percentage: Option<Decimal>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn new(id: u64, title: &str, price: Decimal) -> Self {
        Self {
            id,
            title: Some(title.to_string()),
            description: None,
            price: Some(price),
            thumbnail: None,
            category: None,
            rating: None,
            stock: None,
            discount_percentage: None,
            brand: None,
            images: Vec::new(),
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled product")
    }

    pub fn availability(&self) -> Availability {
        Availability::from_stock(self.stock.unwrap_or(0))
    }

    /// Rounded discount badge, e.g. `Some(12)` for 12.48%.
    pub fn discount_badge(&self) -> Option<u32> {
        use rust_decimal::prelude::ToPrimitive;

        self.discount_percentage
            .filter(|d| d.is_sign_positive() && !d.is_zero())
            .and_then(|d| d.round().to_u32())
    }
}

/// List envelope returned by `GET /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "deserialize_products")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Keeps every well-formed product; malformed entries are logged and dropped.
fn deserialize_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value::<Product>(value) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Skipping malformed product at index {}: {}", idx, e);
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    OutOfStock,
    LowStock(u32),
    InStock(u32),
}

impl Availability {
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => Availability::OutOfStock,
            n if n < Self::LOW_STOCK_THRESHOLD => Availability::LowStock(n),
            n => Availability::InStock(n),
        }
    }

    pub fn can_add_to_cart(&self) -> bool {
        !matches!(self, Availability::OutOfStock)
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Availability::OutOfStock => write!(f, "Out of Stock"),
            Availability::LowStock(n) => write!(f, "Only {} left", n),
            Availability::InStock(_) => write!(f, "In Stock"),
        }
    }
}

/// The part of a product the cart keeps once it has been added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: u64,
    pub title: String,
    pub price: Decimal,
    pub thumbnail: Option<String>,
    pub stock: u32,
    pub discount_percentage: Decimal,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title_or_default().to_string(),
            price: product.price.unwrap_or_default(),
            thumbnail: product.thumbnail.clone(),
            stock: product.stock.unwrap_or(0),
            discount_percentage: product.discount_percentage.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

/// Two-decimal dollar rendering used by the terminal views.
pub fn display_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
