use crate::domain::model::Product;
use crate::utils::error::StoreError;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortOrder {
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(SortOrder::PriceLow),
            "price-high" => Ok(SortOrder::PriceHigh),
            "rating" => Ok(SortOrder::Rating),
            "name" => Ok(SortOrder::Name),
            other => Err(StoreError::invalid_command(format!(
                "unknown sort '{}', expected price-low, price-high, rating or name",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone)]
pub struct BrowseResult {
    pub products: Vec<Product>,
    /// Size of the list before filtering.
    pub total: usize,
}

impl BrowseResult {
    pub fn shown(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.is_empty() {
            "No products found".to_string()
        } else {
            format!("Showing {} of {} products", self.shown(), self.total)
        }
    }
}

pub fn browse(products: &[Product], query: &BrowseQuery) -> BrowseResult {
    let search = query
        .search
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .unwrap_or_default();

    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| matches_search(p, &search))
        .filter(|p| match query.category.as_deref() {
            Some(category) => matches_category(p, category),
            None => true,
        })
        .cloned()
        .collect();

    if let Some(order) = query.sort {
        sort_products(&mut filtered, order);
    }

    tracing::debug!(
        search = %search,
        category = ?query.category,
        sort = ?query.sort,
        shown = filtered.len(),
        total = products.len(),
        "Browsed catalog"
    );

    BrowseResult {
        products: filtered,
        total: products.len(),
    }
}

/// `query` is expected lowercased and trimmed. Zero prices and ratings are not searched.
pub fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let text_hit = [&product.title, &product.description, &product.category]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(query));

    text_hit
        || number_contains(product.price, query)
        || number_contains(product.rating, query)
}

fn number_contains(value: Option<Decimal>, query: &str) -> bool {
    value
        .filter(|v| !v.is_zero())
        .map(|v| v.normalize().to_string().contains(query))
        .unwrap_or(false)
}

pub fn matches_category(product: &Product, category: &str) -> bool {
    product
        .category
        .as_deref()
        .map(|c| c.eq_ignore_ascii_case(category.trim()))
        .unwrap_or(false)
}

/// Stable sort; ties keep catalog order.
pub fn sort_products(products: &mut [Product], order: SortOrder) {
    let price = |p: &Product| p.price.unwrap_or_default();
    let rating = |p: &Product| p.rating.unwrap_or_default();

    match order {
        SortOrder::PriceLow => products.sort_by(|a, b| price(a).cmp(&price(b))),
        SortOrder::PriceHigh => products.sort_by(|a, b| price(b).cmp(&price(a))),
        SortOrder::Rating => products.sort_by(|a, b| rating(b).cmp(&rating(a))),
        SortOrder::Name => products.sort_by(compare_titles),
    }
}

fn compare_titles(a: &Product, b: &Product) -> Ordering {
    let a = a.title.as_deref().unwrap_or("");
    let b = b.title.as_deref().unwrap_or("");
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Unique, non-empty categories in the order they first appear.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter_map(|p| p.category.as_deref())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(*c))
        .map(str::to_string)
        .collect()
}
