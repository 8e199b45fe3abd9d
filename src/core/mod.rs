pub mod browse;
pub mod cart;
pub mod catalog;
pub mod session;
pub mod storefront;

pub use crate::domain::model::{CartLine, Product, ProductPage, ProductSnapshot};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
