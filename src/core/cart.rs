//! In-memory shopping cart.
//!
//! Lines are kept in insertion order and a product id appears at most once;
//! adding a product that is already present bumps its quantity instead.

use crate::domain::model::{CartLine, Product, ProductSnapshot};
use rust_decimal::Decimal;

const BADGE_CAP: u64 = 99;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.add_units(product, 1);
    }

    /// Adds `quantity` units (at least one), as the product page's quantity selector does.
    /// Same result as calling `add_to_cart` that many times.
    pub fn add_many(&mut self, product: &Product, quantity: u32) {
        self.add_units(product, quantity.max(1));
    }

    fn add_units(&mut self, product: &Product, units: u32) {
        match self.position(product.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(units);
                tracing::debug!(id = product.id, quantity = line.quantity, "Incremented cart line");
            }
            None => {
                self.lines.push(CartLine {
                    product: ProductSnapshot::from(product),
                    quantity: units,
                });
                tracing::debug!(id = product.id, quantity = units, "Added cart line");
            }
        }
    }

    pub fn remove_from_cart(&mut self, product_id: u64) {
        if let Some(idx) = self.position(product_id) {
            self.lines.remove(idx);
            tracing::debug!(id = product_id, "Removed cart line");
        }
    }

    /// Sets the quantity of an existing line. Zero or negative removes it.
    pub fn update_quantity(&mut self, product_id: u64, quantity: i64) {
        let Some(idx) = self.position(product_id) else {
            return;
        };

        if quantity <= 0 {
            self.lines.remove(idx);
            tracing::debug!(id = product_id, "Removed cart line via quantity update");
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.lines[idx].quantity = quantity;
            tracing::debug!(id = product_id, quantity, "Updated cart line quantity");
        }
    }

    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `price × quantity` with each line's discount percentage applied.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Sum of `price × quantity` before discounts.
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(line_subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn savings(&self) -> Decimal {
        self.subtotal().saturating_sub(self.total_price())
    }

    /// Text for the navigation badge; `None` hides it.
    pub fn badge_label(&self) -> Option<String> {
        match self.total_items() {
            0 => None,
            n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
            n => Some(n.to_string()),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: u64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: u64) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product.id == product_id)
    }
}

fn line_subtotal(line: &CartLine) -> Decimal {
    line.product
        .price
        .saturating_mul(Decimal::from(line.quantity))
}

pub fn line_total(line: &CartLine) -> Decimal {
    let discount = line
        .product
        .discount_percentage
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let factor = Decimal::ONE - discount / Decimal::ONE_HUNDRED;
    line_subtotal(line).saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: Decimal) -> Product {
        Product::new(id, &format!("Product {}", id), price)
    }

    #[test]
    fn test_adding_same_product_twice_merges_lines() {
        let mut cart = Cart::new();
        let p = product(1, Decimal::new(999, 2));

        cart.add_to_cart(&p);
        cart.add_to_cart(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(3, Decimal::ONE));
        cart.add_to_cart(&product(1, Decimal::ONE));
        cart.add_to_cart(&product(3, Decimal::ONE));
        cart.add_to_cart(&product(2, Decimal::ONE));

        let ids: Vec<u64> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, Decimal::ONE));
        cart.add_to_cart(&product(2, Decimal::ONE));

        cart.update_quantity(1, 0);
        assert!(cart.line(1).is_none());

        cart.update_quantity(2, -4);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value_and_ignores_unknown_ids() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, Decimal::new(250, 2)));

        cart.update_quantity(1, 5);
        cart.update_quantity(42, 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 5);
        assert_eq!(cart.total_price(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_remove_from_cart_is_noop_for_missing_id() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, Decimal::ONE));

        cart.remove_from_cart(7);
        assert_eq!(cart.len(), 1);

        cart.remove_from_cart(1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_cart_zeroes_totals() {
        let mut cart = Cart::new();
        cart.add_many(&product(1, Decimal::new(1999, 2)), 3);
        cart.add_to_cart(&product(2, Decimal::new(500, 2)));

        cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
        assert_eq!(cart.badge_label(), None);
    }

    #[test]
    fn test_total_price_applies_discount() {
        let mut cart = Cart::new();
        let mut discounted = product(1, Decimal::new(10000, 2));
        discounted.discount_percentage = Some(Decimal::new(25, 0));
        cart.add_many(&discounted, 2);
        cart.add_to_cart(&product(2, Decimal::new(1000, 2)));

        assert_eq!(cart.subtotal(), Decimal::new(21000, 2));
        assert_eq!(cart.total_price(), Decimal::new(16000, 2));
        assert_eq!(cart.savings(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_missing_price_and_stock_default_to_zero() {
        let mut cart = Cart::new();
        let mut p = product(9, Decimal::ONE);
        p.price = None;
        p.title = None;

        cart.add_to_cart(&p);

        let line = cart.line(9).unwrap();
        assert_eq!(line.product.price, Decimal::ZERO);
        assert_eq!(line.product.stock, 0);
        assert_eq!(line.product.title, "Untitled product");
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_add_many_adds_at_least_one() {
        let mut cart = Cart::new();
        cart.add_many(&product(1, Decimal::ONE), 0);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_badge_label_caps_at_ninety_nine() {
        let mut cart = Cart::new();
        let p = product(1, Decimal::ONE);

        cart.add_many(&p, 99);
        assert_eq!(cart.badge_label().as_deref(), Some("99"));

        cart.add_to_cart(&p);
        assert_eq!(cart.badge_label().as_deref(), Some("99+"));
    }

    #[test]
    fn test_discount_is_clamped_to_percentage_range() {
        let mut cart = Cart::new();
        let mut over = product(1, Decimal::new(1000, 2));
        over.discount_percentage = Some(Decimal::new(150, 0));
        let mut negative = product(2, Decimal::new(1000, 2));
        negative.discount_percentage = Some(Decimal::new(-20, 0));

        cart.add_to_cart(&over);
        cart.add_to_cart(&negative);

        assert_eq!(line_total(cart.line(1).unwrap()), Decimal::ZERO);
        assert_eq!(line_total(cart.line(2).unwrap()), Decimal::new(1000, 2));
        assert_eq!(cart.total_price(), Decimal::new(1000, 2));
        assert_eq!(cart.savings(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_huge_quantities_do_not_overflow_totals() {
        let mut cart = Cart::new();
        let pricey = product(1, Decimal::new(1_000_000_000_000_000_000, 0));
        cart.add_to_cart(&pricey);
        cart.update_quantity(1, i64::MAX);

        assert_eq!(cart.line(1).unwrap().quantity, u32::MAX);
        assert_eq!(
            cart.total_price(),
            Decimal::new(1_000_000_000_000_000_000, 0) * Decimal::from(u32::MAX)
        );

        let extreme = product(2, Decimal::MAX / Decimal::TWO);
        cart.add_many(&extreme, 3);

        assert_eq!(cart.total_price(), Decimal::MAX);
        assert_eq!(cart.subtotal(), Decimal::MAX);
        assert_eq!(cart.savings(), Decimal::ZERO);
    }

    #[test]
    fn test_add_many_saturates_in_one_step() {
        let mut cart = Cart::new();
        let p = product(1, Decimal::ONE);

        cart.add_many(&p, u32::MAX);
        cart.add_many(&p, 5);
        cart.add_to_cart(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, u32::MAX);
    }
}
