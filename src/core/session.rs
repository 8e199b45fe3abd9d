//! Line-oriented shopping session: the cart page and product page actions as text commands.

use crate::core::cart::{line_total, Cart};
use crate::core::storefront::Storefront;
use crate::domain::model::display_price;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{Result, StoreError};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Commands:
  add <id> [qty]   add a product to the cart
  remove <id>      remove a product from the cart
  qty <id> <n>     set a quantity (0 removes the line)
  clear            empty the cart
  cart             show the cart
  total            show item count and total price
  help             show this help
  quit             leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { id: u64, quantity: u32 },
    Remove { id: u64 },
    Quantity { id: u64, quantity: i64 },
    Clear,
    Cart,
    Total,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = StoreError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(StoreError::invalid_command("empty command"));
        };
        let args: Vec<&str> = parts.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("add", [id]) => Command::Add {
                id: parse_arg("id", id)?,
                quantity: 1,
            },
            ("add", [id, quantity]) => Command::Add {
                id: parse_arg("id", id)?,
                quantity: parse_arg("quantity", quantity)?,
            },
            ("remove", [id]) => Command::Remove {
                id: parse_arg("id", id)?,
            },
            ("qty", [id, quantity]) => Command::Quantity {
                id: parse_arg("id", id)?,
                quantity: parse_arg("quantity", quantity)?,
            },
            ("clear", []) => Command::Clear,
            ("cart", []) => Command::Cart,
            ("total", []) => Command::Total,
            ("help", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => {
                return Err(StoreError::invalid_command(format!(
                    "'{}' with {} argument(s)",
                    other,
                    args.len()
                )))
            }
        };
        Ok(command)
    }
}

fn parse_arg<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| StoreError::invalid_command(format!("{} must be a number, got '{}'", name, raw)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Session<S: CatalogSource> {
    store: Storefront<S>,
}

impl<S: CatalogSource> Session<S> {
    pub fn new(store: Storefront<S>) -> Self {
        Self { store }
    }

    pub fn cart(&self) -> &Cart {
        self.store.cart()
    }

    pub async fn execute(&mut self, command: Command) -> Outcome {
        let message = match command {
            Command::Add { id, quantity } => match self.store.product_details(id).await {
                None => format!("Product {} not found", id),
                Some(product) if !product.availability().can_add_to_cart() => {
                    format!("{} is out of stock", product.title_or_default())
                }
                Some(product) => {
                    self.store.cart_mut().add_many(&product, quantity);
                    format!(
                        "Added {} x {} ({} in cart)",
                        quantity.max(1),
                        product.title_or_default(),
                        self.store.cart().total_items()
                    )
                }
            },
            Command::Remove { id } => {
                self.store.cart_mut().remove_from_cart(id);
                render_summary(self.store.cart())
            }
            Command::Quantity { id, quantity } => {
                if self.store.cart().line(id).is_none() {
                    format!("Product {} is not in the cart", id)
                } else {
                    self.store.cart_mut().update_quantity(id, quantity);
                    render_summary(self.store.cart())
                }
            }
            Command::Clear => {
                self.store.cart_mut().clear_cart();
                "Cart cleared".to_string()
            }
            Command::Cart => render_cart(self.store.cart()),
            Command::Total => render_summary(self.store.cart()),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(message)
    }

    /// Reads commands until `quit` or end of input. Bad commands are reported and skipped.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let reply = match line.parse::<Command>() {
                Ok(command) => match self.execute(command).await {
                    Outcome::Continue(message) => message,
                    Outcome::Quit => break,
                },
                Err(e) => {
                    tracing::debug!("Rejected command '{}': {}", line, e);
                    format!("{}\n{}", e, e.recovery_suggestion())
                }
            };

            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        tracing::info!(
            items = self.store.cart().total_items(),
            "Shopping session ended"
        );
        Ok(())
    }
}

pub fn render_summary(cart: &Cart) -> String {
    let mut out = format!(
        "Items: {}  Total: {}",
        cart.total_items(),
        display_price(cart.total_price())
    );
    let savings = cart.savings();
    if !savings.is_zero() {
        out.push_str(&format!("  (you save {})", display_price(savings)));
    }
    out
}

pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty".to_string();
    }

    let mut out = String::new();
    for line in cart.lines() {
        out.push_str(&format!(
            "  #{:<4} {:<40} x{:<3} {}\n",
            line.product.id,
            line.product.title,
            line.quantity,
            display_price(line_total(line))
        ));
    }
    out.push_str(&render_summary(cart));
    out
}
