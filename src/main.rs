use clap::Parser;
use storefront::config::cli::Command;
use storefront::domain::model::{display_price, Product};
use storefront::utils::error::StoreError;
use storefront::utils::{logger, validation::Validate};
use storefront::{CliConfig, HttpCatalog, Session, Storefront};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            exit_with(&e);
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting storefront");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let catalog = match HttpCatalog::new(&settings) {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };
    let store = Storefront::new(catalog, settings.product_limit, settings.categories_limit);

    match &cli.command {
        Command::List { .. } => {
            let query = cli.command.browse_query().unwrap_or_default();
            let result = store.browse(&query).await;
            for product in &result.products {
                println!("{}", product_row(product));
            }
            println!("{}", result.summary());
        }
        Command::Categories => {
            let categories = store.categories().await;
            if categories.is_empty() {
                println!("No categories found");
            }
            for category in categories {
                println!("{}", category);
            }
        }
        Command::Show { id } => match store.product_details(*id).await {
            Some(product) => print!("{}", product_details(&product)),
            None => {
                println!("Product not found");
                std::process::exit(1);
            }
        },
        Command::Shop => {
            println!("{}", storefront::core::session::HELP);
            let mut session = Session::new(store);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            if let Err(e) = session.run(stdin, tokio::io::stdout()).await {
                exit_with(&e);
            }
        }
    }

    Ok(())
}

fn product_row(product: &Product) -> String {
    let mut row = format!(
        "#{:<4} {:<40} {:>10}",
        product.id,
        product.title_or_default(),
        display_price(product.price.unwrap_or_default())
    );
    if let Some(discount) = product.discount_badge() {
        row.push_str(&format!(" -{}%", discount));
    }
    if let Some(rating) = product.rating {
        row.push_str(&format!("  ★ {}", rating.round_dp(2)));
    }
    row.push_str(&format!("  {}", product.availability()));
    row
}

fn product_details(product: &Product) -> String {
    let mut out = format!("{}\n", product.title_or_default());
    if let Some(brand) = &product.brand {
        out.push_str(&format!("{}\n", brand));
    }
    out.push_str(&format!(
        "{}  {}\n",
        display_price(product.price.unwrap_or_default()),
        product.availability()
    ));
    if let Some(rating) = product.rating {
        out.push_str(&format!("Rating: {}\n", rating.round_dp(2)));
    }
    if let Some(description) = &product.description {
        out.push_str(&format!("\n{}\n\n", description));
    }
    out.push_str(&format!(
        "Category: {}\nStock: {} units\n",
        product.category.as_deref().unwrap_or("-"),
        product.stock.unwrap_or(0)
    ));
    for image in product.images.iter().take(5) {
        out.push_str(&format!("Image: {}\n", image));
    }
    out
}

fn exit_with(e: &StoreError) -> ! {
    tracing::error!(
        "{} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
