use httpmock::prelude::*;
use rust_decimal::Decimal;
use storefront::core::session::{Command, Outcome};
use storefront::{BrowseQuery, HttpCatalog, Session, SortOrder, StoreSettings, Storefront};

fn catalog_body() -> serde_json::Value {
    serde_json::json!({
        "products": [
            {"id": 1, "title": "Essence Mascara Lash Princess", "price": 9.99,
             "category": "beauty", "rating": 2.56, "stock": 99, "discountPercentage": 10},
            {"id": 2, "title": "Eyeshadow Palette with Mirror", "price": 19.99,
             "category": "beauty", "rating": 2.86, "stock": 34},
            {"id": 6, "title": "Calvin Klein CK One", "price": 49.99,
             "category": "fragrances", "rating": 4.85, "stock": 29},
            {"id": 11, "title": "Annibale Colombo Bed", "price": 1899.99,
             "category": "furniture", "rating": 4.14, "stock": 0}
        ],
        "total": 194,
        "skip": 0,
        "limit": 4
    })
}

fn store_for(server: &MockServer) -> Storefront<HttpCatalog> {
    let settings = StoreSettings {
        api_base_url: server.base_url(),
        product_limit: 4,
        ..StoreSettings::default()
    };
    let catalog = HttpCatalog::new(&settings).unwrap();
    Storefront::new(catalog, settings.product_limit, settings.categories_limit)
}

#[tokio::test]
async fn test_browse_against_mock_api() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "4");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body());
    });

    let store = store_for(&server);
    let result = store
        .browse(&BrowseQuery {
            search: Some("e".to_string()),
            category: Some("beauty".to_string()),
            sort: Some(SortOrder::PriceHigh),
        })
        .await;

    api_mock.assert();
    let ids: Vec<u64> = result.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(result.summary(), "Showing 2 of 4 products");
}

#[tokio::test]
async fn test_categories_request_whole_catalog() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "0");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body());
    });

    let categories = store_for(&server).categories().await;

    api_mock.assert();
    assert_eq!(categories, vec!["beauty", "fragrances", "furniture"]);
}

#[tokio::test]
async fn test_api_failure_falls_back_to_empty_listing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(500);
    });

    let result = store_for(&server).browse(&BrowseQuery::default()).await;

    api_mock.assert();
    assert!(result.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.summary(), "No products found");
}

#[tokio::test]
async fn test_malformed_payload_falls_back_to_empty_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("not json");
    });

    assert!(store_for(&server).load_products().await.is_empty());
}

#[tokio::test]
async fn test_shopping_session_against_mock_api() {
    let server = MockServer::start();
    let mascara = server.mock(|when, then| {
        when.method(GET).path("/products/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body()["products"][0].clone());
    });
    let bed = server.mock(|when, then| {
        when.method(GET).path("/products/11");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalog_body()["products"][3].clone());
    });

    let mut session = Session::new(store_for(&server));

    session.execute(Command::Add { id: 1, quantity: 1 }).await;
    session.execute(Command::Add { id: 1, quantity: 2 }).await;
    let refused = session.execute(Command::Add { id: 11, quantity: 1 }).await;

    assert_eq!(mascara.hits(), 2);
    bed.assert();
    assert_eq!(
        refused,
        Outcome::Continue("Annibale Colombo Bed is out of stock".to_string())
    );

    let cart = session.cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.total_items(), 3);
    // 3 × 9.99 less 10%
    assert_eq!(cart.total_price(), Decimal::new(26973, 3));

    session.execute(Command::Quantity { id: 1, quantity: 0 }).await;
    assert!(session.cart().is_empty());
    assert_eq!(session.cart().total_price(), Decimal::ZERO);
}
