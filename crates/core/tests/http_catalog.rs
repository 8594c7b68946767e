//! Integration tests for the HTTP catalog client against a local fake catalog.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use testresult::TestResult;
use tokio::{net::TcpListener, sync::Mutex};

use storefront::{
    catalog::{CatalogClient, CatalogConfig, CatalogError, ErrorKind},
    products::{ProductDraft, ProductId},
};

#[derive(Debug, Default)]
struct FakeCatalog {
    hits: AtomicUsize,
    queries: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

type Shared = State<Arc<FakeCatalog>>;

fn lamp_record(id: &str) -> Value {
    json!({
        "_id": id,
        "name": "Desk Lamp",
        "description": "Warm light",
        "price": 12.5,
        "category": "Home & Garden",
        "imageUrl": "https://example.com/lamp.png",
    })
}

async fn list(State(fake): Shared) -> Json<Value> {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    Json(json!({
        "message": "Products fetched",
        "products": [
            lamp_record("p2"),
            { "_id": "p1", "name": "Novel", "price": 8, "category": "Books" },
        ],
    }))
}

async fn search(State(fake): Shared, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    if let Some(query) = params.get("query") {
        fake.queries.lock().await.push(query.clone());
    }

    Json(json!({ "products": [lamp_record("p2")] }))
}

async fn one(State(fake): Shared, Path(id): Path<String>) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    match id.as_str() {
        "gone" => StatusCode::NOT_FOUND.into_response(),
        "missing" => Json(json!({ "product": null })).into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({ "product": lamp_record(&id) })).into_response(),
    }
}

async fn create(State(fake): Shared, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    fake.bodies.lock().await.push(body);

    (StatusCode::CREATED, Json(json!({ "message": "Product created" })))
}

fn products_api(fake: Arc<FakeCatalog>) -> Router {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/search", post(search))
        .route("/api/products/{id}", get(one))
        .with_state(fake)
}

async fn serve(router: Router) -> Result<String, std::io::Error> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(format!("http://{address}"))
}

fn client_for(base_url: &str) -> Result<CatalogClient, Box<dyn std::error::Error>> {
    Ok(CatalogClient::http(CatalogConfig::parse(base_url)?)?)
}

async fn fake_catalog() -> Result<(Arc<FakeCatalog>, CatalogClient), Box<dyn std::error::Error>> {
    let fake = Arc::new(FakeCatalog::default());
    let base_url = serve(products_api(Arc::clone(&fake))).await?;

    Ok((fake, client_for(&base_url)?))
}

#[tokio::test]
async fn list_maps_service_ids_and_keeps_order() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    let products = client.list_products().await?;

    let ids: Vec<&str> = products.iter().map(|product| product.id.as_str()).collect();
    let prices: Vec<Decimal> = products.iter().map(|product| product.price).collect();

    assert_eq!(ids, ["p2", "p1"]);
    assert_eq!(prices, [Decimal::new(125, 1), Decimal::from(8)]);
    assert!(products.iter().any(|product| product.description.is_empty()));
    assert_eq!(fake.hits.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn search_sends_query_verbatim() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    let products = client.search_products("tea & cake").await?;

    assert_eq!(products.len(), 1);
    assert_eq!(*fake.queries.lock().await, ["tea & cake"]);

    Ok(())
}

#[tokio::test]
async fn blank_search_never_reaches_the_service() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    assert!(client.search_products("   ").await?.is_empty());
    assert_eq!(fake.hits.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn get_returns_the_product() -> TestResult {
    let (_, client) = fake_catalog().await?;

    let product = client.get_product(&ProductId::new("p9")).await?;

    assert_eq!(product.id, ProductId::new("p9"));
    assert_eq!(product.name, "Desk Lamp");

    Ok(())
}

#[tokio::test]
async fn null_product_is_not_found() -> TestResult {
    let (_, client) = fake_catalog().await?;

    let error = client
        .get_product(&ProductId::new("missing"))
        .await
        .expect_err("null product should be an error");

    assert!(matches!(error, CatalogError::NotFound));

    Ok(())
}

#[tokio::test]
async fn status_404_is_not_found() -> TestResult {
    let (_, client) = fake_catalog().await?;

    let error = client
        .get_product(&ProductId::new("gone"))
        .await
        .expect_err("404 should be an error");

    assert_eq!(error.kind(), ErrorKind::NotFound);

    Ok(())
}

#[tokio::test]
async fn blank_product_id_sends_nothing() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    let error = client
        .get_product(&ProductId::new(""))
        .await
        .expect_err("blank id should be an error");

    assert!(matches!(error, CatalogError::MissingProductId));
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(fake.hits.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn server_error_is_transport_class() -> TestResult {
    let (_, client) = fake_catalog().await?;

    let error = client
        .get_product(&ProductId::new("broken"))
        .await
        .expect_err("500 should be an error");

    assert!(matches!(
        error,
        CatalogError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    ));
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(error.user_message(), "Request failed. Please try again.");

    Ok(())
}

#[tokio::test]
async fn suggestion_posts_camel_case_json() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    client
        .suggest_product(ProductDraft {
            name: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: Decimal::new(245, 1),
            category: "Home & Garden".to_string(),
            image_url: "https://example.com/lamp.png".to_string(),
        })
        .await?;

    assert_eq!(
        *fake.bodies.lock().await,
        [json!({
            "name": "Desk Lamp",
            "description": "Warm light",
            "price": 24.5,
            "category": "Home & Garden",
            "imageUrl": "https://example.com/lamp.png",
        })]
    );

    Ok(())
}

#[tokio::test]
async fn invalid_suggestion_sends_nothing() -> TestResult {
    let (fake, client) = fake_catalog().await?;

    let error = client
        .suggest_product(ProductDraft {
            name: "Desk Lamp".to_string(),
            ..ProductDraft::default()
        })
        .await
        .expect_err("incomplete draft should be rejected");

    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(fake.hits.load(Ordering::SeqCst), 0);

    Ok(())
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() -> TestResult {
    let fake = Arc::new(FakeCatalog::default());
    let base_url = serve(Router::new().nest("/shop", products_api(Arc::clone(&fake)))).await?;

    let client = client_for(&format!("{base_url}/shop/"))?;

    assert_eq!(client.list_products().await?.len(), 2);
    assert_eq!(fake.hits.load(Ordering::SeqCst), 1);

    Ok(())
}

#[tokio::test]
async fn refused_connection_is_transport_class() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    drop(listener);

    let client = client_for(&format!("http://{address}"))?;

    let error = client
        .list_products()
        .await
        .expect_err("refused connection should be an error");

    assert!(matches!(error, CatalogError::Http(_)));
    assert_eq!(error.kind(), ErrorKind::Transport);

    Ok(())
}
