//! Catalog client against a loopback HTTP server.

use std::sync::Arc;
use std::time::Duration;

use storefront_catalog::prelude::*;
use storefront_commerce::catalog::Category;
use storefront_commerce::ProductId;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PRODUCTS: &str = r#"[
    {"id":1,"title":"Fjallraven Backpack","price":109.95,"description":"Everyday pack","category":"men's clothing","image":"https://fakestoreapi.com/img/1.jpg","rating":{"rate":3.9,"count":120}},
    {"id":5,"title":"John Hardy Bracelet","price":695,"description":"Dragon chain","category":"jewelery","image":"https://fakestoreapi.com/img/5.jpg","rating":{"rate":4.6,"count":400}}
]"#;

const JEWELERY: &str = r#"[
    {"id":5,"title":"John Hardy Bracelet","price":695,"description":"Dragon chain","category":"jewelery","image":"https://fakestoreapi.com/img/5.jpg","rating":{"rate":4.6,"count":400}}
]"#;

type Route = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Serve `route` on an ephemeral port; returns the base URL.
async fn serve(route: Route) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let route = Arc::clone(&route);
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut len = 0;
                while !buf[..len].windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf[len..]).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => len += n,
                    }
                }
                let request = String::from_utf8_lossy(&buf[..len]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status, body) = route(&path);
                let response = format!(
                    "HTTP/1.1 {} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

fn fake_store() -> Route {
    Arc::new(|path: &str| match path {
        "/products" => (200, PRODUCTS.to_string()),
        "/products/categories" => (200, r#"["jewelery","men's clothing"]"#.to_string()),
        "/products/category/jewelery" => (200, JEWELERY.to_string()),
        "/products/category/men's%20clothing" | "/products/category/men%27s%20clothing" => {
            (200, "[]".to_string())
        }
        "/products/1" => (
            200,
            r#"{"id":1,"title":"Fjallraven Backpack","price":109.95,"category":"men's clothing"}"#
                .to_string(),
        ),
        "/products/99" => (200, String::new()),
        "/products/98" => (200, "null".to_string()),
        _ => (404, "{}".to_string()),
    })
}

fn client(base_url: String) -> CatalogClient {
    CatalogClient::new(CatalogConfig::default().with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_products_and_categories() {
    let client = client(serve(fake_store()).await);

    let products = client.products().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].price.amount_cents, 10995);
    assert_eq!(products[1].price.amount_cents, 69500);
    assert_eq!(products[1].rating.map(|r| r.count), Some(400));

    let categories = client.categories().await.unwrap();
    assert_eq!(categories, vec![Category::new("jewelery"), Category::new("men's clothing")]);
}

#[tokio::test]
async fn test_single_product() {
    let client = client(serve(fake_store()).await);

    let product = client.product(ProductId::new(1)).await.unwrap();
    assert_eq!(product.title, "Fjallraven Backpack");
    assert!(product.rating.is_none());
    assert!(product.description.is_empty());
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let client = client(serve(fake_store()).await);

    for id in [99, 98, 404] {
        let err = client.product(ProductId::new(id)).await.unwrap_err();
        assert!(err.is_not_found(), "id {}: {:?}", id, err);
    }
    assert_eq!(find_product(&client, ProductId::new(99)).await.unwrap(), None);
}

#[tokio::test]
async fn test_products_in_category_encodes_segment() {
    let client = client(serve(fake_store()).await);

    let jewelery = client
        .products_in_category(&Category::new("jewelery"))
        .await
        .unwrap();
    assert_eq!(jewelery.len(), 1);

    let mens = client
        .products_in_category(&Category::new("men's clothing"))
        .await
        .unwrap();
    assert!(mens.is_empty());
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let client = client(serve(Arc::new(|_: &str| (503, "unavailable".to_string()))).await);

    let err = client.products().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert!(!err.is_not_found());

    let snapshot = load_catalog(&client).await;
    assert!(snapshot.is_degraded());
    assert!(snapshot.products.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let client = client(serve(Arc::new(|_: &str| (200, "<html>".to_string()))).await);

    let err = client.products().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "{:?}", err);
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        // Accept and hold the connection open without answering.
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let client = CatalogClient::new(
        CatalogConfig::default()
            .with_base_url(format!("http://{}", addr))
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    let err = client.products().await.unwrap_err();
    assert!(err.is_timeout(), "{:?}", err);
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let err = client(format!("http://{}", addr))
        .categories()
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Connection(_)), "{:?}", err);
}
