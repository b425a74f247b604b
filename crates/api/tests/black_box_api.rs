use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = orderdesk_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_product(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
    price: f64,
    stock: i64,
) -> u64 {
    let res = client
        .post(format!("{}/api/products", base_url))
        .json(&json!({"name": name, "price": price, "stock": stock}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_u64()
        .unwrap()
}

async fn create_order(client: &reqwest::Client, base_url: &str, customer: &str) -> u64 {
    let res = client
        .post(format!("{}/api/orders", base_url))
        .json(&json!({"customer_name": customer}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_u64()
        .unwrap()
}

async fn stock_of(client: &reqwest::Client, base_url: &str, product_id: u64) -> i64 {
    let res = client
        .get(format!("{}/api/products/{}", base_url, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json::<serde_json::Value>().await.unwrap()["stock"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn order_item_lifecycle_keeps_stock_consistent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Laptop", 1200.0, 10).await;
    let order_id = create_order(&client, &srv.base_url, "Ada Lovelace").await;

    // Reserve 7 of 10.
    let res = client
        .post(format!("{}/api/order-items", srv.base_url))
        .json(&json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 7,
            "unit_price": 1200.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let item = res.json::<serde_json::Value>().await.unwrap();
    let item_id = item["id"].as_u64().unwrap();
    assert_eq!(item["quantity"].as_i64().unwrap(), 7);
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 3);

    // A second reservation of 5 cannot be covered by the remaining 3.
    let res = client
        .post(format!("{}/api/order-items", srv.base_url))
        .json(&json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 5,
            "unit_price": 1200.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 3);

    // Shrinking the first item to 2 returns five units.
    let res = client
        .put(format!("{}/api/order-items/{}", srv.base_url, item_id))
        .json(&json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 2,
            "unit_price": 1200.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 8);

    // Deleting the item restores the rest.
    let res = client
        .delete(format!("{}/api/order-items/{}", srv.base_url, item_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 10);

    // A second delete finds nothing.
    let res = client
        .delete(format!("{}/api/order-items/{}", srv.base_url, item_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_uses_the_pagination_envelope() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for i in 0..3 {
        create_product(&client, &srv.base_url, &format!("p{}", i), 1.0, 0).await;
    }

    let res = client
        .get(format!("{}/api/products?page=0&size=2", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["content"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalElements"].as_u64().unwrap(), 3);
    assert_eq!(body["totalPages"].as_u64().unwrap(), 2);
    assert_eq!(body["number"].as_u64().unwrap(), 0);

    let res = client
        .get(format!("{}/api/products?page=0&size=0", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_ids_and_bad_input_map_to_400_and_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products/999", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/api/products/not-a-number", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .post(format!("{}/api/products", srv.base_url))
        .json(&json!({"name": "   ", "price": 1.0, "stock": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .post(format!("{}/api/order-items", srv.base_url))
        .json(&json!({
            "order_id": 1, "product_id": 1, "quantity": 0, "unit_price": 1.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn product_delete_is_blocked_while_an_item_references_it() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Laptop", 1200.0, 10).await;
    let order_id = create_order(&client, &srv.base_url, "Ada").await;

    let res = client
        .post(format!("{}/api/order-items", srv.base_url))
        .json(&json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 1,
            "unit_price": 1200.0
        }))
        .send()
        .await
        .unwrap();
    let item_id = res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_u64()
        .unwrap();

    let res = client
        .delete(format!("{}/api/products/{}", srv.base_url, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["error"], "conflict");

    let res = client
        .delete(format!("{}/api/order-items/{}", srv.base_url, item_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .delete(format!("{}/api/products/{}", srv.base_url, product_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_an_order_cascades_its_items_without_restoring_stock() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Laptop", 1200.0, 10).await;
    let order_id = create_order(&client, &srv.base_url, "Ada").await;

    let res = client
        .post(format!("{}/api/order-items", srv.base_url))
        .json(&json!({
            "order_id": order_id,
            "product_id": product_id,
            "quantity": 7,
            "unit_price": 1200.0
        }))
        .send()
        .await
        .unwrap();
    let item_id = res.json::<serde_json::Value>().await.unwrap()["id"]
        .as_u64()
        .unwrap();

    let res = client
        .delete(format!("{}/api/orders/{}", srv.base_url, order_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = client
        .get(format!("{}/api/order-items/{}", srv.base_url, item_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // The cascade path keeps the reservation deducted.
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 3);
}

#[tokio::test]
async fn adjust_stock_endpoint_enforces_the_ledger_rules() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let product_id = create_product(&client, &srv.base_url, "Laptop", 1200.0, 10).await;

    let res = client
        .post(format!(
            "{}/api/products/{}/adjust-stock",
            srv.base_url, product_id
        ))
        .json(&json!({"delta": -3}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["stock"].as_i64().unwrap(), 7);

    let res = client
        .post(format!(
            "{}/api/products/{}/adjust-stock",
            srv.base_url, product_id
        ))
        .json(&json!({"delta": -100}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stock_of(&client, &srv.base_url, product_id).await, 7);
}

#[tokio::test]
async fn order_status_round_trips_through_updates() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let order_id = create_order(&client, &srv.base_url, "Ada").await;

    let res = client
        .get(format!("{}/api/orders/{}", srv.base_url, order_id))
        .send()
        .await
        .unwrap();
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "PENDING");

    let res = client
        .put(format!("{}/api/orders/{}", srv.base_url, order_id))
        .json(&json!({"customer_name": "Ada", "status": "SHIPPED"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["status"], "SHIPPED");

    let res = client
        .put(format!("{}/api/orders/{}", srv.base_url, order_id))
        .json(&json!({"customer_name": "Ada", "status": "RETURNED"}))
        .send()
        .await
        .unwrap();
    // Unknown status values never reach the domain: the closed enum rejects
    // them at deserialization.
    assert!(res.status().is_client_error());
}
