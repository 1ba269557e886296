mod common;

use common::{app, delete, get, post};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn created_product_is_listed_with_its_fields() {
    let app = app().await;

    let created = post(
        &app,
        "/products",
        json!({
            "name": "Mug",
            "price": "9.99",
            "image": "http://x/1.png",
            "description": "A mug"
        }),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert!(created.body["id"].is_i64());
    assert_eq!(created.body["name"], "Mug");
    assert_eq!(created.body["price"], "9.99");
    assert_eq!(created.body["image"], "http://x/1.png");
    assert_eq!(created.body["description"], "A mug");

    let listed = get(&app, "/products").await;
    assert_eq!(listed.status, StatusCode::OK);
    let products = listed.body.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0], created.body);
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let app = app().await;
    let listed = get(&app, "/products").await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn invalid_product_payloads_are_rejected() {
    let app = app().await;

    let missing = post(&app, "/products", json!({"name": "Mug"})).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["message"], "Invalid product payload.");
    assert!(missing.body["error"].is_string());

    let extra = post(
        &app,
        "/products",
        json!({
            "name": "Mug",
            "price": "9.99",
            "image": "",
            "description": "",
            "stock": 4
        }),
    )
    .await;
    assert_eq!(extra.status, StatusCode::BAD_REQUEST);

    let empty_name = post(
        &app,
        "/products",
        json!({"name": "", "price": "1", "image": "", "description": ""}),
    )
    .await;
    assert_eq!(empty_name.status, StatusCode::BAD_REQUEST);

    assert_eq!(get(&app, "/products").await.body, json!([]));
}

#[tokio::test]
async fn deleting_removes_exactly_that_product() {
    let app = app().await;
    let mut ids = Vec::new();
    for name in ["Mug", "Plate", "Bowl"] {
        let created = post(
            &app,
            "/products",
            json!({"name": name, "price": "1", "image": "", "description": ""}),
        )
        .await;
        ids.push(created.body["id"].as_i64().unwrap());
    }

    let deleted = delete(&app, &format!("/products/{}", ids[1])).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({"message": "Product deleted successfully."})
    );

    let remaining: Vec<i64> = get(&app, "/products")
        .await
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.contains(&ids[0]));
    assert!(remaining.contains(&ids[2]));
    assert!(!remaining.contains(&ids[1]));
}

#[tokio::test]
async fn deleting_an_unknown_id_is_not_found() {
    let app = app().await;
    post(
        &app,
        "/products",
        json!({"name": "Mug", "price": "1", "image": "", "description": ""}),
    )
    .await;

    let missing = delete(&app, "/products/42").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body, json!({"message": "Product not found."}));

    assert_eq!(get(&app, "/products").await.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn non_numeric_product_id_is_a_bad_request() {
    let app = app().await;
    let response = delete(&app, "/products/abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid product id.");
}
