use super::*;

/// Tests creating and reading back a product.
///
/// Expected: 200 with input fields echoed and `in_stock` defaulting to true
#[tokio::test]
async fn creates_and_fetches_product() {
    let (_test, app) = test_app().await;

    let created = post(
        &app,
        "/products",
        json!({ "name": "Solar Panel", "price": 249.5, "image": "panel.png" }),
    )
    .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["in_stock"], true);
    assert_eq!(created.body["image"], "panel.png");
    assert!(created.body["created_at"].is_string());

    let id = created.body["id"].as_i64().unwrap();
    let fetched = get(&app, &format!("/products/{}", id)).await;

    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

/// Tests a partial update through PATCH and PUT.
///
/// Expected: only the sent field changes
#[tokio::test]
async fn partial_update_changes_only_sent_fields() {
    let (test, app) = test_app().await;
    let history_db = test.history_db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(history_db)
        .name("Battery")
        .price(500.0)
        .build()
        .await
        .unwrap();
    let uri = format!("/products/{}", product.id);

    let patched = patch(&app, &uri, json!({ "price": 450.0 })).await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(patched.body["price"], 450.0);
    assert_eq!(patched.body["name"], "Battery");
    assert!(patched.body["updated_at"].is_string());

    let put_res = put(&app, &uri, json!({ "in_stock": false, "name": null })).await;
    assert_eq!(put_res.status, StatusCode::OK);
    assert_eq!(put_res.body["in_stock"], false);
    assert_eq!(put_res.body["name"], "Battery");
    assert_eq!(put_res.body["price"], 450.0);
}

/// Tests deleting a product and fetching it afterwards.
///
/// Expected: 200 with message, then 404
#[tokio::test]
async fn delete_then_get_is_not_found() {
    let (test, app) = test_app().await;
    let history_db = test.history_db.as_ref().unwrap();

    let product = factory::create_product(history_db).await.unwrap();
    let uri = format!("/products/{}", product.id);

    let deleted = delete(&app, &uri).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(
        deleted.body,
        json!({ "message": "Product deleted successfully" })
    );

    let fetched = get(&app, &uri).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);
    assert_eq!(fetched.body["error"], "Product not found");

    assert_eq!(delete(&app, &uri).await.status, StatusCode::NOT_FOUND);
}

/// Tests list windowing with skip and limit.
///
/// Expected: 200 with the requested slice
#[tokio::test]
async fn lists_with_skip_and_limit() {
    let (test, app) = test_app().await;
    let history_db = test.history_db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::create_product(history_db).await.unwrap().id);
    }

    let res = get(&app, "/products?skip=1&limit=2").await;

    assert_eq!(res.status, StatusCode::OK);
    let listed: Vec<i64> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, vec![ids[1] as i64, ids[2] as i64]);
}
