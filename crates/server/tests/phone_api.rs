use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::Service;

async fn build_app() -> anyhow::Result<Router> {
    let cfg = configs::AppConfig {
        database: models::db::in_memory_config(),
        ..Default::default()
    };
    server::startup::build_app(&cfg).await
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Vec<u8>)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok((status, bytes.to_vec()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let (status, bytes) = send_raw(app, method, uri, body).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

fn iphone_14() -> Value {
    json!({"brand": "Apple", "model": "iPhone 14", "price": 999.99})
}

#[tokio::test]
async fn create_then_get_returns_assigned_identity() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/api/phones", Some(iphone_14())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"statusCode": 200, "data": {"id": 1, "brand": "Apple", "model": "iPhone 14", "price": 999.99}})
    );

    let (status, body) = send(&app, "GET", "/api/phones/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["model"], "iPhone 14");
    Ok(())
}

#[tokio::test]
async fn list_returns_every_phone() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "GET", "/api/phones", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"statusCode": 200, "data": []}));

    send(&app, "POST", "/api/phones", Some(iphone_14())).await?;
    send(&app, "POST", "/api/phones", Some(json!({"brand": "Samsung", "model": "Galaxy S23", "price": 899.99}))).await?;

    let (_, body) = send(&app, "GET", "/api/phones", None).await?;
    let data = body["data"].as_array().expect("array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["brand"], "Samsung");
    Ok(())
}

#[tokio::test]
async fn get_unknown_phone_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/api/phones/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["statusCode"], 404);
    assert!(body["data"].as_str().unwrap().ends_with("id = 999"));
    Ok(())
}

#[tokio::test]
async fn identity_beyond_32_bits_is_not_found() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "GET", "/api/phones/3000000000", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["data"].as_str().unwrap().ends_with("id = 3000000000"));

    let (status, _) = send(&app, "DELETE", "/api/phones/3000000000", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn null_price_reads_as_zero() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, "POST", "/api/phones", Some(json!({"brand": "Nokia", "model": "3310", "price": null}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price"], 0.0);
    Ok(())
}

#[tokio::test]
async fn create_reports_first_violation() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "POST", "/api/phones", Some(json!({"brand": "Apple", "model": "", "price": -999.99}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"statusCode": 400, "data": "incorrect value for 'model'"}));

    let (status, body) = send(&app, "POST", "/api/phones", Some(json!({"id": 3, "brand": "Apple", "model": "iPhone 14", "price": 1.0}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], "undefined property 'id'");

    let (status, body) = send(&app, "POST", "/api/phones", Some(Value::Null)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], "candidate cannot be null");

    let (_, body) = send(&app, "GET", "/api/phones", None).await?;
    assert_eq!(body["data"], json!([]));
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_identity() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/api/phones", Some(json!({"brand": "Apple", "model": "iPhone 12", "price": 899.99}))).await?;

    let (status, body) = send(&app, "PUT", "/api/phones/1", Some(iphone_14())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"statusCode": 200, "data": {"id": 1, "brand": "Apple", "model": "iPhone 14", "price": 999.99}})
    );

    // a body carrying its own id is rejected even when it matches the path
    let (status, body) = send(&app, "PUT", "/api/phones/1", Some(json!({"id": 1, "brand": "Apple", "model": "iPhone 15", "price": 1.0}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], "undefined property 'id'");

    let (status, _) = send(&app, "PUT", "/api/phones/2", Some(iphone_14())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/api/phones/1", None).await?;
    assert_eq!(body["data"]["model"], "iPhone 14");
    Ok(())
}

#[tokio::test]
async fn delete_confirms_then_reports_missing() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, "POST", "/api/phones", Some(iphone_14())).await?;

    let (status, body) = send(&app, "DELETE", "/api/phones/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"statusCode": 200, "data": "Phone with id = 1 was successfully deleted"}));

    let (status, body) = send(&app, "DELETE", "/api/phones/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["data"].as_str().unwrap().ends_with("id = 1"));
    Ok(())
}

#[tokio::test]
async fn malformed_requests_use_the_envelope() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "GET", "/api/phones/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);

    let (status, body) = send(&app, "POST", "/api/phones", Some(json!({"brand": 5}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["statusCode"], 400);
    Ok(())
}

#[tokio::test]
async fn health_metrics_and_docs() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    send(&app, "GET", "/api/phones/5", None).await?;
    let (status, text) = send_raw(&app, "GET", "/metrics", None).await?;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(text)?;
    assert!(text.contains("phone_service_operations_total"));
    assert!(text.contains("no_such_phone"));

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/phones/{id}"].is_object());
    Ok(())
}
