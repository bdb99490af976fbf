//! WebServer lifecycle tests
//!
//! Artificial latency with the default profile, static asset serving and
//! startup failures.

mod helpers;

use axum::http::StatusCode;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

use fragment_server::WebServerError;
use fixtures::*;
use helpers::*;

#[tokio::test]
async fn test_convert_waits_for_conversion_latency() {
    let router = offline_server(slow_config()).build_router();

    let started = Instant::now();
    let response = send(&router, form_post("/convert", "fahrenheit=32")).await;

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert!(response.body.contains("32 degrees Fahrenheit is equal to 0 degrees Celsius"));
}

#[tokio::test]
async fn test_search_waits_for_search_latency() {
    let router = offline_server(slow_config()).build_router();

    let started = Instant::now();
    let response = send(&router, form_post("/search", "search=doe")).await;

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(response.body.matches("<tr>").count(), 2);
}

#[tokio::test]
async fn test_empty_search_is_immediate() {
    let router = offline_server(slow_config()).build_router();

    let started = Instant::now();
    let response = send(&router, form_post("/search", "search=")).await;

    assert!(started.elapsed() < Duration::from_millis(100));
    assert_eq!(response.body, "<tr></tr>");
}

#[tokio::test]
async fn test_slow_requests_do_not_block_others() {
    let router = offline_server(slow_config()).build_router();

    let slow = {
        let router = router.clone();
        tokio::spawn(async move { send(&router, form_post("/convert", "fahrenheit=50")).await })
    };

    // poll answers while the conversion is still sleeping
    tokio::time::sleep(Duration::from_millis(50)).await;
    let started = Instant::now();
    let poll = send(&router, get("/poll")).await;
    assert!(started.elapsed() < Duration::from_millis(500));
    assert_eq!(poll.status, StatusCode::OK);
    assert!(!slow.is_finished());

    let converted = slow.await.unwrap();
    assert!(converted.body.contains("50 degrees Fahrenheit is equal to 10 degrees Celsius"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html><body>demo</body></html>").unwrap();
    std::fs::write(dir.path().join("app.css"), "body { color: red; }").unwrap();
    let router = offline_server(config_with_static_dir(dir.path())).build_router();

    let index = send(&router, get("/")).await;
    assert_eq!(index.status, StatusCode::OK);
    assert!(index.body.contains("demo"));
    assert!(index.content_type.unwrap().starts_with("text/html"));

    let css = send(&router, get("/app.css")).await;
    assert_eq!(css.status, StatusCode::OK);
    assert!(css.content_type.unwrap().starts_with("text/css"));

    let missing = send(&router, get("/missing.js")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_run_fails_when_port_is_taken() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let mut config = instant_config();
    config.host = IpAddr::V4(Ipv4Addr::LOCALHOST);
    config.port = port;

    let result = offline_server(config).run().await;

    assert!(matches!(result, Err(WebServerError::ServerStartup(_))));
}
