//! Tests for the RealUserDirectory service

use httpmock::prelude::*;

use super::fixtures::*;
use crate::error::WebServerError;
use crate::services::RealUserDirectory;
use crate::traits::UserDirectory;

#[tokio::test]
async fn test_fetch_users_with_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param("_limit", "3");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(directory_payload());
        })
        .await;

    let directory = RealUserDirectory::new(endpoint_for(&server.url("/users")));
    let users = directory.fetch_users(Some(3)).await.unwrap();

    mock.assert_async().await;
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell", "Clementine Bauch"]);
    assert_eq!(users[0].email, "Sincere@april.biz");
}

#[tokio::test]
async fn test_fetch_all_users_sends_no_limit() {
    let server = MockServer::start_async().await;
    let limited = server
        .mock_async(|when, then| {
            when.method(GET).path("/users").query_param_exists("_limit");
            then.status(500);
        })
        .await;
    let full = server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).json_body(directory_payload());
        })
        .await;

    let directory = RealUserDirectory::new(endpoint_for(&server.url("/users")));
    let users = directory.fetch_users(None).await.unwrap();

    assert_eq!(users.len(), 3);
    full.assert_async().await;
    assert_eq!(limited.hits_async().await, 0);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(503).body("maintenance");
        })
        .await;

    let directory = RealUserDirectory::new(endpoint_for(&server.url("/users")));
    let result = directory.fetch_users(Some(10)).await;

    assert!(matches!(result, Err(WebServerError::DirectoryStatus { status: 503 })));
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/users");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let directory = RealUserDirectory::new(endpoint_for(&server.url("/users")));
    let err = directory.fetch_users(None).await.unwrap_err();

    assert!(err.is_upstream());
}

#[tokio::test]
async fn test_unreachable_directory() {
    // Port 9 (discard) on localhost is not listening in test environments
    let directory = RealUserDirectory::new(endpoint_for("http://127.0.0.1:9/users"));
    let err = directory.fetch_users(None).await.unwrap_err();

    assert!(matches!(err, WebServerError::DirectoryRequest(_)));
}
