use common::config::loader::CONNECTION_FILE_NAME;
use common::config::ConfigError;
use serde_json::json;
use shared_clients::CatalogClientError;
use std::fs;
use test_utils::admin::admin_client_from_file;
use test_utils::{int_admin_client, AdminBootstrapError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn catalog_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/system/version"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "version": "1.2.0" })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn admin_client_for_healthy_server() {
    logging::init_test_logger();
    let server = catalog_server(200).await;
    let host = format!("{}/api", server.uri());

    let client = int_admin_client(Some(&host)).await.expect("healthy catalog");
    assert_eq!(client.base_url(), host);
}

#[tokio::test]
async fn admin_client_sends_bearer_token() {
    logging::init_test_logger();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/system/version"))
        .and(header("authorization", "Bearer local-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "1.2.0" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join(CONNECTION_FILE_NAME),
        format!(
            "hostPort: {}/api\nauthProvider: openmetadata\nsecurityConfig:\n  jwtToken: local-token\n",
            server.uri()
        ),
    )
    .expect("write config");

    admin_client_from_file(Some(dir.path().to_path_buf()))
        .await
        .expect("client from file");
}

#[tokio::test]
async fn unhealthy_server_is_reported() {
    logging::init_test_logger();
    let server = catalog_server(503).await;
    let host = format!("{}/api", server.uri());

    let err = int_admin_client(Some(&host)).await.unwrap_err();
    assert!(matches!(err, AdminBootstrapError::Unhealthy { .. }));
}

#[tokio::test]
async fn unreachable_server_fails_to_connect() {
    logging::init_test_logger();
    let err = int_admin_client(Some("http://127.0.0.1:1/api"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AdminBootstrapError::Client(CatalogClientError::FailedToConnect { .. })
    ));
}

#[tokio::test]
async fn missing_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = admin_client_from_file(Some(dir.path().to_path_buf()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AdminBootstrapError::Config(ConfigError::MissingConnection { .. })
    ));
}
