//! Integration tests for the search flow against a mock directory endpoint

use mockito::Matcher;
use roster::adapters::directory::DirectoryClient;
use roster::cli::commands::search::SearchArgs;
use roster::config::DirectoryConfig;
use roster::domain::{DirectoryError, RosterError, SearchCriteria};
use std::io::Write;

fn client_for(server: &mockito::ServerGuard) -> DirectoryClient {
    DirectoryClient::new(DirectoryConfig {
        endpoint: server.url(),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_search_posts_criteria_and_parses_records() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json; charset=utf-8")
        .match_body(Matcher::Json(serde_json::json!({
            "empid": "1042",
            "name": "Smith"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"empid": "1042", "name": "Jane Smith", "department": "Engineering"}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let employees = client
        .search(&SearchCriteria::new("1042", "Smith"))
        .await
        .unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name_display(), "Jane Smith");
    assert_eq!(employees[0].department_display(), "Engineering");
    assert_eq!(employees[0].email_display(), "N/A");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_empty_criteria_still_sends_both_keys() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(serde_json::json!({"empid": "", "name": ""})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let employees = client.search(&SearchCriteria::default()).await.unwrap();

    assert!(employees.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_accepts_stringified_array_response() {
    let inner = r#"[{"empid": "7", "name": "Ada"}]"#;
    let stringified = serde_json::to_string(inner).unwrap();

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(stringified)
        .create_async()
        .await;

    let client = client_for(&server);
    let employees = client.search(&SearchCriteria::new("7", "")).await.unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].empid_display(), "7");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_unparseable_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.search(&SearchCriteria::default()).await.unwrap_err();

    assert!(matches!(
        err,
        RosterError::Directory(DirectoryError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_search_server_error_is_classified() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.search(&SearchCriteria::default()).await.unwrap_err();

    assert!(matches!(
        err,
        RosterError::Directory(DirectoryError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_search_connection_refused_is_connection_failed() {
    // Nothing listens on this port
    let client = DirectoryClient::new(DirectoryConfig {
        endpoint: "http://127.0.0.1:1/employees".to_string(),
        ..Default::default()
    });

    let err = client.search(&SearchCriteria::default()).await.unwrap_err();
    assert!(matches!(
        err,
        RosterError::Directory(DirectoryError::ConnectionFailed(_))
    ));
}

/// End-to-end: empty result set is an informational outcome, not an error
#[tokio::test]
async fn test_search_command_with_empty_results_exits_zero() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::Json(serde_json::json!({
            "empid": "",
            "name": "Smith"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[directory]\nendpoint = \"{}\"\n",
        server.url()
    )
    .unwrap();
    config_file.flush().unwrap();

    let args = SearchArgs {
        empid: String::new(),
        name: "Smith".to_string(),
    };
    let exit_code = args
        .execute(config_file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(exit_code, 0);
    mock.assert_async().await;
}

/// End-to-end: transport failure maps to the connection-error exit code
#[tokio::test]
async fn test_search_command_with_unreachable_endpoint_exits_four() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[directory]\nendpoint = \"http://127.0.0.1:1/employees\"\n"
    )
    .unwrap();
    config_file.flush().unwrap();

    let args = SearchArgs {
        empid: String::new(),
        name: String::new(),
    };
    let exit_code = args
        .execute(config_file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(exit_code, 4);
}
