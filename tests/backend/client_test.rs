//! Backend client tests against a one-shot TCP stub server.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use anteroom::backend::{BackendClient, BackendError};

/// Serve exactly one HTTP response on a random local port, then close.
async fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub listener local addr");

    let status_line = status_line.to_owned();
    let body = body.to_owned();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut read_buf = [0_u8; 1024];
            let _ = socket.read(&mut read_buf).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{addr}")
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = BackendClient::new("not a url");
    assert!(matches!(result, Err(BackendError::InvalidBaseUrl(_))));
}

#[test]
fn base_url_is_normalized_without_trailing_slash() {
    let client = BackendClient::new("http://127.0.0.1:5000/").expect("client should build");
    assert_eq!(client.base_url(), "http://127.0.0.1:5000");
}

#[tokio::test]
async fn list_messages_parses_plain_array() {
    let body = r#"[
        {"_id":"m1","name":"Jane","email":"jane@x.com","phone":"555-0100","message":"Hi","read":false},
        {"_id":"m2","name":"Bob","message":"Yo","read":true}
    ]"#;
    let base = serve_once("200 OK", body).await;
    let client = BackendClient::new(&base).expect("client should build");

    let records = client.list_messages(10).await.expect("listing should parse");
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].id(), Some("m1"));
    assert!(!records[0].is_read());
    let phone = records[0].phone().expect("first record carries a phone");
    assert_eq!(phone.value, "555-0100");
    assert_eq!(phone.path, "phone");

    assert!(records[1].is_read());
    assert_eq!(records[1].phone(), None);
}

#[tokio::test]
async fn non_success_status_surfaces_as_api_error() {
    let base = serve_once("500 Internal Server Error", "boom").await;
    let client = BackendClient::new(&base).expect("client should build");

    let err = match client.list_messages(10).await {
        Ok(_) => panic!("listing should fail on 500"),
        Err(err) => err,
    };
    match err {
        BackendError::Api { status, detail } => {
            assert_eq!(status, 500);
            assert!(detail.contains("boom"));
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn mark_read_succeeds_on_ok() {
    let base = serve_once("200 OK", "{}").await;
    let client = BackendClient::new(&base).expect("client should build");
    client.mark_read("m1").await.expect("mark_read should succeed");
}

#[tokio::test]
async fn mark_read_maps_missing_id_to_not_found() {
    let base = serve_once("404 Not Found", "no such message").await;
    let client = BackendClient::new(&base).expect("client should build");

    let err = match client.mark_read("m9").await {
        Ok(()) => panic!("mark_read should fail on 404"),
        Err(err) => err,
    };
    assert!(matches!(err, BackendError::NotFound(id) if id == "m9"));
}

#[tokio::test]
async fn get_project_maps_missing_id_to_not_found() {
    let base = serve_once("404 Not Found", "no such project").await;
    let client = BackendClient::new(&base).expect("client should build");

    let err = match client.get_project("p9").await {
        Ok(_) => panic!("get_project should fail on 404"),
        Err(err) => err,
    };
    assert!(matches!(err, BackendError::NotFound(id) if id == "p9"));
}

#[tokio::test]
async fn create_project_returns_stored_record() {
    let body = r#"{"_id":"p1","title":"Rebrand","description":"Full identity refresh","category":"branding","imageUrl":"https://cdn.example/p1.jpg","createdAt":"2026-07-01T12:00:00Z"}"#;
    let base = serve_once("201 Created", body).await;
    let client = BackendClient::new(&base).expect("client should build");

    let draft = anteroom::backend::ProjectDraft {
        title: "Rebrand".to_owned(),
        description: "Full identity refresh".to_owned(),
        category: Some("branding".to_owned()),
        image_url: None,
        link: None,
    };
    let created = client
        .create_project(&draft)
        .await
        .expect("create should parse stored record");
    assert_eq!(created.id, "p1");
    assert_eq!(created.category.as_deref(), Some("branding"));
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn health_check_false_when_unreachable() {
    // Grab a free port, then close the listener so nothing is there.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("listener local addr");
    drop(listener);

    let client = BackendClient::new(&format!("http://{addr}")).expect("client should build");
    assert!(!client.health_check().await);
}

#[tokio::test]
async fn health_check_true_on_ok() {
    let base = serve_once("200 OK", "{\"ok\":true}").await;
    let client = BackendClient::new(&base).expect("client should build");
    assert!(client.health_check().await);
}
