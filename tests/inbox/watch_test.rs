//! Inbox watcher delivery and deduplication tests.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use anteroom::backend::BackendClient;
use anteroom::inbox::watch::spawn_inbox_watcher;

/// Serve the same HTTP response for every incoming connection.
async fn serve_repeatedly(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub listener local addr");

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut read_buf = [0_u8; 1024];
                let _ = socket.read(&mut read_buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn watcher_delivers_each_record_once() {
    let base = serve_repeatedly(r#"[{"_id":"m1","name":"Jane","phone":"555-0100"}]"#).await;
    let client = BackendClient::new(&base).expect("client should build");

    let (handle, mut rx) = spawn_inbox_watcher(client, Duration::from_millis(20), 10);

    let first = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("watcher should deliver within 5s")
        .expect("channel should be open");
    assert_eq!(first.id(), Some("m1"));
    assert_eq!(
        first.phone().expect("record carries a phone").value,
        "555-0100"
    );

    // Subsequent polls re-fetch the same listing; the record must not be
    // delivered again.
    let second = tokio::time::timeout(Duration::from_millis(300), rx.recv()).await;
    assert!(second.is_err(), "record was delivered twice");

    handle.abort();
}
