// src/test_support.rs
// =============================================================================
// Helpers shared by the unit tests: canned search responses and a one-shot
// local HTTP responder, so no test needs a network connection.
// =============================================================================

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::github::Issue;

/// A search response body holding one issue per (number, body) pair
pub fn search_json(issues: &[(u64, &str)]) -> String {
    let items: Vec<serde_json::Value> = issues
        .iter()
        .map(|(number, body)| {
            serde_json::json!({
                "url": format!("https://api.github.com/repos/VanDng/DumpExam/issues/{number}"),
                "html_url": format!("https://github.com/VanDng/DumpExam/issues/{number}"),
                "number": number,
                "title": format!("Question {number}"),
                "created_at": "2021-03-01T10:00:00Z",
                "updated_at": "2021-03-01T12:00:00Z",
                "body": body,
            })
        })
        .collect();

    serde_json::json!({
        "total_count": items.len(),
        "incomplete_results": false,
        "items": items,
    })
    .to_string()
}

/// Issue records built the same way as `search_json`
pub fn issues(list: &[(u64, &str)]) -> Vec<Issue> {
    crate::github::parse_search_response(&search_json(list)).unwrap()
}

/// Serves exactly one HTTP response on a random local port
///
/// Returns the base URL to use as the API root.
pub async fn serve_once(status_line: &'static str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the request head so closing the socket does not reset it
        let mut request: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{}", addr)
}
