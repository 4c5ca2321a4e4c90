// crates/pilk-client/tests/http_client.rs
//
// Drives `ApiClient` against a throwaway HTTP/1.1 responder that answers
// exactly one request with a canned response and hands back what it read.

use pilk_client::{ApiClient, ApiError, TradingApi};
use pilk_core::{PositionSide, TradeIntent};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single response, returning the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (base, handle)
}

// Read headers, then as many body bytes as Content-Length says.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn fetch_state_decodes_snapshot() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"balance":1000.0,"equity":1003.5,"positions":{"BTC/USDT":{"type":"long","size":0.01,"pnl":3.5}},"orders":[]}"#,
    )
    .await;

    let client = ApiClient::new(base);
    let snap = client.fetch_state().await.expect("state");

    assert_eq!(snap.equity, 1003.5);
    assert_eq!(snap.positions["BTC/USDT"].pnl, Some(3.5));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/state "), "request was: {request}");
}

#[tokio::test]
async fn trade_posts_json_body() {
    let (base, server) = serve_once("200 OK", r#"{"status":"ok","balance":899.0}"#).await;

    let client = ApiClient::new(base);
    let ack = client
        .execute_trade(&TradeIntent::open("BTC", PositionSide::Long, 100.0, 10))
        .await
        .expect("ack");
    assert_eq!(ack.status, "ok");
    assert_eq!(ack.balance, Some(899.0));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/trade "), "request was: {request}");
    assert!(request.contains(r#""action":"long""#));
    assert!(request.contains(r#""leverage":10"#));
}

#[tokio::test]
async fn rejected_trade_carries_server_detail() {
    let (base, _server) = serve_once("400 Bad Request", r#"{"detail":"Insufficient margin"}"#).await;

    let client = ApiClient::new(base);
    let err = client
        .execute_trade(&TradeIntent::close("BTC/USDT"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::TradeRejected {
            detail: "Insufficient margin".to_string()
        }
    );
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let (base, _server) = serve_once("200 OK", r#"{"balance":"lots"}"#).await;

    let client = ApiClient::new(base);
    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn reset_posts_without_body() {
    let (base, server) = serve_once("200 OK", r#"{"status":"reset","balance":1000.0}"#).await;

    let client = ApiClient::new(base);
    let ack = client.reset_game().await.expect("ack");
    assert_eq!(ack.status, "reset");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/reset "), "request was: {request}");
}

#[tokio::test]
async fn refused_connection_is_transport() {
    // Grab a free port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{}/api", addr));
    let err = client.fetch_state().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[test]
fn trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://localhost:8000/api///");
    assert_eq!(client.base_url(), "http://localhost:8000/api");
    assert_eq!(ApiClient::default().base_url(), pilk_client::DEFAULT_BASE_URL);
}
