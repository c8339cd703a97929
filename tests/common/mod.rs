//! Shared helpers for integration tests: a canned HTTP server on a loopback port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Two-country body shaped like `GET /all`.
pub const THAILAND_FRANCE: &str = r#"[
  {"name":{"official":"Thailand","common":"Prathet Thai"},"cca2":"TH","cca3":"THA",
   "idd":{"root":"+66"},"altSpellings":["Siam"],"flags":{"png":"url1"}},
  {"name":{"official":"France","common":"République française"},"cca2":"FR","cca3":"FRA",
   "idd":{"root":"+33"},"altSpellings":[],"flags":{"png":"url2"}}
]"#;

/// A running stub server.
pub struct Stub {
    /// Base URL to hand to `ApiClient::new`.
    pub base_url: String,
    /// Request lines received so far, e.g. `GET /all HTTP/1.1`.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    /// Snapshot of the received request lines.
    pub fn seen(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// What: Wait until at least `n` requests arrived.
    ///
    /// Details:
    /// - Gives up after about two seconds so a broken test fails instead of hanging.
    pub async fn wait_for_requests(&self, n: usize) {
        for _ in 0..200 {
            if self.seen().len() >= n {
                return;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("stub saw {:?}, expected {n} request(s)", self.seen());
    }
}

/// What: Start a server answering every request with `status` and `body`.
///
/// Inputs:
/// - `status`: HTTP status code.
/// - `body`: Response body, sent as `application/json`.
///
/// Output:
/// - [`Stub`] with the base URL `http://127.0.0.1:<port>/v3.1`.
///
/// Details:
/// - Each connection serves one request and is closed afterwards.
pub async fn serve(status: u16, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    let body = body.to_string();
    tokio::spawn(async move {
        loop {
            let Ok((mut sock, _)) = listener.accept().await else {
                break;
            };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match sock.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        buf.extend_from_slice(&chunk[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let head = String::from_utf8_lossy(&buf);
            if let Some(line) = head.lines().next() {
                seen.lock().expect("requests lock").push(line.to_string());
            }
            let resp = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = sock.write_all(resp.as_bytes()).await;
            let _ = sock.shutdown().await;
        }
    });
    Stub {
        base_url: format!("http://{addr}/v3.1"),
        requests,
    }
}

/// What: Base URL of a loopback port nobody listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind free port");
    let addr = listener.local_addr().expect("free port addr");
    drop(listener);
    format!("http://{addr}/v3.1")
}
