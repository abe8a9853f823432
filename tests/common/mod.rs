//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lookup_proxy::config::LookupConfig;
use lookup_proxy::http::HttpServer;
use lookup_proxy::lifecycle::Shutdown;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Payload the upstream returns for a known identifier.
#[allow(dead_code)]
pub const PIKACHU: &str = r#"{"name":"pikachu","id":25,"sprites":{"other":{"official-artwork":{"front_default":"https://x/25.png"}}}}"#;

/// Request paths seen by a mock upstream.
pub type SeenPaths = Arc<Mutex<Vec<String>>>;

/// Start a programmable mock upstream on an ephemeral port.
///
/// `f` receives the request path and returns the status code and body.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> (SocketAddr, SeenPaths)
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: SeenPaths = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let seen_paths = seen.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let seen_paths = seen_paths.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        let path = request_line
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("/")
                            .to_string();

                        // Drain headers.
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => continue,
                                Err(_) => return,
                            }
                        }

                        seen_paths.lock().unwrap().push(path.clone());
                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

/// Start a mock upstream that always answers with `status` and `body`.
#[allow(dead_code)]
pub async fn start_fixed_upstream(status: u16, body: &'static str) -> (SocketAddr, SeenPaths) {
    start_programmable_upstream(move |_| async move { (status, body.to_string()) }).await
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start the proxy against `upstream_base` and return its address.
pub async fn start_proxy(upstream_base: String) -> (SocketAddr, Shutdown) {
    let mut config = LookupConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.upstream.base_url = upstream_base;
    config.upstream.timeout_secs = Some(5);
    config.upstream.use_system_proxy = false;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// reqwest client that never reuses connections or consults env proxies.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
