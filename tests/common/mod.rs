//! Mock HTTP source for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// What the mock source does with the next request.
#[allow(dead_code)]
pub enum Reply {
    /// A complete response with the given status and body.
    Status(u16, String),
    /// Headers promise more bytes than the body delivers.
    Truncated(String),
    /// Close the connection without answering.
    Hangup,
}

/// Start a source whose replies are produced by `f` for each request.
pub async fn start_source<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        serve(socket, f().await).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a source that always answers 200 with `body`.
#[allow(dead_code)]
pub async fn start_static_source(body: &'static str) -> SocketAddr {
    start_source(move || async move { Reply::Status(200, body.to_string()) }).await
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Poll `check` until it holds or `timeout` elapses.
#[allow(dead_code)]
pub async fn eventually<F: FnMut() -> bool>(timeout: Duration, mut check: F) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

async fn serve(mut socket: TcpStream, reply: Reply) {
    read_request_head(&mut socket).await;

    let response = match reply {
        Reply::Status(status, body) => format!(
            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            reason(status),
            body.len(),
            body
        ),
        Reply::Truncated(body) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len() + 64,
            body
        ),
        Reply::Hangup => return,
    };

    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request_head(socket: &mut TcpStream) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
