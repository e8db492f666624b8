//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes and counts every request it answers, so tests
//! can tell a cache hit from a refetch.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub enum Route {
    /// 200 with an HTML body.
    Html(&'static str),
    /// Redirect (301) to another path on the same server.
    Redirect(&'static str),
    /// Bare status with an empty body.
    Status(u16, &'static str),
}

pub struct PageServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl PageServer {
    /// Requests answered so far (including redirects and errors).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Starts a server in a background thread. Unknown paths get 404.
/// The server runs until the process exits.
pub fn start(routes: &[(&'static str, Route)]) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.iter().cloned().collect());
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, &routes, &hits));
        }
    });
    PageServer {
        base: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<&'static str, Route>, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    hits.fetch_add(1, Ordering::SeqCst);

    let response = match routes.get(path) {
        Some(Route::Html(body)) => format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
        Some(Route::Redirect(to)) => format!(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            to
        ),
        Some(Route::Status(code, reason)) => format!(
            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            code, reason
        ),
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
}
