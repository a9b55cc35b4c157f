//! HTTP backed content host.
//!
//! The terminal cannot render a page, so the host fetches the server's url
//! and reports whether it answered, along with its status and page title.

use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, redirect};
use tracing::{debug, warn};

use crate::domain::connection::LoadOutcome;
use crate::domain::entities::SandboxCapabilities;
use crate::domain::ports::ContentHostPort;

const USER_AGENT: &str = concat!("karaoke-launcher/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Loads server pages over HTTP.
pub struct HttpContentHost {
    timeout: Duration,
}

impl HttpContentHost {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn client(&self, sandbox: SandboxCapabilities) -> reqwest::Result<Client> {
        let allow_top_navigation = sandbox.allows_top_navigation();
        let policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                return attempt.error("too many redirects");
            }
            let same_origin = attempt
                .previous()
                .first()
                .is_some_and(|first| first.origin() == attempt.url().origin());
            if allow_top_navigation || same_origin {
                attempt.follow()
            } else {
                attempt.stop()
            }
        });

        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .redirect(policy)
            .build()
    }
}

#[async_trait]
impl ContentHostPort for HttpContentHost {
    async fn load(&self, url: &str, sandbox: SandboxCapabilities) -> LoadOutcome {
        let client = match self.client(sandbox) {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "Failed to create HTTP client");
                return LoadOutcome::failed(e.to_string());
            }
        };

        debug!(url = %url, sandbox = %sandbox.to_attribute(), "Loading server page");
        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %url, error = %e, "Server page failed to load");
                return LoadOutcome::failed(e.to_string());
            }
        };

        let status = response.status().as_u16();
        let title = match response.text().await {
            Ok(body) => extract_title(&body),
            Err(e) => {
                debug!(url = %url, error = %e, "Failed to read page body");
                None
            }
        };

        debug!(url = %url, status, title = ?title, "Server page loaded");
        LoadOutcome::Loaded { status, title }
    }
}

/// Returns the trimmed contents of the first `<title>` element.
fn extract_title(html: &str) -> Option<String> {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    let title_regex = TITLE_REGEX
        .get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("Invalid regex"));

    title_regex
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|title| !title.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0_u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/")
    }

    #[test]
    fn test_extract_title() {
        let html = "<html><head><TITLE>\n  Karaoke   Eternal \n</TITLE></head></html>";
        assert_eq!(extract_title(html).as_deref(), Some("Karaoke Eternal"));
    }

    #[test]
    fn test_extract_title_missing_or_empty() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    #[tokio::test]
    async fn test_load_reports_status_and_title() {
        let body = "<html><head><title>Karaoke Eternal</title></head></html>";
        let response: &'static str = Box::leak(
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .into_boxed_str(),
        );
        let url = serve_once(response).await;
        let host = HttpContentHost::new(Duration::from_secs(5));

        let outcome = host.load(&url, SandboxCapabilities::VIEWER).await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                status: 200,
                title: Some("Karaoke Eternal".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_still_counts_as_loaded() {
        let url = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let host = HttpContentHost::new(Duration::from_secs(5));

        let outcome = host.load(&url, SandboxCapabilities::VIEWER).await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                status: 503,
                title: None,
            }
        );
    }

    #[tokio::test]
    async fn test_cross_origin_redirect_is_not_followed() {
        let url = serve_once(
            "HTTP/1.1 302 Found\r\nLocation: http://example.invalid/\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let host = HttpContentHost::new(Duration::from_secs(5));

        let outcome = host.load(&url, SandboxCapabilities::VIEWER).await;

        assert_eq!(
            outcome,
            LoadOutcome::Loaded {
                status: 302,
                title: None,
            }
        );
    }

    #[tokio::test]
    async fn test_refused_connection_fails() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let host = HttpContentHost::new(Duration::from_secs(5));

        let outcome = host
            .load(&format!("http://{addr}/"), SandboxCapabilities::VIEWER)
            .await;

        assert!(outcome.is_failure());
    }
}
