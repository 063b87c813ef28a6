use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, extract::State, routing::get};
use maud::Markup;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::browser;
use crate::diff::FileDiff;
use crate::views;

/// Parsed diff set, read-only after startup; every request re-renders
/// from it, so handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub diffs: Arc<Vec<FileDiff>>,
}

pub fn app(diffs: Vec<FileDiff>) -> Router {
    Router::new()
        .route("/", get(index))
        .fallback(not_root)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            diffs: Arc::new(diffs),
        })
}

async fn index(State(state): State<AppState>) -> Markup {
    views::diff_page(&state.diffs)
}

/// Any other path gets an empty 200, matching the one-page nature of the
/// tool. No 404 handling.
async fn not_root() {}

/// Bind a loopback ephemeral port, announce it, point a browser at it,
/// and serve until the process is killed.
pub async fn serve(diffs: Vec<FileDiff>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("failed to bind listener")?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}/", addr.port());

    // The address goes to stdout; logging stays on stderr.
    println!("serving diff on {url}");
    info!("listening on http://{addr}");

    browser::open_url(&url);

    axum::serve(listener, app(diffs)).await.context("server error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::parse;

    const SAMPLE: &str = "--- a\n+++ b\n@@ -1,2 +1,2 @@\n-foo\n-bar\n+baz\n context\n";

    async fn spawn_app(diffs: Vec<FileDiff>) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app(diffs)).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn root_serves_the_rendered_diff() {
        let addr = spawn_app(parse(SAMPLE).unwrap()).await;
        let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        let body = resp.text().await.unwrap();
        assert!(body.contains("<h2>a</h2>"));
        assert!(body.contains(r#"<td class="del">- foo</td>"#));
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let addr = spawn_app(parse(SAMPLE).unwrap()).await;
        let url = format!("http://{addr}/");
        let first = reqwest::get(&url).await.unwrap().text().await.unwrap();
        let second = reqwest::get(&url).await.unwrap().text().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn other_paths_return_an_empty_200() {
        let addr = spawn_app(parse(SAMPLE).unwrap()).await;
        let resp = reqwest::get(format!("http://{addr}/favicon.ico"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert!(resp.text().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_diff_set_serves_an_empty_page() {
        let addr = spawn_app(Vec::new()).await;
        let body = reqwest::get(format!("http://{addr}/"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(!body.contains("<section>"));
        assert!(body.contains("<style>"));
    }
}
