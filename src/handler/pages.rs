//! Index page module
//!
//! Serves the fixed application shell document at `/`.

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve the index document.
///
/// The page takes no parameters. A missing or unreadable file is a
/// deployment fault, not a client error, and surfaces as a generic 500.
pub async fn serve_index(ctx: &RequestContext<'_>, index_page: &str) -> Response<Full<Bytes>> {
    match fs::read_to_string(index_page).await {
        Ok(html) => http::response::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to read index page '{index_page}': {e}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn get_ctx() -> RequestContext<'static> {
        RequestContext {
            path: "/",
            is_head: false,
            if_none_match: None,
            range_header: None,
        }
    }

    #[tokio::test]
    async fn test_missing_page_is_500() {
        let response = serve_index(&get_ctx(), "templates/no-such-page.html").await;
        assert_eq!(response.status(), 500);
    }

    #[tokio::test]
    async fn test_existing_page_is_html() {
        let dir = std::env::temp_dir().join(format!("glicelivre-web-pages-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let page = dir.join("index.html");
        std::fs::write(&page, "<!DOCTYPE html><title>Glicelivre</title>").unwrap();

        let response = serve_index(&get_ctx(), page.to_str().unwrap()).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.starts_with(b"<!DOCTYPE html>"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_head_returns_empty_body() {
        let dir = std::env::temp_dir().join(format!("glicelivre-web-head-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let page = dir.join("index.html");
        std::fs::write(&page, "<html></html>").unwrap();

        let ctx = RequestContext {
            is_head: true,
            ..get_ctx()
        };
        let response = serve_index(&ctx, page.to_str().unwrap()).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Length"], "13");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
