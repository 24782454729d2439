//! Static file serving module
//!
//! File loading, traversal containment, MIME detection, and the
//! conditional/range response logic shared by the static tree and the
//! pinned PWA files.

use crate::config::PinnedFile;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeParseResult};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a file from the static tree.
pub async fn serve_static(
    ctx: &RequestContext<'_>,
    static_dir: &str,
    mount: &str,
) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_static_path(static_dir, ctx.path, mount) else {
        return http::build_404_response();
    };

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type =
                mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            build_file_response(&content, content_type, ctx)
        }
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            http::build_404_response()
        }
    }
}

/// Serve a pinned single-file route with its declared content type.
///
/// An absent file is an ordinary 404; the route stays registered.
pub async fn serve_pinned(ctx: &RequestContext<'_>, pinned: &PinnedFile) -> Response<Full<Bytes>> {
    match fs::read(&pinned.path).await {
        Ok(content) => build_file_response(&content, &pinned.content_type, ctx),
        Err(_) => http::build_404_response(),
    }
}

/// Map a request path under the mount to a file inside the static root.
///
/// The canonicalized candidate must stay inside the canonicalized root;
/// anything that escapes is the traversal case and resolves to None.
/// Directories also resolve to None: the tree serves files only.
fn resolve_static_path(static_dir: &str, request_path: &str, mount: &str) -> Option<PathBuf> {
    let relative = request_path
        .strip_prefix(mount)
        .unwrap_or(request_path)
        .trim_start_matches('/');

    let root = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    let candidate = Path::new(static_dir).join(relative);

    // Missing files are ordinary 404s, no logging
    let canonical = candidate.canonicalize().ok()?;

    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            canonical.display()
        ));
        return None;
    }

    if !canonical.is_file() {
        return None;
    }

    Some(canonical)
}

/// Build the response for a loaded file: 304 on a matching validator,
/// 206/416 for range requests, 200 otherwise.
fn build_file_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    match http::parse_range_header(ctx.range_header.as_deref(), total_size) {
        RangeParseResult::Valid(range) => {
            let start = range.start;
            let end = range.end_position(total_size);

            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[start..=end].to_vec())
            };

            http::response::build_partial_response(
                body,
                content_type,
                &etag,
                start,
                end,
                total_size,
                ctx.is_head,
            )
        }
        RangeParseResult::NotSatisfiable => http::build_416_response(total_size),
        RangeParseResult::None => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data.to_owned())
            };

            http::response::build_cached_response(body, content_type, &etag, ctx.is_head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    /// A throwaway tree: `<root>/assets/...` is the static root and
    /// `<root>/outside.txt` sits one level above it.
    struct TestTree {
        root: PathBuf,
    }

    impl TestTree {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "glicelivre-web-static-{}-{name}",
                std::process::id()
            ));
            let _ = std::fs::remove_dir_all(&root);
            std::fs::create_dir_all(root.join("assets/js")).unwrap();
            std::fs::write(root.join("assets/js/app.js"), b"console.log('shell');").unwrap();
            std::fs::write(root.join("assets/manifest.json"), b"{\"name\":\"Glicelivre\"}")
                .unwrap();
            std::fs::write(root.join("outside.txt"), b"must never be served").unwrap();
            Self { root }
        }

        fn static_dir(&self) -> String {
            self.root.join("assets").to_string_lossy().into_owned()
        }
    }

    impl Drop for TestTree {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }

    fn get_ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
            range_header: None,
        }
    }

    #[test]
    fn test_resolves_nested_file() {
        let tree = TestTree::new("nested");
        let resolved = resolve_static_path(&tree.static_dir(), "/static/js/app.js", "/static")
            .expect("nested file must resolve");
        assert!(resolved.ends_with("js/app.js"));
    }

    #[test]
    fn test_rejects_traversal_to_existing_file() {
        let tree = TestTree::new("traversal");
        // outside.txt exists, but above the static root
        assert!(
            resolve_static_path(&tree.static_dir(), "/static/../outside.txt", "/static").is_none()
        );
    }

    #[test]
    fn test_directories_are_not_served() {
        let tree = TestTree::new("dirs");
        assert!(resolve_static_path(&tree.static_dir(), "/static/js", "/static").is_none());
        assert!(resolve_static_path(&tree.static_dir(), "/static/", "/static").is_none());
        assert!(resolve_static_path(&tree.static_dir(), "/static", "/static").is_none());
    }

    #[test]
    fn test_missing_file_resolves_to_none() {
        let tree = TestTree::new("missing");
        assert!(resolve_static_path(&tree.static_dir(), "/static/nope.css", "/static").is_none());
    }

    #[tokio::test]
    async fn test_serve_static_infers_content_type() {
        let tree = TestTree::new("mime");
        let response = serve_static(&get_ctx("/static/js/app.js"), &tree.static_dir(), "/static").await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "application/javascript");
    }

    #[tokio::test]
    async fn test_serve_pinned_forces_content_type_and_bytes() {
        let tree = TestTree::new("pinned");
        let pinned = PinnedFile {
            path: format!("{}/manifest.json", tree.static_dir()),
            content_type: "application/json".to_string(),
        };

        let response = serve_pinned(&get_ctx("/manifest.json"), &pinned).await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "application/json");

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let on_disk = std::fs::read(&pinned.path).unwrap();
        assert_eq!(body.as_ref(), on_disk.as_slice());
    }

    #[tokio::test]
    async fn test_serve_pinned_missing_file_is_404() {
        let pinned = PinnedFile {
            path: "static/no-such-file.js".to_string(),
            content_type: "application/javascript".to_string(),
        };
        let response = serve_pinned(&get_ctx("/sw.js"), &pinned).await;
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_conditional_request_yields_304() {
        let tree = TestTree::new("etag");
        let first =
            serve_static(&get_ctx("/static/js/app.js"), &tree.static_dir(), "/static").await;
        let etag = first.headers()["ETag"].to_str().unwrap().to_string();

        let ctx = RequestContext {
            if_none_match: Some(etag),
            ..get_ctx("/static/js/app.js")
        };
        let second = serve_static(&ctx, &tree.static_dir(), "/static").await;
        assert_eq!(second.status(), 304);
    }

    #[tokio::test]
    async fn test_range_request_yields_206() {
        let tree = TestTree::new("range");
        let ctx = RequestContext {
            range_header: Some("bytes=0-6".to_string()),
            ..get_ctx("/static/js/app.js")
        };
        let response = serve_static(&ctx, &tree.static_dir(), "/static").await;
        assert_eq!(response.status(), 206);
        assert_eq!(
            response.headers()["Content-Range"].to_str().unwrap(),
            "bytes 0-6/21"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body.as_ref(), b"console");
    }
}
