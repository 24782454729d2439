//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and access logging.

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating what the content handlers need
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    let ctx = RequestContext {
        path,
        is_head,
        if_none_match: header_string(&req, "if-none-match"),
        range_header: header_string(&req, "range"),
    };

    // Method check, then body size check, then route dispatch
    let response = if let Some(resp) = check_http_method(method, state.config.http.enable_cors) {
        resp
    } else if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        resp
    } else {
        route_request(&ctx, &state).await
    };

    if state.access_log() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path.to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry.http_version = http_version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .body()
            .size_hint()
            .exact()
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on path and configuration
async fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let routes = state.routes();

    // Health probes answer before everything else
    if routes.health.enabled
        && (ctx.path == routes.health.liveness_path || ctx.path == routes.health.readiness_path)
    {
        return http::build_health_response("ok");
    }

    // The index page
    if ctx.path == "/" {
        return pages::serve_index(ctx, &routes.index_page).await;
    }

    // Pinned top-level PWA files (manifest.json, sw.js)
    if let Some(pinned) = routes.pinned.get(ctx.path) {
        return static_files::serve_pinned(ctx, pinned).await;
    }

    // The static asset tree
    if under_mount(ctx.path, &routes.static_mount) {
        return static_files::serve_static(ctx, &routes.static_dir, &routes.static_mount).await;
    }

    http::build_404_response()
}

/// True when the request path is the mount itself or below it
fn under_mount(path: &str, mount: &str) -> bool {
    path.strip_prefix(mount)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Check HTTP method and answer non-GET/HEAD methods directly
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

fn header_string(req: &Request<Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else if version == Version::HTTP_3 {
        "3"
    } else if version == Version::HTTP_09 {
        "0.9"
    } else {
        "1.1"
    }
}
