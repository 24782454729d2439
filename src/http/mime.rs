//! MIME type detection module
//!
//! Maps a file extension to the Content-Type the static tree is served
//! with. The table covers what a PWA shell actually ships: markup,
//! scripts, styles, the web app manifest, icons, and fonts.

/// Get MIME Content-Type based on file extension
///
/// Extensions are matched case-insensitively. Unknown extensions fall
/// back to `application/octet-stream`.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let lower = extension.map(str::to_ascii_lowercase);
    match lower.as_deref() {
        // Markup and text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("webmanifest") => "application/manifest+json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Archives
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",

        // Default
        _ => "application/octet-stream",
    }
}
