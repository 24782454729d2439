//! Request handling module
//!
//! Route dispatch plus the two kinds of content the shell serves: the
//! fixed index page and files from the static tree.

pub mod pages;
pub mod router;
pub mod static_files;

pub use router::handle_request;
