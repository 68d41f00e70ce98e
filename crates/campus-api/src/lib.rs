//! # campus-api
//!
//! HTTP access to the campus REST backend: content listing, request
//! caching, and form submission.

pub mod cache;
pub mod client;
pub mod endpoints;
pub mod forms;
pub mod lifecycle;

#[cfg(test)]
pub(crate) mod test_server;

pub use cache::CachedSource;
pub use client::ApiClient;
pub use endpoints::Section;
