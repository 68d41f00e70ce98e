use async_trait::async_trait;

use crate::{error::CampusError, listing::Listing, request::ContentRequest};

/// Anything that can answer content requests with normalized listings.
///
/// The HTTP client implements this; so does the caching layer wrapped
/// around it, and test doubles.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Fetch and normalize one request.
    async fn fetch(&self, request: &ContentRequest) -> Result<Listing, CampusError>;

    /// Whether the backend is reachable.
    async fn is_available(&self) -> bool {
        true
    }
}
