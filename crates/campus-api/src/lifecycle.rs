//! Fetch lifetimes: stale-result rejection and cancellation on drop.

use campus_core::{
    error::CampusError, listing::Listing, request::ContentRequest, traits::ContentSource,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Ticket handed out by [`LatestOnly::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// "Last issued wins" guard for one page slot.
///
/// Each new fetch (language switch, new search input) takes a ticket;
/// results carrying an older ticket are discarded.
#[derive(Debug, Default)]
pub struct LatestOnly {
    issued: AtomicU64,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest, `None` if superseded.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!("discarding stale result for ticket {}", ticket.0);
            None
        }
    }
}

/// A spawned content fetch owned by its caller. Dropping the task aborts
/// the request.
pub struct FetchTask {
    handle: JoinHandle<Result<Listing, CampusError>>,
}

impl FetchTask {
    pub fn spawn(source: Arc<dyn ContentSource>, request: ContentRequest) -> Self {
        let handle = tokio::spawn(async move { source.fetch(&request).await });
        Self { handle }
    }

    /// Wait for the result.
    pub async fn join(mut self) -> Result<Listing, CampusError> {
        (&mut self.handle)
            .await
            .map_err(|e| CampusError::Network(format!("fetch task failed: {e}")))?
    }

    /// Abort explicitly. Equivalent to dropping the task.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    #[test]
    fn test_latest_ticket_wins() {
        let guard = LatestOnly::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert_eq!(guard.accept(first, "old"), None);
        assert_eq!(guard.accept(second, "new"), Some("new"));
    }

    struct Slow {
        completed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ContentSource for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch(&self, _request: &ContentRequest) -> Result<Listing, CampusError> {
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.completed.store(true, Ordering::SeqCst);
            Ok(Listing::default())
        }
    }

    #[tokio::test]
    async fn test_join_returns_result() {
        let completed = Arc::new(AtomicBool::new(false));
        let source: Arc<dyn ContentSource> = Arc::new(Slow {
            completed: completed.clone(),
        });
        let task = FetchTask::spawn(source, ContentRequest::new("/api/news/", "ru"));
        assert!(task.join().await.unwrap().is_empty());
        assert!(completed.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_drop_aborts_fetch() {
        let completed = Arc::new(AtomicBool::new(false));
        let source: Arc<dyn ContentSource> = Arc::new(Slow {
            completed: completed.clone(),
        });
        let task = FetchTask::spawn(source, ContentRequest::new("/api/news/", "ru"));
        task.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }
}
