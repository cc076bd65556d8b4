//! View-state primitives shared by all pages.
//!
//! `FetchState` keeps "still loading" and "empty result" apart: a page that
//! got an empty list renders an empty section, a page still waiting renders
//! a loading indicator, and a failed fetch renders static fallback content
//! with an error hint. `FetchScope` ties spawned fetches to the lifetime of
//! the view that started them, so a response arriving after navigation can
//! never write stale state.

use std::future::Future;

use tokio::task::{AbortHandle, JoinHandle};
use tracing::warn;

use crate::error::ApiError;

/// Lifecycle of one fetched slice of view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// The fetch has not resolved yet.
    Loading,
    /// The fetch resolved with data (possibly an empty list).
    Loaded(T),
    /// The fetch failed; static fallback content applies.
    Failed,
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }
}

impl<T> FetchState<Vec<T>> {
    /// The loaded items, or an empty slice while loading or after failure.
    pub fn data(&self) -> &[T] {
        match self {
            FetchState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Convert a fetch result into view state, logging the diagnostic for
/// failures. Prior state is the caller's concern; this never panics and
/// never retries.
pub fn into_state<T>(endpoint: &str, result: Result<T, ApiError>) -> FetchState<T> {
    match result {
        Ok(data) => FetchState::Loaded(data),
        Err(err) => {
            warn!("Fetch of {} failed: {}", endpoint, err);
            FetchState::Failed
        }
    }
}

/// Owns the fetches started for one view and aborts any still in flight
/// when the view goes away.
#[derive(Debug, Default)]
pub struct FetchScope {
    aborts: Vec<AbortHandle>,
}

/// A fetch running inside a scope. Joining yields `None` when the scope was
/// dropped first.
#[derive(Debug)]
pub struct ScopedFetch<T> {
    handle: JoinHandle<T>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a fetch bound to this scope.
    pub fn spawn<T, F>(&mut self, fut: F) -> ScopedFetch<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        self.aborts.push(handle.abort_handle());
        ScopedFetch { handle }
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        for abort in &self.aborts {
            abort.abort();
        }
    }
}

impl<T> ScopedFetch<T> {
    /// Await the fetch. `None` means the scope was dropped (or the task
    /// panicked) before the fetch resolved.
    pub async fn join(self) -> Option<T> {
        self.handle.await.ok()
    }
}
