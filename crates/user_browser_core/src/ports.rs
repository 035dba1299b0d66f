//! crates/user_browser_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete user endpoint implementation.

use async_trait::async_trait;

use crate::domain::UserRecord;

//=========================================================================================
// Fetch Error and Result Types
//=========================================================================================

/// Any failure to obtain a new [`UserRecord`] from the external source.
///
/// The variants preserve the reason so callers can tell "still loading" apart
/// from "failed, no new content". `Clone` because the session retains the
/// most recent failure for its `last_error` accessor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status code {0}")]
    Status(u16),
    #[error("Malformed response body: {0}")]
    Malformed(String),
}

/// A convenience type alias for `Result<T, FetchError>`.
pub type SourceResult<T> = Result<T, FetchError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Supplies one freshly generated user per call.
///
/// Assumed to complete in bounded but unspecified time; the session
/// guarantees at most one call is outstanding at any instant.
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_user(&self) -> SourceResult<UserRecord>;
}

#[async_trait]
impl<T: UserSource + ?Sized> UserSource for std::sync::Arc<T> {
    async fn fetch_user(&self) -> SourceResult<UserRecord> {
        (**self).fetch_user().await
    }
}
