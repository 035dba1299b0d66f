//! crates/user_browser_core/src/session.rs
//!
//! The browsing state machine: an append-only cache of fetched users, a
//! position pointer, and a fetch-in-flight guard. All of the application's
//! reproducible logic lives here.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::UserRecord;
use crate::ports::{FetchError, UserSource};

/// Outcome of a forward-advancing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A new record was fetched and is now current.
    Fetched,
    /// The pointer moved over an already-cached record; no fetch happened.
    Moved,
    /// The fetch failed; the cache and pointer are unchanged and the reason
    /// is available from [`BrowsingSession::last_error`].
    Failed,
    /// Another fetch is already outstanding; the call was rejected.
    Busy,
}

/// Cursor state guarded by one mutex, never held across an await point.
struct Cursor {
    /// Insertion order = fetch order. A deque so the retain window can evict
    /// from the front.
    records: VecDeque<UserRecord>,
    /// Invariant: `position < records.len()` whenever `records` is non-empty.
    position: usize,
    /// Most recent fetch failure, cleared by the next successful operation.
    last_error: Option<FetchError>,
}

/// Tracks fetched user records and the current viewing position.
///
/// Methods take `&self` so the session can sit behind an `Arc` and keep its
/// read accessors (and `go_previous`) usable while a fetch is in flight.
/// Forward moves that need a fetch are serialized through an atomic
/// Idle -> Fetching compare-and-set; overlapping calls get [`Advance::Busy`].
pub struct BrowsingSession<S: UserSource> {
    source: S,
    cursor: Mutex<Cursor>,
    fetching: AtomicBool,
    retain_limit: usize,
}

impl<S: UserSource> BrowsingSession<S> {
    /// Creates an empty session. `retain_limit` caps how many records the
    /// cache keeps; once exceeded, the oldest record is evicted on append.
    /// A limit below 1 is clamped to 1 so there is always a current record
    /// after a successful fetch.
    pub fn new(source: S, retain_limit: usize) -> Self {
        Self {
            source,
            cursor: Mutex::new(Cursor {
                records: VecDeque::new(),
                position: 0,
                last_error: None,
            }),
            fetching: AtomicBool::new(false),
            retain_limit: retain_limit.max(1),
        }
    }

    /// Performs the implicit first fetch. On success the first record
    /// becomes current; on failure the session stays empty and the reason is
    /// kept in [`Self::last_error`].
    pub async fn initialize(&self) -> Advance {
        self.fetch_forward().await
    }

    /// Moves forward one record, fetching a new one when the pointer is
    /// already at the end of the cache. Fetches happen if and only if no
    /// cached record lies ahead.
    pub async fn go_next(&self) -> Advance {
        {
            let mut cursor = self.lock_cursor();
            if !cursor.records.is_empty() && cursor.position + 1 < cursor.records.len() {
                cursor.position += 1;
                cursor.last_error = None;
                return Advance::Moved;
            }
        }
        self.fetch_forward().await
    }

    /// Moves back to the previous cached record. Never fetches and never
    /// suspends; returns `false` when already at the oldest retained record
    /// (or the session is empty).
    pub fn go_previous(&self) -> bool {
        let mut cursor = self.lock_cursor();
        if cursor.records.is_empty() || cursor.position == 0 {
            return false;
        }
        cursor.position -= 1;
        cursor.last_error = None;
        true
    }

    /// The record under the pointer, or `None` before the first successful
    /// fetch.
    pub fn current(&self) -> Option<UserRecord> {
        let cursor = self.lock_cursor();
        cursor.records.get(cursor.position).cloned()
    }

    /// True exactly while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    pub fn can_go_previous(&self) -> bool {
        let cursor = self.lock_cursor();
        !cursor.records.is_empty() && cursor.position > 0
    }

    /// The most recent fetch failure, if the last fetch-bearing operation
    /// failed and no successful operation has happened since.
    pub fn last_error(&self) -> Option<FetchError> {
        self.lock_cursor().last_error.clone()
    }

    pub fn record_count(&self) -> usize {
        self.lock_cursor().records.len()
    }

    pub fn position(&self) -> Option<usize> {
        let cursor = self.lock_cursor();
        if cursor.records.is_empty() {
            None
        } else {
            Some(cursor.position)
        }
    }

    /// One fetch, one append. Exactly one caller may pass the Idle ->
    /// Fetching gate; the guard is released on both outcomes.
    async fn fetch_forward(&self) -> Advance {
        if self
            .fetching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Advance::Busy;
        }

        let outcome = self.source.fetch_user().await;

        let advance = {
            let mut cursor = self.lock_cursor();
            match outcome {
                Ok(record) => {
                    cursor.records.push_back(record);
                    if cursor.records.len() > self.retain_limit {
                        cursor.records.pop_front();
                    }
                    cursor.position = cursor.records.len() - 1;
                    cursor.last_error = None;
                    Advance::Fetched
                }
                Err(error) => {
                    cursor.last_error = Some(error);
                    Advance::Failed
                }
            }
        };

        self.fetching.store(false, Ordering::Release);
        advance
    }

    fn lock_cursor(&self) -> MutexGuard<'_, Cursor> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
