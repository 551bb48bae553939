//! Paging state types

use crate::client::PagingResponse;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use std::fmt;

// ============================================================================
// Continuation
// ============================================================================

/// Where a paged search stands, as a tagged state
///
/// The protocol encodes both "fresh search" and "no more pages" as cookie
/// values (absent vs. empty), which are easy to conflate. Here they are
/// distinct variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Continuation {
    /// No fetch has happened yet
    #[default]
    NotStarted,
    /// Mid-sequence; holds the cookie to send with the next request
    InProgress(Bytes),
    /// The server returned the empty-cookie sentinel
    Exhausted,
}

impl Continuation {
    /// True once the server has signaled "no more pages"
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// The cookie to send with the next request
    ///
    /// `None` for a fresh search. Never called in the `Exhausted` state by
    /// the cursor (it short-circuits first); returns `None` there too.
    pub fn request_cookie(&self) -> Option<&Bytes> {
        match self {
            Self::InProgress(cookie) => Some(cookie),
            Self::NotStarted | Self::Exhausted => None,
        }
    }

    /// Protocol-level view of the current cookie
    ///
    /// `None` before the first fetch; the empty sentinel once exhausted;
    /// otherwise the cookie carried forward to the next request.
    pub fn cookie(&self) -> Option<Bytes> {
        match self {
            Self::NotStarted => None,
            Self::InProgress(cookie) => Some(cookie.clone()),
            Self::Exhausted => Some(Bytes::new()),
        }
    }

    /// Derive the continuation from a server paging response
    pub fn from_response(response: &PagingResponse) -> Self {
        if response.is_final() {
            Self::Exhausted
        } else {
            Self::InProgress(response.cookie.clone())
        }
    }
}

impl fmt::Display for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("not-started"),
            // Cookies are opaque bytes; render base64 for logs
            Self::InProgress(cookie) => write!(f, "cookie:{}", STANDARD.encode(cookie)),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}

// ============================================================================
// PagingState
// ============================================================================

/// Mutable paging state, owned exclusively by the cursor
///
/// Holds everything that changes between fetches except the page payload
/// itself (whose type belongs to the directory client).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingState {
    continuation: Continuation,
    estimated_total: Option<u32>,
    page_index: Option<u32>,
}

impl PagingState {
    /// Create a fresh, fully unset state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current continuation state
    pub fn continuation(&self) -> &Continuation {
        &self.continuation
    }

    /// Last server estimate of the total result-set size
    pub fn estimated_total(&self) -> Option<u32> {
        self.estimated_total
    }

    /// 1-based index of the current page
    pub fn page_index(&self) -> Option<u32> {
        self.page_index
    }

    /// True once the server has signaled "no more pages"
    pub fn is_exhausted(&self) -> bool {
        self.continuation.is_exhausted()
    }

    /// The cookie to send with the next request
    pub fn request_cookie(&self) -> Option<&Bytes> {
        self.continuation.request_cookie()
    }

    /// Record a successful fetch: new continuation and estimate from the
    /// server, page index incremented by one (unset counts as zero)
    pub fn advance(&mut self, response: &PagingResponse) {
        self.continuation = Continuation::from_response(response);
        self.estimated_total = Some(response.estimated);
        self.page_index = Some(self.page_index.unwrap_or(0) + 1);
    }

    /// Drop the page position while keeping the continuation and estimate
    ///
    /// Used on the exhaustion short-circuit: the current page and index go
    /// unset, but the terminal continuation and last estimate stay readable.
    pub fn clear_position(&mut self) {
        self.page_index = None;
    }

    /// Full reset to the unset state (logical rewind)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
