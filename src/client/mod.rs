//! Directory client collaborator traits
//!
//! The cursor never talks to the wire itself. Everything protocol-side —
//! connection management, bind credentials, request encoding, entry
//! decoding — lives behind [`DirectoryClient`]. The cursor only needs two
//! capabilities from it: attach a paging control to the next request, and
//! run one bounded search that yields a page plus the server's paging
//! response.

use crate::error::Result;
use crate::search::SearchSpec;
use bytes::Bytes;

/// The server's paging-control response carried by each fetched page
///
/// The cookie is opaque: the client must not interpret it, only hand it
/// back on the next request. An empty cookie is the server's "no more
/// pages" signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingResponse {
    /// Continuation cookie for the next page (empty = exhausted)
    pub cookie: Bytes,
    /// Server's estimate of the total result-set size (0 = no estimate)
    pub estimated: u32,
}

impl PagingResponse {
    /// Create a paging response
    pub fn new(cookie: impl Into<Bytes>, estimated: u32) -> Self {
        Self {
            cookie: cookie.into(),
            estimated,
        }
    }

    /// True if the cookie is the empty "no more pages" sentinel
    pub fn is_final(&self) -> bool {
        self.cookie.is_empty()
    }
}

/// One bounded batch of search results
///
/// Entry and attribute decoding are the client's business; the cursor only
/// requires that a page can surface the paging-control response the server
/// attached to it. A paging-capable server always attaches one; absence is
/// a protocol violation and should be reported as an error.
pub trait PagedResult {
    /// Extract the server's paging-control response from this page
    fn paging_response(&self) -> Result<PagingResponse>;
}

/// A bound directory connection capable of paged searches
///
/// Implementations take `&self` so a single client can back several
/// independent cursors. The call model is synchronous: each method is one
/// blocking protocol round trip (or less).
pub trait DirectoryClient {
    /// The page type produced by [`search`](Self::search)
    type Page: PagedResult;

    /// Establish the paging control for the next search
    ///
    /// `cookie` is `None` on the very first request of a sequence and the
    /// previous page's cookie afterwards. `critical` asks the server to
    /// reject the request outright rather than silently ignore paging.
    fn prepare_window(&self, page_size: u32, critical: bool, cookie: Option<&Bytes>) -> Result<()>;

    /// Execute one bounded search under the previously prepared window
    fn search(&self, spec: &SearchSpec) -> Result<Self::Page>;
}
