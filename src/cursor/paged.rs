//! The paged cursor itself

use super::types::{Continuation, PagingState};
use crate::client::{DirectoryClient, PagedResult};
use crate::error::{Error, Result};
use crate::search::SearchSpec;
use bytes::Bytes;
use tracing::{debug, warn};

/// A restartable cursor over the pages of one directory search
///
/// Holds the immutable [`SearchSpec`], the mutable [`PagingState`], and
/// the last fetched page. The client reference is non-owning; one client
/// may back several independent cursors.
///
/// Not safe for concurrent use: a fetch reads and writes the paging state
/// non-atomically relative to the accessors. Wrap in external
/// synchronization if shared.
pub struct PagedCursor<'c, C: DirectoryClient> {
    spec: SearchSpec,
    client: &'c C,
    state: PagingState,
    current_page: Option<C::Page>,
}

impl<'c, C: DirectoryClient> PagedCursor<'c, C> {
    /// Create a cursor over `spec`, bound to `client`
    ///
    /// Spec validation (scope, filter, page-size normalization) already
    /// happened when the [`SearchSpec`] was built.
    pub fn new(spec: SearchSpec, client: &'c C) -> Self {
        Self {
            spec,
            client,
            state: PagingState::new(),
            current_page: None,
        }
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Fetch the next page, or start over if `reset` is true
    ///
    /// Returns `Ok(None)` once the server has signaled exhaustion; repeated
    /// calls after that keep returning `Ok(None)` without contacting the
    /// client, until a reset. One blocking client round trip otherwise.
    ///
    /// On error nothing is committed: the state (including the previously
    /// visible page) from before the failed attempt remains authoritative.
    /// In particular a page whose paging response turns out to be missing
    /// is discarded rather than left dangling as the current page.
    pub fn fetch_next(&mut self, reset: bool) -> Result<Option<&C::Page>> {
        if reset {
            self.reset_paging();
        }

        if self.state.is_exhausted() {
            debug!(filter = self.spec.filter(), "paging exhausted, nothing to fetch");
            self.current_page = None;
            self.state.clear_position();
            return Ok(None);
        }

        self.client
            .prepare_window(self.spec.page_size(), true, self.state.request_cookie())
            .map_err(|e| Error::paging_setup(format!("paging control rejected: {e}")))?;

        let page = self.client.search(&self.spec)?;

        let response = match page.paging_response() {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    filter = self.spec.filter(),
                    "discarding fetched page, server omitted the paging response"
                );
                return Err(Error::paging_setup(format!(
                    "server returned no paging response: {e}"
                )));
            }
        };

        self.state.advance(&response);
        self.current_page = Some(page);
        debug!(
            filter = self.spec.filter(),
            page_index = ?self.state.page_index(),
            page_size = self.spec.page_size(),
            estimated = response.estimated,
            continuation = %self.state.continuation(),
            "fetched page"
        );

        Ok(self.current_page.as_ref())
    }

    /// Unconditionally clear cookie, estimate, page index, and current page
    ///
    /// A logical rewind; the next fetch re-issues the first page request.
    /// No protocol interaction. Idempotent.
    pub fn reset_paging(&mut self) {
        debug!(filter = self.spec.filter(), "resetting paging state");
        self.state.reset();
        self.current_page = None;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The search parameters this cursor iterates under
    pub fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    /// Current continuation state
    pub fn continuation(&self) -> &Continuation {
        self.state.continuation()
    }

    /// Protocol-level view of the current cookie
    ///
    /// `None` before the first fetch; the empty sentinel once exhausted.
    pub fn cookie(&self) -> Option<Bytes> {
        self.state.continuation().cookie()
    }

    /// Last server estimate of the total result-set size
    pub fn estimated_total(&self) -> Option<u32> {
        self.state.estimated_total()
    }

    /// 1-based index of the current page
    pub fn page_index(&self) -> Option<u32> {
        self.state.page_index()
    }

    // ========================================================================
    // Sequence protocol
    // ========================================================================

    /// Peek at the current page without fetching
    pub fn current(&self) -> Option<&C::Page> {
        self.current_page.as_ref()
    }

    /// True iff a current page is present
    pub fn valid(&self) -> bool {
        self.current_page.is_some()
    }

    /// Advance to the next page; true if one was produced
    ///
    /// Equivalent to `fetch_next(false)`, discarding the page reference.
    pub fn advance(&mut self) -> Result<bool> {
        Ok(self.fetch_next(false)?.is_some())
    }

    /// Restart from the first page with fresh state; true if a page was
    /// produced
    ///
    /// Equivalent to `fetch_next(true)`. Re-issues the first page request
    /// rather than replaying anything cached.
    pub fn restart(&mut self) -> Result<bool> {
        Ok(self.fetch_next(true)?.is_some())
    }
}
