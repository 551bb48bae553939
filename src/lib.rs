//! # dirpager
//!
//! A paged search cursor for LDAP-style directory queries.
//!
//! Directory servers cap the number of entries a single search may return.
//! The simple-paged-results control works around the cap by handing the
//! client an opaque continuation cookie with each page; sending the cookie
//! back resumes the search where the previous page left off. `dirpager`
//! manages that cookie for you, exposing a lazy, restartable sequence of
//! pages over a potentially unbounded result set.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dirpager::{DirectoryClient, PagedCursor, SearchSpec};
//!
//! fn main() -> dirpager::Result<()> {
//!     let spec = SearchSpec::builder("ou=people,dc=example,dc=com", "(objectClass=person)")
//!         .page_size(500)
//!         .attributes(["cn", "mail"])
//!         .build()?;
//!
//!     let client = connect()?; // your DirectoryClient implementation
//!     let mut cursor = PagedCursor::new(spec, &client);
//!
//!     while let Some(page) = cursor.fetch_next(false)? {
//!         // Process one page of entries
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       PagedCursor                          │
//! │  fetch_next(reset) → Option<Page>     reset_paging()       │
//! │  current() / advance() / valid() / restart()               │
//! └────────────────────────────────────────────────────────────┘
//!          │ SearchSpec (immutable)   │ PagingState (owned)
//!          ▼                          ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │              DirectoryClient (collaborator)                │
//! │  prepare_window(size, critical, cookie)                    │
//! │  search(spec) → Page ── paging_response() → cookie, count  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Transport, bind credentials, and entry decoding all live behind the
//! [`DirectoryClient`] trait; the cursor never touches wire bytes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Directory client collaborator traits
pub mod client;

/// Search specification (base, filter, scope, limits)
pub mod search;

/// The paged cursor and its state machine
pub mod cursor;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{DirectoryClient, PagedResult, PagingResponse};
pub use cursor::{Continuation, PagedCursor, PagingState};
pub use error::{Error, Result};
pub use search::{DerefPolicy, Scope, SearchSpec, SearchSpecBuilder, SearchSpecDef};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
