//! Paged cursor
//!
//! The pagination state machine. A [`PagedCursor`] drives a
//! [`DirectoryClient`](crate::client::DirectoryClient) one bounded search
//! at a time, carrying the server's continuation cookie between requests
//! and exposing the result as a lazy, restartable sequence of pages.
//!
//! # Overview
//!
//! Three continuation states, modeled explicitly so "not started yet" and
//! "server said there is no more" can never be confused:
//!
//! ```text
//! NotStarted ──fetch──▶ InProgress(cookie) ──fetch──▶ ... ──empty cookie──▶ Exhausted
//!      ▲                                                                        │
//!      └────────────────────────── reset / restart ◀─────────────────────────────┘
//! ```
//!
//! Exhaustion is a stable terminal state: further fetches return `None`
//! without touching the collaborator, until an explicit reset.

mod paged;
mod types;

pub use paged::PagedCursor;
pub use types::{Continuation, PagingState};
