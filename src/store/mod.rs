//! Synchronization store module.
//!
//! In-memory cache of remote collection state with fetch-once semantics.
//! Each slice is a plain state container
//! whose methods are the only mutation path, so the semantics are unit
//! testable without a runtime; the `*Store` types wrap a slice together
//! with the remote client and enforce remote-call-then-local-mutation
//! ordering for every write.

mod school;
mod user;

pub use school::*;
pub use user::*;

/// Fetch lifecycle of a cached collection.
///
/// Transitions are `Loading -> Idle` on success or `Loading -> Error` on
/// failure; both are terminal until an explicit clear triggers a re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Idle,
    Error,
}
