//! HTTP client module
//!
//! Provides the authenticated Remote Client used by the navigator and the
//! fetcher.
//!
//! # Features
//!
//! - **Bearer authentication**: every request carries the host-supplied
//!   opaque credential
//! - **Failure collapsing**: any transport error or non-200 status becomes
//!   the single generic fetch error; upstream detail is only logged
//! - **Short-lived memoization**: identical `(url, credential)` JSON lookups
//!   within the cache TTL are served without a remote call

mod cache;
mod client;

pub use cache::{CacheKey, NoopCache, ResponseCache, TtlCache};
pub use client::RemoteClient;
