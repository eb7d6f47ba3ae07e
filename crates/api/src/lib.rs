//! HTTP surface for the TrustSeal analysis core.
//!
//! Exposes single-file classification, batch processing, trend analytics,
//! auth, and CSV export over axum. The router is built by
//! [`router::build_app_router`] so integration tests exercise the same
//! middleware stack as the production binary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
