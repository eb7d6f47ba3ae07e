//! Boundary collaborators for the analysis core: session persistence,
//! credential resolution, and report export.
//!
//! The core treats all three as opaque contracts; this crate supplies the
//! concrete demo implementations (JSON-file slots, fixture credentials,
//! CSV rendering).

pub mod auth;
pub mod report;
pub mod session;

pub use auth::{AuthProvider, DemoAuthProvider, UserAccount, UserRole};
pub use session::{JsonFileStore, SessionStore, StoreError};
