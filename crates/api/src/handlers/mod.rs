pub mod auth;
pub mod batch;
pub mod documents;
pub mod reports;
pub mod trends;
