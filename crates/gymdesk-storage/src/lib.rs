//! gymdesk-storage
//!
//! The hosted document store. Records are JSON objects in an S3 bucket,
//! reached through the [`ObjectStore`](store::ObjectStore) trait so handlers
//! can run against an in-memory bucket in tests.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod s3;
pub mod store;
