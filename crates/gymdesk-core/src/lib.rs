//! gymdesk-core
//!
//! Pure domain types and object key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the gymdesk system.

pub mod error;
pub mod models;
pub mod national_id;
pub mod s3_keys;
