//! Common types and traits for all aggregates

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::{validate_record_key, AggregateId};
