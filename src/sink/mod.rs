//! Batch transformation of CDC events into parameterized write statements
//!
//! This module implements:
//! - Cypher identifier quoting for dynamic schema elements
//! - Label-set delta computation and the delta-based grouping key
//! - Query bundles (statement template + batched parameter maps)
//! - The source-id ingestion strategy itself

pub mod cypher;
pub mod labels;
pub mod query;
pub mod strategy;

// Re-export main types
pub use labels::LabelDelta;
pub use query::{ParameterMap, QueryBundle};
pub use strategy::{IngestionStrategy, SourceIdIngestionStrategy, SourceIdStrategyConfig};
