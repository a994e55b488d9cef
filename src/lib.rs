//! Graphsink
//!
//! Translates batches of change-data-capture (CDC) events describing
//! mutations to a property graph into a minimal set of idempotent,
//! batched Cypher write statements.
//!
//! The core is a pure, stateless transformation. A caller hands one
//! ordered event batch to an [`IngestionStrategy`] and gets four
//! independent result sets back: node merges, node deletes, relationship
//! merges and relationship deletes. Each result is a list of
//! [`QueryBundle`]s, one write statement plus the parameter maps of every
//! entity batched under it. Executing the statements, choosing transaction
//! boundaries and ordering the four sets against the store stay with the
//! caller.
//!
//! # Example Usage
//!
//! ```rust
//! use graphsink::{
//!     IngestionStrategy, NodeChange, PropertyMap, PropertyValue,
//!     SourceIdIngestionStrategy, TransactionEvent,
//! };
//!
//! let strategy = SourceIdIngestionStrategy::default();
//!
//! let mut properties = PropertyMap::new();
//! properties.insert("name".to_string(), PropertyValue::from("Alice"));
//!
//! let events = vec![TransactionEvent::node_created(
//!     "person-1",
//!     NodeChange::new(vec!["Person".into()], properties),
//! )];
//!
//! let bundles = strategy.merge_node_events(&events).unwrap();
//! assert_eq!(bundles.len(), 1);
//! assert!(bundles[0].statement.contains("MERGE (n:SourceEvent{sourceId: event.id})"));
//! assert_eq!(bundles[0].events.len(), 1);
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod events;
pub mod sink;

// Re-export main types for convenience
pub use error::{SinkError, SinkResult};

pub use events::{
    EntityType, EventId, Label, NodeChange, OperationType, Payload, PropertyMap, PropertyValue,
    RelationshipChange, RelationshipType, TransactionEvent,
};

pub use sink::{
    IngestionStrategy, LabelDelta, ParameterMap, QueryBundle, SourceIdIngestionStrategy,
    SourceIdStrategyConfig,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "1.0.0");
    }
}
