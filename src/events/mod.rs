//! CDC event model
//!
//! This module implements the change-data-capture event model:
//! - Entity and operation tags, opaque identifiers, labels and
//!   relationship types as newtypes
//! - Before/after snapshots for nodes and relationships
//! - Property values deserialized from the producers' JSON wire format

pub mod event;
pub mod property;
pub mod types;

// Re-export main types
pub use event::{NodeChange, Payload, RelationshipChange, TransactionEvent};
pub use property::{to_json_object, PropertyMap, PropertyValue};
pub use types::{EntityType, EventId, Label, OperationType, RelationshipType};
