//! CDC transaction events
//!
//! One event describes one create/update/delete applied to one node or
//! relationship, with before/after snapshots. Events are read-only inputs:
//! the ingestion strategies never mutate them.
//!
//! Snapshot presence follows the operation:
//! - `created`/`updated`: `after` is present and authoritative
//! - `deleted` node: `before` is present
//! - `deleted` relationship: the identity fields (type, endpoints) suffice
//!
//! An absent *label collection* is a valid "no labels" state and is treated
//! as the empty set; an absent *snapshot* where the operation demands one is
//! an [`InvalidEventShape`](crate::SinkError::InvalidEventShape) error.

use super::property::PropertyMap;
use super::types::{EntityType, EventId, Label, OperationType, RelationshipType};
use crate::error::{SinkError, SinkResult};
use serde::{Deserialize, Serialize};

/// Node snapshot: labels plus the full property bag at that point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeChange {
    /// Labels on the node; `None` and `Some(vec![])` both mean "no labels"
    pub labels: Option<Vec<Label>>,

    /// Properties at snapshot time
    #[serde(default)]
    pub properties: PropertyMap,
}

impl NodeChange {
    pub fn new(labels: Vec<Label>, properties: PropertyMap) -> Self {
        NodeChange {
            labels: Some(labels),
            properties,
        }
    }

    /// Snapshot of a node that carries no labels
    pub fn without_labels(properties: PropertyMap) -> Self {
        NodeChange {
            labels: None,
            properties,
        }
    }

    /// Labels as a slice, treating an absent collection as empty
    pub fn labels(&self) -> &[Label] {
        self.labels.as_deref().unwrap_or(&[])
    }
}

/// Relationship snapshot: the property bag at that point in time
///
/// The relationship's identity (type and endpoint ids) lives on the event
/// payload itself since it is present for every operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipChange {
    #[serde(default)]
    pub properties: PropertyMap,
}

impl RelationshipChange {
    pub fn new(properties: PropertyMap) -> Self {
        RelationshipChange { properties }
    }
}

/// Entity-specific part of an event, tagged by entity type on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entityType")]
pub enum Payload {
    #[serde(rename = "node")]
    Node {
        id: EventId,
        before: Option<NodeChange>,
        after: Option<NodeChange>,
    },
    #[serde(rename = "relationship", rename_all = "camelCase")]
    Relationship {
        id: EventId,
        relationship_type: RelationshipType,
        start_id: EventId,
        end_id: EventId,
        before: Option<RelationshipChange>,
        after: Option<RelationshipChange>,
    },
}

/// One CDC event: an operation applied to a node or relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEvent {
    pub operation: OperationType,
    #[serde(flatten)]
    pub payload: Payload,
}

impl TransactionEvent {
    pub fn node_created(id: impl Into<EventId>, after: NodeChange) -> Self {
        TransactionEvent {
            operation: OperationType::Created,
            payload: Payload::Node {
                id: id.into(),
                before: None,
                after: Some(after),
            },
        }
    }

    pub fn node_updated(id: impl Into<EventId>, before: NodeChange, after: NodeChange) -> Self {
        TransactionEvent {
            operation: OperationType::Updated,
            payload: Payload::Node {
                id: id.into(),
                before: Some(before),
                after: Some(after),
            },
        }
    }

    pub fn node_deleted(id: impl Into<EventId>, before: NodeChange) -> Self {
        TransactionEvent {
            operation: OperationType::Deleted,
            payload: Payload::Node {
                id: id.into(),
                before: Some(before),
                after: None,
            },
        }
    }

    pub fn relationship_created(
        id: impl Into<EventId>,
        relationship_type: impl Into<RelationshipType>,
        start_id: impl Into<EventId>,
        end_id: impl Into<EventId>,
        after: RelationshipChange,
    ) -> Self {
        TransactionEvent {
            operation: OperationType::Created,
            payload: Payload::Relationship {
                id: id.into(),
                relationship_type: relationship_type.into(),
                start_id: start_id.into(),
                end_id: end_id.into(),
                before: None,
                after: Some(after),
            },
        }
    }

    pub fn relationship_updated(
        id: impl Into<EventId>,
        relationship_type: impl Into<RelationshipType>,
        start_id: impl Into<EventId>,
        end_id: impl Into<EventId>,
        before: RelationshipChange,
        after: RelationshipChange,
    ) -> Self {
        TransactionEvent {
            operation: OperationType::Updated,
            payload: Payload::Relationship {
                id: id.into(),
                relationship_type: relationship_type.into(),
                start_id: start_id.into(),
                end_id: end_id.into(),
                before: Some(before),
                after: Some(after),
            },
        }
    }

    pub fn relationship_deleted(
        id: impl Into<EventId>,
        relationship_type: impl Into<RelationshipType>,
        start_id: impl Into<EventId>,
        end_id: impl Into<EventId>,
    ) -> Self {
        TransactionEvent {
            operation: OperationType::Deleted,
            payload: Payload::Relationship {
                id: id.into(),
                relationship_type: relationship_type.into(),
                start_id: start_id.into(),
                end_id: end_id.into(),
                before: None,
                after: None,
            },
        }
    }

    pub fn entity_type(&self) -> EntityType {
        match self.payload {
            Payload::Node { .. } => EntityType::Node,
            Payload::Relationship { .. } => EntityType::Relationship,
        }
    }

    pub fn id(&self) -> &EventId {
        match &self.payload {
            Payload::Node { id, .. } => id,
            Payload::Relationship { id, .. } => id,
        }
    }

    /// Check the snapshot-presence invariants for this event's operation
    ///
    /// The convenience constructors uphold these by construction; events
    /// deserialized from the wire go through this before transformation.
    pub fn validate(&self) -> SinkResult<()> {
        match (&self.payload, self.operation) {
            (Payload::Node { before, .. }, OperationType::Deleted) => {
                if before.is_none() {
                    return Err(SinkError::missing_snapshot(self, "before"));
                }
            }
            (
                Payload::Node { after, .. },
                OperationType::Created | OperationType::Updated,
            ) => {
                if after.is_none() {
                    return Err(SinkError::missing_snapshot(self, "after"));
                }
            }
            (
                Payload::Relationship { after, .. },
                OperationType::Created | OperationType::Updated,
            ) => {
                if after.is_none() {
                    return Err(SinkError::missing_snapshot(self, "after"));
                }
            }
            // identity fields are enforced by the type itself
            (Payload::Relationship { .. }, OperationType::Deleted) => {}
        }
        Ok(())
    }
}
