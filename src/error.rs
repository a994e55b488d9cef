//! Error types for batch transformation
//!
//! All public APIs return `SinkResult<T>`. A failing batch produces no
//! partial output: the first malformed event aborts the whole transform.

use crate::events::{EntityType, EventId, OperationType, TransactionEvent};
use thiserror::Error;

/// Result type for ingestion operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors that can occur while transforming an event batch
#[derive(Error, Debug, PartialEq)]
pub enum SinkError {
    /// The event's operation implies a snapshot that is absent, e.g. a
    /// deleted node without a `before` or a created entity without an
    /// `after`. Raised during transformation, never silently coerced.
    #[error("{operation} {entity} event {id} has no {missing} snapshot")]
    InvalidEventShape {
        entity: EntityType,
        operation: OperationType,
        id: EventId,
        missing: &'static str,
    },

    /// An entity/operation combination the grouping logic does not
    /// recognize. Strategy implementations must raise this instead of
    /// dropping the event.
    #[error("no ingestion rule for {operation} {entity} events")]
    UnsupportedEvent {
        entity: EntityType,
        operation: OperationType,
    },
}

impl SinkError {
    pub(crate) fn missing_snapshot(event: &TransactionEvent, missing: &'static str) -> Self {
        SinkError::InvalidEventShape {
            entity: event.entity_type(),
            operation: event.operation,
            id: event.id().clone(),
            missing,
        }
    }
}
