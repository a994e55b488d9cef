//! Ingestion strategies: CDC event batches to idempotent write statements
//!
//! Each operation is a pure batch transform over the same input sequence:
//! filter the events it is responsible for, project them to parameter maps,
//! group by the dynamic part of the statement (label delta or relationship
//! type), and emit one [`QueryBundle`] per group. Replaying a batch is safe:
//! every statement merges by the configured identifier property and
//! overwrites properties wholesale.
//!
//! The strategies hold no mutable state; sequencing the four result sets
//! against the store (relationship deletes before node deletes, deletes
//! before merges) is the caller's responsibility.

use super::cypher;
use super::labels::LabelDelta;
use super::query::{ParameterMap, QueryBundle};
use crate::error::{SinkError, SinkResult};
use crate::events::{
    to_json_object, NodeChange, OperationType, Payload, RelationshipType, TransactionEvent,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Batch transformation of CDC events into write statements
///
/// All four operations return an empty list for an empty batch and fail as
/// a whole on the first malformed event; no partial output is produced.
/// Implementations must surface events they cannot classify as
/// [`SinkError::UnsupportedEvent`] rather than dropping them.
pub trait IngestionStrategy {
    /// Node created/updated events, grouped by label delta
    fn merge_node_events(&self, events: &[TransactionEvent]) -> SinkResult<Vec<QueryBundle>>;

    /// Node deleted events, all under one detach-delete statement
    fn delete_node_events(&self, events: &[TransactionEvent]) -> SinkResult<Vec<QueryBundle>>;

    /// Relationship created/updated events, grouped by relationship type
    fn merge_relationship_events(
        &self,
        events: &[TransactionEvent],
    ) -> SinkResult<Vec<QueryBundle>>;

    /// Relationship deleted events, grouped by relationship type
    fn delete_relationship_events(
        &self,
        events: &[TransactionEvent],
    ) -> SinkResult<Vec<QueryBundle>>;
}

/// Naming configuration for [`SourceIdIngestionStrategy`]
///
/// `label_name` is the label applied to every ingested node; `id_name` is
/// the property holding the external identifier. Both are quoted by the
/// strategy before interpolation, so any string is safe here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceIdStrategyConfig {
    pub label_name: String,
    pub id_name: String,
}

impl Default for SourceIdStrategyConfig {
    fn default() -> Self {
        SourceIdStrategyConfig {
            label_name: "SourceEvent".to_string(),
            id_name: "sourceId".to_string(),
        }
    }
}

/// Strategy that keys every entity off a source-assigned identifier
/// property under one generic ingestion label
///
/// Immutable after construction and safe to share across threads; the
/// quoted label and id fragments are computed once.
#[derive(Debug, Clone)]
pub struct SourceIdIngestionStrategy {
    quoted_label: String,
    quoted_id: String,
}

impl Default for SourceIdIngestionStrategy {
    fn default() -> Self {
        SourceIdIngestionStrategy::new(SourceIdStrategyConfig::default())
    }
}

impl SourceIdIngestionStrategy {
    pub fn new(config: SourceIdStrategyConfig) -> Self {
        SourceIdIngestionStrategy {
            quoted_label: cypher::quote(&config.label_name),
            quoted_id: cypher::quote(&config.id_name),
        }
    }

    // `SET x = event.properties` replaces the whole property bag, which
    // also drops the identifier; the follow-up SET writes it back.
    fn overwrite_properties(&self, var: &str) -> String {
        format!(
            "SET {var} = event.properties\nSET {var}.{id} = event.id",
            var = var,
            id = self.quoted_id
        )
    }
}

impl IngestionStrategy for SourceIdIngestionStrategy {
    fn merge_node_events(&self, events: &[TransactionEvent]) -> SinkResult<Vec<QueryBundle>> {
        let mut groups: IndexMap<LabelDelta, Vec<ParameterMap>> = IndexMap::new();
        for event in events {
            let Payload::Node { id, before, after } = &event.payload else {
                continue;
            };
            if event.operation == OperationType::Deleted {
                continue;
            }
            let after = after
                .as_ref()
                .ok_or_else(|| SinkError::missing_snapshot(event, "after"))?;
            let before_labels = before.as_ref().map(NodeChange::labels).unwrap_or(&[]);
            let delta = LabelDelta::between(before_labels, after.labels());

            let mut params = ParameterMap::new();
            params.insert("id".to_string(), id.into());
            params.insert("properties".to_string(), to_json_object(&after.properties));
            groups.entry(delta).or_default().push(params);
        }
        debug!(
            "batched {} events into {} node merge group(s)",
            events.len(),
            groups.len()
        );

        Ok(groups
            .into_iter()
            .map(|(delta, batch)| {
                let mut statement = format!(
                    "{unwind}\nMERGE (n:{label}{{{id}: event.id}})\n{set}",
                    unwind = cypher::UNWIND,
                    label = self.quoted_label,
                    id = self.quoted_id,
                    set = self.overwrite_properties("n"),
                );
                if !delta.to_delete.is_empty() {
                    statement.push_str(&format!(
                        "\nREMOVE n:{}",
                        cypher::labels_as_string(&delta.to_delete)
                    ));
                }
                if !delta.to_add.is_empty() {
                    statement.push_str(&format!(
                        "\nSET n:{}",
                        cypher::labels_as_string(&delta.to_add)
                    ));
                }
                QueryBundle::new(statement, batch)
            })
            .collect())
    }

    fn delete_node_events(&self, events: &[TransactionEvent]) -> SinkResult<Vec<QueryBundle>> {
        let mut data = Vec::new();
        for event in events {
            let Payload::Node { id, before, .. } = &event.payload else {
                continue;
            };
            if event.operation != OperationType::Deleted {
                continue;
            }
            if before.is_none() {
                return Err(SinkError::missing_snapshot(event, "before"));
            }
            let mut params = ParameterMap::new();
            params.insert("id".to_string(), id.into());
            data.push(params);
        }
        if data.is_empty() {
            return Ok(Vec::new());
        }
        debug!("batched {} node delete event(s)", data.len());

        let statement = format!(
            "{unwind} MATCH (n:{label}{{{id}: event.id}}) DETACH DELETE n",
            unwind = cypher::UNWIND,
            label = self.quoted_label,
            id = self.quoted_id,
        );
        Ok(vec![QueryBundle::new(statement, data)])
    }

    fn merge_relationship_events(
        &self,
        events: &[TransactionEvent],
    ) -> SinkResult<Vec<QueryBundle>> {
        let mut groups: IndexMap<RelationshipType, Vec<ParameterMap>> = IndexMap::new();
        for event in events {
            let Payload::Relationship {
                id,
                relationship_type,
                start_id,
                end_id,
                before,
                after,
            } = &event.payload
            else {
                continue;
            };
            if event.operation == OperationType::Deleted {
                continue;
            }
            // before is authoritative only for deletes, which the filter
            // above already excluded
            let change = match event.operation {
                OperationType::Deleted => before.as_ref(),
                _ => after.as_ref(),
            }
            .ok_or_else(|| SinkError::missing_snapshot(event, "after"))?;

            let mut params = ParameterMap::new();
            params.insert("id".to_string(), id.into());
            params.insert("start".to_string(), start_id.into());
            params.insert("end".to_string(), end_id.into());
            params.insert("properties".to_string(), to_json_object(&change.properties));
            groups
                .entry(relationship_type.clone())
                .or_default()
                .push(params);
        }
        debug!(
            "batched {} events into {} relationship merge group(s)",
            events.len(),
            groups.len()
        );

        Ok(groups
            .into_iter()
            .map(|(rel_type, batch)| {
                let statement = format!(
                    "{unwind}\nMERGE (start:{label}{{{id}: event.start}})\nMERGE (end:{label}{{{id}: event.end}})\nMERGE (start)-[r:{rel}{{{id}: event.id}}]->(end)\n{set}",
                    unwind = cypher::UNWIND,
                    label = self.quoted_label,
                    id = self.quoted_id,
                    rel = cypher::quote(rel_type.as_str()),
                    set = self.overwrite_properties("r"),
                );
                QueryBundle::new(statement, batch)
            })
            .collect())
    }

    fn delete_relationship_events(
        &self,
        events: &[TransactionEvent],
    ) -> SinkResult<Vec<QueryBundle>> {
        let mut groups: IndexMap<RelationshipType, Vec<ParameterMap>> = IndexMap::new();
        for event in events {
            let Payload::Relationship {
                id,
                relationship_type,
                ..
            } = &event.payload
            else {
                continue;
            };
            if event.operation != OperationType::Deleted {
                continue;
            }
            let mut params = ParameterMap::new();
            params.insert("id".to_string(), id.into());
            groups
                .entry(relationship_type.clone())
                .or_default()
                .push(params);
        }
        debug!(
            "batched {} events into {} relationship delete group(s)",
            events.len(),
            groups.len()
        );

        Ok(groups
            .into_iter()
            .map(|(rel_type, batch)| {
                let statement = format!(
                    "{unwind} MATCH ()-[r:{rel}{{{id}: event.id}}]-() DELETE r",
                    unwind = cypher::UNWIND,
                    rel = cypher::quote(rel_type.as_str()),
                    id = self.quoted_id,
                );
                QueryBundle::new(statement, batch)
            })
            .collect())
    }
}
