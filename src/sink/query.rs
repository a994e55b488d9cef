//! Query bundles handed to the execution layer

use serde::Serialize;

/// One parameter map per logical entity in a bundle
pub type ParameterMap = serde_json::Map<String, serde_json::Value>;

/// One templated write statement plus its batched parameter list
///
/// The statement expects a single list-valued variable `$events`; the
/// execution layer binds the parameter maps to it and runs the statement
/// once per bundle (the `UNWIND` prefix iterates the list store-side).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryBundle {
    pub statement: String,
    pub events: Vec<ParameterMap>,
}

impl QueryBundle {
    pub fn new(statement: impl Into<String>, events: Vec<ParameterMap>) -> Self {
        QueryBundle {
            statement: statement.into(),
            events,
        }
    }
}
