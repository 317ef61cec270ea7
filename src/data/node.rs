//! Node records from the dashboard's graph store.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{OverlayError, Result};

/// Type tag of MediaConnect flow nodes.
pub const MEDIACONNECT_FLOW: &str = "MediaConnect Flow";

/// Where a flow takes its source from.
///
/// Decided once when the node record is built, from
/// `data.Source.EntitlementArn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The flow ingests directly.
    Standard,
    /// The flow's source is granted by another account through an entitlement.
    Entitlement(String),
}

impl SourceKind {
    /// Classify a node's `data` object.
    ///
    /// Any truthy `EntitlementArn` marks an entitlement source. A missing
    /// `Source` object is a malformed node.
    pub fn from_node_data(id: &str, data: &Value) -> Result<Self> {
        let source = data
            .get("Source")
            .and_then(Value::as_object)
            .ok_or_else(|| OverlayError::MalformedNode {
                id: id.to_string(),
                reason: "data.Source is missing or not an object".to_string(),
            })?;

        let kind = match source.get("EntitlementArn") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => SourceKind::Standard,
            Some(Value::String(arn)) if arn.is_empty() => SourceKind::Standard,
            Some(Value::String(arn)) => SourceKind::Entitlement(arn.clone()),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v == 0.0) => {
                SourceKind::Standard
            }
            Some(other) => SourceKind::Entitlement(other.to_string()),
        };
        Ok(kind)
    }

    /// Label shown on the node.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Standard => "Standard",
            SourceKind::Entitlement(_) => "Entitlement",
        }
    }

    pub fn entitlement_arn(&self) -> Option<&str> {
        match self {
            SourceKind::Standard => None,
            SourceKind::Entitlement(arn) => Some(arn),
        }
    }
}

/// Wire form of a node before classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNodeRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// A node as held by the graph store.
///
/// `title` is the node's type tag (e.g. "MediaConnect Flow") and selects which
/// decorator applies. `source_kind` is only set for MediaConnect flows; other
/// node types keep their `data` as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawNodeRecord")]
pub struct NodeRecord {
    pub id: String,
    pub title: String,
    pub label: Option<String>,
    pub data: Value,
    pub source_kind: Option<SourceKind>,
}

impl NodeRecord {
    /// Build a node record, classifying the source of MediaConnect flows.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        label: Option<String>,
        data: Value,
    ) -> Result<Self> {
        let id = id.into();
        let title = title.into();
        let source_kind = if title == MEDIACONNECT_FLOW {
            Some(SourceKind::from_node_data(&id, &data)?)
        } else {
            None
        };
        Ok(Self {
            id,
            title,
            label,
            data,
            source_kind,
        })
    }

    /// Label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

impl TryFrom<RawNodeRecord> for NodeRecord {
    type Error = OverlayError;

    fn try_from(raw: RawNodeRecord) -> Result<Self> {
        Self::new(raw.id, raw.title, raw.label, raw.data)
    }
}
