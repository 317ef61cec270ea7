//! Alert event cache snapshot types.

use serde::{Deserialize, Serialize};

/// A single media service alert captured by the event pipeline.
///
/// Only `resource_arn` is required; the remaining fields are carried for
/// display and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub resource_arn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_id: Option<String>,

    /// "set" or "cleared".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_state: Option<String>,

    #[serde(
        rename = "detail-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub detail_type: Option<String>,

    /// Seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl AlertEvent {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            alarm_id: None,
            alarm_state: None,
            detail_type: None,
            timestamp: None,
        }
    }
}

/// Point-in-time view of the alert cache, split by media service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSnapshot {
    #[serde(default)]
    pub current_mediaconnect: Vec<AlertEvent>,
    #[serde(default)]
    pub current_medialive: Vec<AlertEvent>,
}

impl AlertSnapshot {
    pub fn mediaconnect(events: Vec<AlertEvent>) -> Self {
        Self {
            current_mediaconnect: events,
            current_medialive: Vec::new(),
        }
    }

    /// Number of MediaConnect alert events naming `resource_arn`.
    ///
    /// Every record counts once, whatever its state.
    pub fn mediaconnect_alert_count_for(&self, resource_arn: &str) -> usize {
        self.current_mediaconnect
            .iter()
            .filter(|event| event.resource_arn == resource_arn)
            .count()
    }
}
