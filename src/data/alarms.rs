//! Alarm registry snapshot types.

use serde::{Deserialize, Serialize};

/// A resource subscribed to one or more alarms, with the number currently firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSubscription {
    #[serde(rename = "ResourceArn")]
    pub resource_arn: String,
    #[serde(rename = "AlarmCount")]
    pub alarm_count: u64,
}

impl AlarmSubscription {
    pub fn new(resource_arn: impl Into<String>, alarm_count: u64) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            alarm_count,
        }
    }
}

/// Point-in-time view of alarm subscriptions as published by the alarm registry.
///
/// Several records may name the same resource (one per subscribed alarm group);
/// their counts add up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSnapshot {
    #[serde(default)]
    pub current: Vec<AlarmSubscription>,
}

impl AlarmSnapshot {
    pub fn new(current: Vec<AlarmSubscription>) -> Self {
        Self { current }
    }

    /// Total alarm count across every record for `resource_arn`.
    ///
    /// Unknown resources and empty snapshots yield 0. The total saturates at
    /// `u64::MAX`.
    pub fn alarm_count_for(&self, resource_arn: &str) -> u64 {
        self.current
            .iter()
            .filter(|item| item.resource_arn == resource_arn)
            .map(|item| item.alarm_count)
            .fold(0u64, u64::saturating_add)
    }
}
