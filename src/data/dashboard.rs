//! Combined dashboard snapshot, the on-disk format read by the CLI.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{AlarmSnapshot, AlertSnapshot, NodeRecord};
use crate::error::Result;

/// Everything needed to decorate a set of nodes, captured at one point in time.
///
/// Every section is optional and defaults to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub alarms: AlarmSnapshot,
    #[serde(default)]
    pub alerts: AlertSnapshot,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
}

impl DashboardSnapshot {
    /// Load and parse a dashboard snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a dashboard snapshot from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
