//! In-memory snapshot store shared between the loader and the decorators.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{AlarmSource, AlertSource, NodeLookup};
use crate::data::{AlarmSnapshot, AlertSnapshot, DashboardSnapshot, NodeRecord};

/// Holds the current alarm, alert and node snapshots.
///
/// Snapshots are swapped whole, so a reader holding an `Arc` keeps a
/// consistent view for as long as it needs one.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    alarms: RwLock<Arc<AlarmSnapshot>>,
    alerts: RwLock<Arc<AlertSnapshot>>,
    nodes: RwLock<BTreeMap<String, Arc<NodeRecord>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store already holding `snapshot`.
    pub fn from_snapshot(snapshot: DashboardSnapshot) -> Self {
        let store = Self::new();
        store.apply(snapshot);
        store
    }

    pub fn replace_alarms(&self, alarms: AlarmSnapshot) {
        *self.alarms.write() = Arc::new(alarms);
    }

    pub fn replace_alerts(&self, alerts: AlertSnapshot) {
        *self.alerts.write() = Arc::new(alerts);
    }

    /// Insert or replace a node, returning the previous record.
    pub fn upsert_node(&self, node: NodeRecord) -> Option<Arc<NodeRecord>> {
        self.nodes.write().insert(node.id.clone(), Arc::new(node))
    }

    pub fn remove_node(&self, id: &str) -> Option<Arc<NodeRecord>> {
        self.nodes.write().remove(id)
    }

    /// Replace all three snapshots with the contents of `snapshot`.
    pub fn apply(&self, snapshot: DashboardSnapshot) {
        let nodes: BTreeMap<String, Arc<NodeRecord>> = snapshot
            .nodes
            .into_iter()
            .map(|node| (node.id.clone(), Arc::new(node)))
            .collect();

        tracing::debug!(
            alarms = snapshot.alarms.current.len(),
            alerts = snapshot.alerts.current_mediaconnect.len(),
            nodes = nodes.len(),
            "applying dashboard snapshot"
        );

        self.replace_alarms(snapshot.alarms);
        self.replace_alerts(snapshot.alerts);
        *self.nodes.write() = nodes;
    }

    /// All nodes, ordered by id.
    pub fn nodes(&self) -> Vec<Arc<NodeRecord>> {
        self.nodes.read().values().cloned().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }
}

impl AlarmSource for SnapshotStore {
    fn subscribers_with_alarms(&self) -> Arc<AlarmSnapshot> {
        self.alarms.read().clone()
    }
}

impl AlertSource for SnapshotStore {
    fn cached_events(&self) -> Arc<AlertSnapshot> {
        self.alerts.read().clone()
    }
}

impl NodeLookup for SnapshotStore {
    fn get(&self, id: &str) -> Option<Arc<NodeRecord>> {
        self.nodes.read().get(id).cloned()
    }
}
