//! Read-only data sources consulted by decorators.
//!
//! Decorators never own data. They ask these traits for the current snapshot
//! at decoration time, so a refreshed store is picked up on the next pass.

mod file;
mod store;

pub use file::FileSource;
pub use store::SnapshotStore;

use std::sync::Arc;

use crate::data::{AlarmSnapshot, AlertSnapshot, NodeRecord};

/// The alarm registry: which resources have alarms firing.
pub trait AlarmSource: Send + Sync {
    /// Current alarm subscriptions with their counts.
    fn subscribers_with_alarms(&self) -> Arc<AlarmSnapshot>;
}

/// The alert event cache.
pub trait AlertSource: Send + Sync {
    /// Current alert events, per media service.
    fn cached_events(&self) -> Arc<AlertSnapshot>;
}

/// The dashboard's node store.
pub trait NodeLookup: Send + Sync {
    /// Look up a node by resource identifier.
    fn get(&self, id: &str) -> Option<Arc<NodeRecord>>;
}
