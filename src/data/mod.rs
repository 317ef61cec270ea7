//! Data models for the three inputs to a flow decoration.
//!
//! ## Submodules
//!
//! - [`alarms`]: alarm registry snapshot ([`AlarmSnapshot`])
//! - [`alerts`]: alert event cache snapshot ([`AlertSnapshot`])
//! - [`node`]: graph store records ([`NodeRecord`]) and source classification
//!   ([`SourceKind`])
//! - [`dashboard`]: the combined file format ([`DashboardSnapshot`])
//!
//! ## Data Flow
//!
//! ```text
//! dashboard.json
//!        │
//!        ▼
//! DashboardSnapshot::load()
//!        │
//!        ├──▶ AlarmSnapshot  ──┐
//!        ├──▶ AlertSnapshot  ──┼──▶ SnapshotStore ──▶ decorators
//!        └──▶ Vec<NodeRecord> ─┘   (SourceKind decided here, flows only)
//! ```

pub mod alarms;
pub mod alerts;
pub mod dashboard;
pub mod node;

pub use alarms::{AlarmSnapshot, AlarmSubscription};
pub use alerts::{AlertEvent, AlertSnapshot};
pub use dashboard::DashboardSnapshot;
pub use node::{NodeRecord, RawNodeRecord, SourceKind, MEDIACONNECT_FLOW};
