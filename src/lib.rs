//! # flow-overlay
//!
//! Status decorations for MediaConnect flow nodes on a media monitoring
//! dashboard.
//!
//! For each flow node the decorator draws three short labels onto the
//! node's canvas: the number of alarms firing for the flow, the number of
//! MediaConnect alerts raised against it, and whether its source is a
//! standard source or an entitlement granted by another account.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  source                    overlay                    ui     │
//! │ ┌─────────────┐  Arc    ┌──────────────┐  &mut dyn ┌───────┐ │
//! │ │SnapshotStore│───────▶│  Decorator   │──────────▶│Drawing│ │
//! │ │ (alarms,    │        │ (registry by │  via      │Surface│ │
//! │ │  alerts,    │        │  type tag)   │ Overlay-  │       │ │
//! │ │  nodes)     │        └──────────────┘ Tools     └───────┘ │
//! │ └──────▲──────┘                                              │
//! │        │ apply()                                             │
//! │ ┌──────┴──────┐                                              │
//! │ │ FileSource  │◀── dashboard.json                            │
//! │ └─────────────┘                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: snapshot types and node records with their [`SourceKind`]
//! - **[`source`]**: the read-only source traits, [`SnapshotStore`] and [`FileSource`]
//! - **[`overlay`]**: the [`Decorator`] trait, [`DecoratorRegistry`] and
//!   [`MediaConnectFlowDecorator`]
//! - **[`ui`]**: [`DrawingSurface`], [`NodeCanvas`], [`OverlayTools`] and the board
//! - **[`app`]** / **[`settings`]**: the CLI host
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use flow_overlay::{
//!     AlarmSnapshot, AlarmSubscription, Decorator, MediaConnectFlowDecorator, NodeCanvas,
//!     NodeRecord, SnapshotStore, TextOverlay, Theme,
//! };
//!
//! let store = Arc::new(SnapshotStore::new());
//! store.replace_alarms(AlarmSnapshot::new(vec![AlarmSubscription::new("arn:flow:1", 2)]));
//! store.upsert_node(
//!     NodeRecord::new(
//!         "arn:flow:1",
//!         "MediaConnect Flow",
//!         None,
//!         serde_json::json!({ "Source": {} }),
//!     )
//!     .unwrap(),
//! );
//!
//! let decorator = MediaConnectFlowDecorator::new(
//!     store.clone(),
//!     store.clone(),
//!     store,
//!     Arc::new(TextOverlay::new(Theme::dark())),
//! );
//!
//! let mut canvas = NodeCanvas::new(24, 3);
//! decorator.decorate(&mut canvas, 14, 24, 3, "arn:flow:1").unwrap();
//! assert_eq!(canvas.lines(), vec!["Alarms: 2", "Alerts: 0", "Standard"]);
//! ```

pub mod app;
pub mod data;
pub mod error;
pub mod events;
pub mod overlay;
pub mod settings;
pub mod source;
pub mod ui;

pub use app::{App, DecoratedNode, NodeSummary};
pub use data::{
    AlarmSnapshot, AlarmSubscription, AlertEvent, AlertSnapshot, DashboardSnapshot, NodeRecord,
    SourceKind,
};
pub use error::{OverlayError, Result};
pub use overlay::{Decorator, DecoratorRegistry, MediaConnectFlowDecorator, MEDIACONNECT_FLOW};
pub use settings::Settings;
pub use source::{AlarmSource, AlertSource, FileSource, NodeLookup, SnapshotStore};
pub use ui::{DrawingSurface, NodeCanvas, OverlayTools, TextOverlay, TextSlot, Theme, ThemeChoice};
