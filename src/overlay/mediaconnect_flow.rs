//! Decoration for MediaConnect flow nodes.
//!
//! Draws the alarm count, the alert count and the flow's source type.

use std::sync::Arc;

use tracing::{debug, trace};

use super::Decorator;
pub use crate::data::MEDIACONNECT_FLOW;
use crate::error::Result;
use crate::source::{AlarmSource, AlertSource, NodeLookup};
use crate::ui::{DrawingSurface, OverlayTools};

/// Decorates MediaConnect flow nodes.
///
/// `height` is accepted to match the decorator contract but no primitive
/// consumes it.
pub struct MediaConnectFlowDecorator {
    alarms: Arc<dyn AlarmSource>,
    alerts: Arc<dyn AlertSource>,
    nodes: Arc<dyn NodeLookup>,
    tools: Arc<dyn OverlayTools>,
}

impl MediaConnectFlowDecorator {
    pub fn new(
        alarms: Arc<dyn AlarmSource>,
        alerts: Arc<dyn AlertSource>,
        nodes: Arc<dyn NodeLookup>,
        tools: Arc<dyn OverlayTools>,
    ) -> Self {
        Self {
            alarms,
            alerts,
            nodes,
            tools,
        }
    }

    /// Draw the summed alarm count for `id`.
    pub fn decorate_alarms(
        &self,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        _height: u16,
        id: &str,
    ) -> Result<()> {
        let alarm_count = self.alarms.subscribers_with_alarms().alarm_count_for(id);
        trace!(id, alarm_count, "decorating alarms");
        self.tools.set_alarm_text(alarm_count, surface, font_size, width)
    }

    /// Draw `Alerts: <n>` for the MediaConnect alerts naming `id`.
    pub fn decorate_alerts(
        &self,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        _height: u16,
        id: &str,
    ) -> Result<()> {
        let alert_count = self.alerts.cached_events().mediaconnect_alert_count_for(id);
        trace!(id, alert_count, "decorating alerts");
        self.tools
            .set_event_text(&format!("Alerts: {}", alert_count), surface, font_size, width)
    }

    /// Draw the source type label.
    ///
    /// Draws nothing when `id` is unknown or names a node that is not a flow.
    pub fn decorate_information(
        &self,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        _height: u16,
        id: &str,
    ) -> Result<()> {
        let Some(node) = self.nodes.get(id) else {
            trace!(id, "node not found, skipping information");
            return Ok(());
        };
        let Some(source_kind) = &node.source_kind else {
            trace!(id, title = %node.title, "not a flow, skipping information");
            return Ok(());
        };
        let source_type = source_kind.label();
        trace!(id, source_type, "decorating information");
        self.tools.set_info_text(source_type, surface, font_size, width)
    }
}

impl Decorator for MediaConnectFlowDecorator {
    fn match_type(&self) -> &'static str {
        MEDIACONNECT_FLOW
    }

    fn informational(&self) -> bool {
        true
    }

    fn decorate(
        &self,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        height: u16,
        id: &str,
    ) -> Result<()> {
        debug!(id, font_size, width, height, "decorating MediaConnect flow");
        self.decorate_alarms(surface, font_size, width, height, id)?;
        self.decorate_alerts(surface, font_size, width, height, id)?;
        self.decorate_information(surface, font_size, width, height, id)
    }
}

impl std::fmt::Debug for MediaConnectFlowDecorator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConnectFlowDecorator")
            .field("match_type", &MEDIACONNECT_FLOW)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        AlarmSnapshot, AlarmSubscription, AlertEvent, AlertSnapshot, DashboardSnapshot, NodeRecord,
    };
    use crate::error::OverlayError;
    use crate::source::SnapshotStore;
    use crate::ui::tools::testing::{RecordingTools, RenderCall};
    use crate::ui::{NodeCanvas, TextOverlay, Theme};
    use serde_json::json;

    const ID: &str = "arn:flow:123";

    fn flow_node(id: &str, source: serde_json::Value) -> NodeRecord {
        NodeRecord::new(id, MEDIACONNECT_FLOW, None, json!({ "Source": source })).unwrap()
    }

    fn scenario_store() -> Arc<SnapshotStore> {
        Arc::new(SnapshotStore::from_snapshot(DashboardSnapshot {
            alarms: AlarmSnapshot::new(vec![
                AlarmSubscription::new(ID, 2),
                AlarmSubscription::new(ID, 1),
                AlarmSubscription::new("other", 5),
            ]),
            alerts: AlertSnapshot::mediaconnect(vec![
                AlertEvent::new(ID),
                AlertEvent::new("other"),
            ]),
            nodes: vec![flow_node(ID, json!({}))],
        }))
    }

    fn recording(store: Arc<SnapshotStore>) -> (MediaConnectFlowDecorator, Arc<RecordingTools>) {
        let tools = Arc::new(RecordingTools::default());
        let decorator =
            MediaConnectFlowDecorator::new(store.clone(), store.clone(), store, tools.clone());
        (decorator, tools)
    }

    #[test]
    fn test_registration_metadata() {
        let (decorator, _) = recording(Arc::new(SnapshotStore::new()));
        assert_eq!(decorator.match_type(), "MediaConnect Flow");
        assert!(decorator.informational());
    }

    #[test]
    fn test_scenario_renders_counts_and_source_type() {
        let (decorator, tools) = recording(scenario_store());
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate(&mut canvas, 12, 24, 3, ID).unwrap();

        assert_eq!(
            tools.calls(),
            vec![
                RenderCall::alarm(3, 12, 24),
                RenderCall::event("Alerts: 1", 12, 24),
                RenderCall::info("Standard", 12, 24),
            ]
        );
    }

    #[test]
    fn test_scenario_on_canvas() {
        let store = scenario_store();
        let decorator = MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(TextOverlay::new(Theme::dark())),
        );
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate(&mut canvas, 12, 24, 3, ID).unwrap();

        assert_eq!(canvas.lines(), vec!["Alarms: 3", "Alerts: 1", "Standard"]);
    }

    #[test]
    fn test_unknown_resource_renders_zero_counts() {
        let (decorator, tools) = recording(scenario_store());
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate(&mut canvas, 10, 24, 3, "arn:flow:missing").unwrap();

        assert_eq!(
            tools.calls(),
            vec![RenderCall::alarm(0, 10, 24), RenderCall::event("Alerts: 0", 10, 24)]
        );
    }

    #[test]
    fn test_empty_store_renders_zero_counts() {
        let (decorator, tools) = recording(Arc::new(SnapshotStore::new()));
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate_alarms(&mut canvas, 10, 24, 3, ID).unwrap();
        decorator.decorate_alerts(&mut canvas, 10, 24, 3, ID).unwrap();

        assert_eq!(
            tools.take(),
            vec![RenderCall::alarm(0, 10, 24), RenderCall::event("Alerts: 0", 10, 24)]
        );
    }

    #[test]
    fn test_entitlement_source() {
        let store = Arc::new(SnapshotStore::new());
        store.upsert_node(flow_node(ID, json!({ "EntitlementArn": "arn:ent:7" })));
        let (decorator, tools) = recording(store);
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate_information(&mut canvas, 10, 24, 3, ID).unwrap();

        assert_eq!(tools.take(), vec![RenderCall::info("Entitlement", 10, 24)]);
    }

    #[test]
    fn test_empty_entitlement_arn_is_standard() {
        let store = Arc::new(SnapshotStore::new());
        store.upsert_node(flow_node(ID, json!({ "EntitlementArn": "" })));
        let (decorator, tools) = recording(store);
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate_information(&mut canvas, 10, 24, 3, ID).unwrap();

        assert_eq!(tools.take(), vec![RenderCall::info("Standard", 10, 24)]);
    }

    #[test]
    fn test_non_flow_node_skips_information() {
        let store = Arc::new(SnapshotStore::new());
        store.upsert_node(
            NodeRecord::new(ID, "MediaLive Channel", None, json!({ "InputAttachments": [] }))
                .unwrap(),
        );
        let (decorator, tools) = recording(store);
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate(&mut canvas, 10, 24, 3, ID).unwrap();

        assert_eq!(
            tools.take(),
            vec![RenderCall::alarm(0, 10, 24), RenderCall::event("Alerts: 0", 10, 24)]
        );
    }

    #[test]
    fn test_missing_node_skips_information() {
        let (decorator, tools) = recording(Arc::new(SnapshotStore::new()));
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate_information(&mut canvas, 10, 24, 3, ID).unwrap();

        assert!(tools.calls().is_empty());
        assert_eq!(canvas, NodeCanvas::new(24, 3));
    }

    #[test]
    fn test_repeated_decorate_is_identical() {
        let store = scenario_store();
        let (decorator, tools) = recording(store.clone());
        let mut canvas = NodeCanvas::new(24, 3);

        decorator.decorate(&mut canvas, 12, 24, 3, ID).unwrap();
        let first = tools.take();
        decorator.decorate(&mut canvas, 12, 24, 3, ID).unwrap();
        let second = tools.take();
        assert_eq!(first, second);

        let themed = MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(TextOverlay::new(Theme::dark())),
        );
        let mut once = NodeCanvas::new(24, 3);
        themed.decorate(&mut once, 12, 24, 3, ID).unwrap();
        let mut twice = once.clone();
        themed.decorate(&mut twice, 12, 24, 3, ID).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_store_refresh_is_seen_on_next_pass() {
        let store = scenario_store();
        let (decorator, tools) = recording(store.clone());
        let mut canvas = NodeCanvas::new(24, 3);

        store.replace_alarms(AlarmSnapshot::new(vec![AlarmSubscription::new(ID, 9)]));
        decorator.decorate_alarms(&mut canvas, 10, 24, 3, ID).unwrap();

        assert_eq!(tools.take(), vec![RenderCall::alarm(9, 10, 24)]);
    }

    #[test]
    fn test_render_failure_stops_decoration() {
        let store = scenario_store();
        let decorator = MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(TextOverlay::new(Theme::dark())),
        );
        // One row: the alarm fits, the event row does not
        let mut canvas = NodeCanvas::new(24, 1);

        let err = decorator.decorate(&mut canvas, 12, 24, 1, ID).unwrap_err();

        assert!(matches!(err, OverlayError::SurfaceTooSmall { row: 1, .. }));
        assert_eq!(canvas.row_text(0), "Alarms: 3");
    }
}
