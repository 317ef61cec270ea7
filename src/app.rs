//! Application state: the loaded snapshots, the decorator registry and the
//! node canvases drawn from them.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::{NodeRecord, SourceKind};
use crate::overlay::{DecoratorRegistry, MediaConnectFlowDecorator};
use crate::settings::Settings;
use crate::source::{AlarmSource, AlertSource, FileSource, SnapshotStore};
use crate::ui::{NodeCanvas, TextOverlay, Theme};

/// A node together with its freshly decorated canvas.
#[derive(Debug, Clone)]
pub struct DecoratedNode {
    pub node: Arc<NodeRecord>,
    pub canvas: NodeCanvas,
    /// Alarm count drawn on the canvas.
    pub alarms: u64,
}

/// Per-node figures written by `--export`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub alarms: u64,
    pub alerts: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_arn: Option<String>,
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub settings: Settings,
    pub theme: Theme,
    pub load_error: Option<String>,
    pub last_updated: Option<Instant>,
    /// Restrict decoration to a single resource.
    pub node_filter: Option<String>,

    source: FileSource,
    store: Arc<SnapshotStore>,
    registry: DecoratorRegistry,
}

impl App {
    /// Create an app reading from `source`, with the stock decorators registered.
    pub fn new(source: FileSource, settings: Settings) -> Self {
        let theme = Theme::from_choice(settings.theme);
        let tools = Arc::new(
            TextOverlay::new(theme.clone()).with_bold_font_size(settings.bold_font_size),
        );
        let store = Arc::new(SnapshotStore::new());

        let mut registry = DecoratorRegistry::new();
        registry.register(Arc::new(MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store.clone(),
            tools,
        )));

        Self {
            running: true,
            settings,
            theme,
            load_error: None,
            last_updated: None,
            node_filter: None,
            source,
            store,
            registry,
        }
    }

    pub fn with_node_filter(mut self, id: Option<String>) -> Self {
        self.node_filter = id;
        self
    }

    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    pub fn store(&self) -> &Arc<SnapshotStore> {
        &self.store
    }

    pub fn registry(&self) -> &DecoratorRegistry {
        &self.registry
    }

    /// Poll the file source and apply any new snapshot.
    ///
    /// Returns `true` when the store changed. On error the previous
    /// snapshot stays in place and `load_error` is set.
    pub fn reload_data(&mut self) -> bool {
        match self.source.poll() {
            Some(snapshot) => {
                self.store.apply(snapshot);
                self.load_error = None;
                self.last_updated = Some(Instant::now());
                true
            }
            None => {
                self.load_error = self.source.error().map(str::to_string);
                false
            }
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Nodes with a registered decorator, after the node filter.
    fn decoratable_nodes(&self) -> Vec<Arc<NodeRecord>> {
        self.store
            .nodes()
            .into_iter()
            .filter(|node| self.registry.get(&node.title).is_some())
            .filter(|node| self.node_filter.as_deref().is_none_or(|id| node.id == id))
            .collect()
    }

    /// Decorate every matching node onto a fresh canvas.
    pub fn decorated_nodes(&self) -> Result<Vec<DecoratedNode>> {
        let Settings {
            font_size,
            node_width,
            node_height,
            ..
        } = self.settings;
        let alarms = self.store.subscribers_with_alarms();

        self.decoratable_nodes()
            .into_iter()
            .map(|node| {
                let mut canvas = NodeCanvas::new(node_width, node_height);
                self.registry
                    .decorate(
                        &node.title,
                        &mut canvas,
                        font_size,
                        node_width,
                        node_height,
                        &node.id,
                    )
                    .with_context(|| format!("Failed to decorate {}", node.id))?;
                let alarms = alarms.alarm_count_for(&node.id);
                Ok(DecoratedNode {
                    node,
                    canvas,
                    alarms,
                })
            })
            .collect()
    }

    /// Alarm, alert and source figures for every matching node.
    pub fn summaries(&self) -> Vec<NodeSummary> {
        let alarms = self.store.subscribers_with_alarms();
        let alerts = self.store.cached_events();

        self.decoratable_nodes()
            .iter()
            .map(|node| NodeSummary {
                id: node.id.clone(),
                title: node.title.clone(),
                label: node.label.clone(),
                alarms: alarms.alarm_count_for(&node.id),
                alerts: alerts.mediaconnect_alert_count_for(&node.id),
                source_type: node.source_kind.as_ref().map(SourceKind::label),
                entitlement_arn: node
                    .source_kind
                    .as_ref()
                    .and_then(SourceKind::entitlement_arn)
                    .map(str::to_string),
            })
            .collect()
    }
}
