//! Node decorators and the registry that dispatches to them.
//!
//! A decorator draws derived status text onto the surface of one node type.
//! The host looks a decorator up by the node's type tag and hands it the
//! node's surface and geometry.

mod mediaconnect_flow;

pub use mediaconnect_flow::{MediaConnectFlowDecorator, MEDIACONNECT_FLOW};

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::ui::DrawingSurface;

/// A decorator for one node type.
pub trait Decorator: Send + Sync {
    /// The node type tag this decorator applies to.
    fn match_type(&self) -> &'static str;

    /// Whether the decoration is display-only, with no interactive affordances.
    fn informational(&self) -> bool;

    /// Draw the decoration for resource `id` onto `surface`.
    fn decorate(
        &self,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        height: u16,
        id: &str,
    ) -> Result<()>;
}

/// Decorators keyed by the node type tag they match.
#[derive(Default)]
pub struct DecoratorRegistry {
    decorators: HashMap<&'static str, Arc<dyn Decorator>>,
}

impl DecoratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decorator under its match type, returning the one it replaced.
    pub fn register(&mut self, decorator: Arc<dyn Decorator>) -> Option<Arc<dyn Decorator>> {
        let match_type = decorator.match_type();
        tracing::debug!(match_type, "registering decorator");
        self.decorators.insert(match_type, decorator)
    }

    pub fn get(&self, type_tag: &str) -> Option<&Arc<dyn Decorator>> {
        self.decorators.get(type_tag)
    }

    /// Registered type tags, sorted.
    pub fn match_types(&self) -> Vec<&'static str> {
        let mut types: Vec<&'static str> = self.decorators.keys().copied().collect();
        types.sort_unstable();
        types
    }

    /// `Some(informational)` for a registered type tag.
    pub fn is_informational(&self, type_tag: &str) -> Option<bool> {
        self.get(type_tag).map(|d| d.informational())
    }

    /// Decorate a node of type `type_tag`.
    ///
    /// Returns `Ok(false)` without touching the surface when no decorator
    /// matches.
    pub fn decorate(
        &self,
        type_tag: &str,
        surface: &mut dyn DrawingSurface,
        font_size: u16,
        width: u16,
        height: u16,
        id: &str,
    ) -> Result<bool> {
        let Some(decorator) = self.get(type_tag) else {
            tracing::trace!(type_tag, id, "no decorator registered");
            return Ok(false);
        };
        decorator.decorate(surface, font_size, width, height, id)?;
        Ok(true)
    }
}

impl std::fmt::Debug for DecoratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoratorRegistry")
            .field("match_types", &self.match_types())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SnapshotStore;
    use crate::ui::{NodeCanvas, TextOverlay, Theme};

    fn registry() -> DecoratorRegistry {
        let store = Arc::new(SnapshotStore::new());
        let tools = Arc::new(TextOverlay::new(Theme::dark()));
        let mut registry = DecoratorRegistry::new();
        registry.register(Arc::new(MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store,
            tools,
        )));
        registry
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = registry();
        assert_eq!(registry.match_types(), vec!["MediaConnect Flow"]);
        assert_eq!(registry.is_informational("MediaConnect Flow"), Some(true));
        assert_eq!(registry.is_informational("MediaLive Channel"), None);
        assert!(registry.get("MediaConnect Flow").is_some());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = registry();
        let store = Arc::new(SnapshotStore::new());
        let replaced = registry.register(Arc::new(MediaConnectFlowDecorator::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(TextOverlay::new(Theme::light())),
        )));
        assert!(replaced.is_some());
        assert_eq!(registry.match_types().len(), 1);
    }

    #[test]
    fn test_dispatch_to_matching_decorator() {
        let registry = registry();
        let mut canvas = NodeCanvas::new(20, 3);

        let handled = registry
            .decorate("MediaConnect Flow", &mut canvas, 10, 20, 3, "arn:flow:1")
            .unwrap();
        assert!(handled);
        assert_eq!(canvas.row_text(0), "Alarms: 0");
    }

    #[test]
    fn test_dispatch_unknown_type_writes_nothing() {
        let registry = registry();
        let mut canvas = NodeCanvas::new(20, 3);

        let handled = registry
            .decorate("MediaLive Channel", &mut canvas, 10, 20, 3, "arn:flow:1")
            .unwrap();
        assert!(!handled);
        assert_eq!(canvas, NodeCanvas::new(20, 3));
    }
}
