//! Pluggable tab content
//!
//! Each inspector tab may carry a content surface rendered into the
//! detail panel. Content units are zero-argument renderables; the host
//! never inspects their internals. The [`ContentRegistry`] is built in
//! lockstep with the core [`TabRegistry`] and validated at construction
//! so a mismatch fails fast instead of surfacing as an empty panel.

use egui::Ui;
use std::collections::HashMap;

use objectflow_core::{InspectorTab, TabRegistry};

use crate::UiError;

/// A renderable content surface for one inspector tab
pub trait TabContent {
    /// Draw the tab's content into the detail panel
    fn ui(&mut self, ui: &mut Ui);
}

/// The Events tab content. The actual event sheet editor is future work;
/// for now this is the placeholder surface.
#[derive(Debug, Default)]
pub struct EventsContent;

impl TabContent for EventsContent {
    fn ui(&mut self, ui: &mut Ui) {
        ui.label("Events");
    }
}

/// Maps content-bearing tabs to their renderable surfaces
#[derive(Default)]
pub struct ContentRegistry {
    renderers: HashMap<InspectorTab, Box<dyn TabContent>>,
}

impl ContentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry matching the default tab catalog: Events only
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(InspectorTab::Events, Box::new(EventsContent));
        registry
    }

    /// Register (or replace) the content surface for a tab
    pub fn register(&mut self, tab: InspectorTab, content: Box<dyn TabContent>) {
        self.renderers.insert(tab, content);
    }

    /// Whether a tab has a registered content surface
    pub fn contains(&self, tab: InspectorTab) -> bool {
        self.renderers.contains_key(&tab)
    }

    /// Mutable access to a tab's content surface
    pub fn get_mut(&mut self, tab: InspectorTab) -> Option<&mut (dyn TabContent + '_)> {
        self.renderers.get_mut(&tab).map(|b| &mut **b as &mut (dyn TabContent + '_))
    }

    /// Check this registry against the tab catalog: every content-bearing
    /// tab must have a surface here, and nothing may be registered for a
    /// content-less tab.
    pub fn validate(&self, catalog: &TabRegistry) -> Result<(), UiError> {
        for descriptor in catalog.descriptors() {
            let registered = self.contains(descriptor.tab);
            if descriptor.has_content && !registered {
                return Err(UiError::MissingContent(descriptor.tab));
            }
            if !descriptor.has_content && registered {
                return Err(UiError::UnexpectedContent(descriptor.tab));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_catalog() {
        let registry = ContentRegistry::with_defaults();
        assert!(registry.validate(&TabRegistry::default()).is_ok());
    }

    #[test]
    fn test_missing_content_rejected() {
        let registry = ContentRegistry::new();
        let result = registry.validate(&TabRegistry::default());
        assert!(matches!(
            result,
            Err(UiError::MissingContent(InspectorTab::Events))
        ));
    }

    #[test]
    fn test_unexpected_content_rejected() {
        let mut registry = ContentRegistry::with_defaults();
        registry.register(InspectorTab::Physics, Box::new(EventsContent));
        let result = registry.validate(&TabRegistry::default());
        assert!(matches!(
            result,
            Err(UiError::UnexpectedContent(InspectorTab::Physics))
        ));
    }
}
