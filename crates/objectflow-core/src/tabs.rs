//! Inspector tab catalog
//!
//! The closed set of inspector categories a node can open, plus the static
//! [`TabRegistry`] describing them. The registry is read-only after
//! construction; tab *content* (the actual editor surface for a category)
//! is a pluggable unit owned by the UI layer and keyed by [`InspectorTab`].

use serde::{Deserialize, Serialize};

/// One of the fixed inspector categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectorTab {
    /// Event sheet editing
    Events,
    /// Sprite/animation setup
    Sprites,
    /// Physics properties
    Physics,
    /// Variable definitions
    VariableDefinitions,
}

/// Opaque icon reference for a tab row.
///
/// Resolution to an actual glyph or texture is the embedding UI's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabIcon {
    /// Code brackets (Events)
    CodeBracket,
    /// Film strip (Sprites)
    Film,
    /// Lightning bolt (Physics)
    Bolt,
    /// Horizontal sliders (Variable Definitions)
    Adjustments,
}

/// Immutable description of one inspector tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Which category this describes
    pub tab: InspectorTab,
    /// Human-readable row label
    pub display_name: &'static str,
    /// Icon reference for the row
    pub icon: TabIcon,
    /// Whether a content surface exists for this tab. Tabs still under
    /// development carry none and must not open a detail panel.
    pub has_content: bool,
}

/// Static catalog of the available inspector tabs, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    descriptors: [TabDescriptor; 4],
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self {
            descriptors: [
                TabDescriptor {
                    tab: InspectorTab::Events,
                    display_name: "Events",
                    icon: TabIcon::CodeBracket,
                    has_content: true,
                },
                TabDescriptor {
                    tab: InspectorTab::Sprites,
                    display_name: "Sprites",
                    icon: TabIcon::Film,
                    has_content: false,
                },
                TabDescriptor {
                    tab: InspectorTab::Physics,
                    display_name: "Physics",
                    icon: TabIcon::Bolt,
                    has_content: false,
                },
                TabDescriptor {
                    tab: InspectorTab::VariableDefinitions,
                    display_name: "Variable Definitions",
                    icon: TabIcon::Adjustments,
                    has_content: false,
                },
            ],
        }
    }
}

impl TabRegistry {
    /// Create the default catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// All descriptors in stable display order
    pub fn descriptors(&self) -> &[TabDescriptor] {
        &self.descriptors
    }

    /// Descriptor for a tab. Total over the closed enum.
    pub fn descriptor(&self, tab: InspectorTab) -> &TabDescriptor {
        let idx = match tab {
            InspectorTab::Events => 0,
            InspectorTab::Sprites => 1,
            InspectorTab::Physics => 2,
            InspectorTab::VariableDefinitions => 3,
        };
        &self.descriptors[idx]
    }

    /// Whether the given tab has a content surface registered
    pub fn content_available(&self, tab: InspectorTab) -> bool {
        self.descriptor(tab).has_content
    }

    /// Number of tabs in the catalog
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always false for the fixed catalog; kept for API symmetry
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let registry = TabRegistry::default();
        let order: Vec<InspectorTab> = registry.descriptors().iter().map(|d| d.tab).collect();
        assert_eq!(
            order,
            vec![
                InspectorTab::Events,
                InspectorTab::Sprites,
                InspectorTab::Physics,
                InspectorTab::VariableDefinitions,
            ]
        );
    }

    #[test]
    fn test_only_events_has_content() {
        let registry = TabRegistry::default();
        assert!(registry.content_available(InspectorTab::Events));
        assert!(!registry.content_available(InspectorTab::Sprites));
        assert!(!registry.content_available(InspectorTab::Physics));
        assert!(!registry.content_available(InspectorTab::VariableDefinitions));
    }

    #[test]
    fn test_display_names() {
        let registry = TabRegistry::default();
        assert_eq!(
            registry.descriptor(InspectorTab::VariableDefinitions).display_name,
            "Variable Definitions"
        );
        assert_eq!(registry.descriptor(InspectorTab::Events).display_name, "Events");
    }
}
