//! ObjectFlow UI - egui presentation layer
//!
//! Hosts the node graph on a pannable/zoomable canvas and renders each
//! node through a per-kind renderer. All logical state lives in
//! `objectflow-core`; this crate only draws it and feeds interactions
//! back into the controllers.

pub mod content;
pub mod object_node;
pub mod surface;
pub mod theme;

pub use content::{ContentRegistry, EventsContent, TabContent};
pub use object_node::{
    NodeRenderArgs, NodeRenderer, NodeRendererRegistry, NodeResponse, ObjectNodeRenderer,
};
pub use surface::GraphSurface;
pub use theme::{Theme, ThemeConfig};

use objectflow_core::InspectorTab;
use thiserror::Error;

/// UI configuration errors, surfaced at construction time
#[derive(Error, Debug)]
pub enum UiError {
    /// The graph contains a node kind with no registered renderer
    #[error("No renderer registered for node kind '{0}'")]
    UnknownNodeKind(String),

    /// The catalog marks a tab content-bearing but no content is registered
    #[error("Tab {0:?} is marked content-bearing but no content is registered")]
    MissingContent(InspectorTab),

    /// Content is registered for a tab the catalog marks content-less
    #[error("Tab {0:?} has registered content but the catalog marks it content-less")]
    UnexpectedContent(InspectorTab),

    /// A domain error bubbled up from the core model
    #[error(transparent)]
    Core(#[from] objectflow_core::CoreError),
}
