//! ObjectFlow Core - Domain Model and State Machines
//!
//! This crate contains the render-free domain model for ObjectFlow:
//! - Graph nodes and the node graph container
//! - Inspector tab catalog
//! - Per-node expansion state machine
//! - Detail panel visibility derivation
//! - Settings and logging configuration
//!
//! Nothing in here depends on a UI toolkit or a clock; every state
//! transition is synchronous and testable in isolation.

#![warn(missing_docs)]

pub use glam::Vec2;
use thiserror::Error;

pub mod expansion;
pub mod logging;
pub mod node;
pub mod presenter;
pub mod state;
pub mod tabs;

pub use expansion::{ExpansionStore, NodeExpansionController, NodeExpansionState};
pub use logging::LogConfig;
pub use node::{GraphNode, NodeGraph, NodeId, NodeKind};
pub use presenter::{DetailPanelPresenter, PanelState, PanelTransition};
pub use state::{AppSettings, EditorState};
pub use tabs::{InspectorTab, TabDescriptor, TabIcon, TabRegistry};

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// A node type tag with no known [`NodeKind`]
    #[error("Unknown node kind: {0}")]
    UnknownNodeKind(String),

    /// A node id that already exists in the graph
    #[error("Duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// I/O failure (log directory handling)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
