//! Graph data model
//!
//! Defines the nodes hosted on the canvas and the [`NodeGraph`] container
//! that owns them. The graph owns positions and the selection list; all
//! per-node inspector state lives in [`crate::expansion`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CoreError, Result};

/// Unique identifier for a node on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Closed set of node types the canvas knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NodeKind {
    /// A game/editor object node
    #[default]
    Object,
}

impl NodeKind {
    /// Stable type tag used when wiring renderers and in serialized graphs
    pub fn as_tag(&self) -> &'static str {
        match self {
            NodeKind::Object => "objectNode",
        }
    }

    /// Resolve a type tag back to a kind.
    ///
    /// An unknown tag is a configuration error and is rejected here rather
    /// than silently dropped at render time.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "objectNode" => Ok(NodeKind::Object),
            other => Err(CoreError::UnknownNodeKind(other.to_string())),
        }
    }
}

/// A single node record on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique id
    pub id: NodeId,
    /// Node type tag
    pub kind: NodeKind,
    /// Canvas-space position (top-left of the node body)
    pub position: Vec2,
    /// Display label
    pub label: String,
}

impl GraphNode {
    /// Create a node record
    pub fn new(
        id: impl Into<NodeId>,
        kind: NodeKind,
        position: Vec2,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            label: label.into(),
        }
    }
}

/// Container owning all node records plus the canvas selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeGraph {
    nodes: Vec<GraphNode>,
    #[serde(default)]
    selected: Vec<NodeId>,
}

impl NodeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// The graph every fresh editor session starts with: one "Player"
    /// object node at the origin.
    pub fn initial() -> Self {
        Self {
            nodes: vec![GraphNode::new(
                "Player",
                NodeKind::Object,
                Vec2::ZERO,
                "Player",
            )],
            selected: Vec::new(),
        }
    }

    /// Add a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: GraphNode) -> Result<()> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(CoreError::DuplicateNodeId(node.id.to_string()));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Remove a node, returning the record if it existed.
    ///
    /// The id is also dropped from the selection.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<GraphNode> {
        self.selected.retain(|s| s != id);
        let idx = self.nodes.iter().position(|n| &n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    /// Move a node by a canvas-space delta. This is the only mutation the
    /// canvas surface performs on node records.
    pub fn translate_node(&mut self, id: &NodeId, delta: Vec2) {
        if let Some(node) = self.nodes.iter_mut().find(|n| &n.id == id) {
            node.position += delta;
        }
    }

    /// Look up a node by id
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// All nodes in stable insertion order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Replace the selection, keeping the first occurrence of each id
    pub fn set_selection(&mut self, ids: Vec<NodeId>) {
        self.selected.clear();
        for id in ids {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    /// Add one id to the selection (no-op if already selected)
    pub fn extend_selection(&mut self, id: NodeId) {
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether a node is currently selected
    pub fn is_selected(&self, id: &NodeId) -> bool {
        self.selected.contains(id)
    }

    /// Currently selected ids
    pub fn selected(&self) -> &[NodeId] {
        &self.selected
    }
}
