//! Application state definitions
//!
//! Serializable wrappers around the graph and the application settings,
//! so the shell can persist a session later. Persistence wiring itself is
//! out of scope here.

use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;
use crate::node::NodeGraph;

/// Global editor state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorState {
    /// Project name
    pub name: String,
    /// Project format version
    pub version: String,
    /// The node graph on the canvas
    pub graph: NodeGraph,
    /// Application settings
    #[serde(default)]
    pub settings: AppSettings,
    /// Dirty flag (has changes?) - not serialized
    #[serde(skip)]
    pub dirty: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            name: "Untitled Project".to_string(),
            version: "0.1.0".to_string(),
            graph: NodeGraph::initial(),
            settings: AppSettings::default(),
            dirty: false,
        }
    }
}

impl EditorState {
    /// Create a fresh editor state with a project name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Application settings persisted alongside the project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Dark mode toggle
    pub dark_mode: bool,
    /// UI scale factor
    pub ui_scale: f32,
    /// Logging configuration
    #[serde(default)]
    pub log_config: LogConfig,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            ui_scale: 1.0,
            log_config: LogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;

    #[test]
    fn test_editor_state_defaults() {
        let state = EditorState::default();
        assert_eq!(state.name, "Untitled Project");
        assert!(!state.dirty);
        assert_eq!(state.graph.len(), 1);
        assert!(state.graph.node(&NodeId::new("Player")).is_some());
    }

    #[test]
    fn test_app_settings_defaults() {
        let settings = AppSettings::default();
        assert!(!settings.dark_mode);
        assert_eq!(settings.ui_scale, 1.0);
        assert!(settings.log_config.console_output);
    }

    #[test]
    fn test_state_serialization_roundtrip() {
        let mut state = EditorState::new("Level One");
        state.dirty = true;
        let json = serde_json::to_string(&state).unwrap();
        let restored: EditorState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, "Level One");
        assert_eq!(restored.graph, state.graph);
        // Dirty flag is transient
        assert!(!restored.dirty);
    }
}
