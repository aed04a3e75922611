//! Object node rendering
//!
//! One [`ObjectNodeRenderer`] draws a single graph node: the collapsed or
//! expanded body, the tab rows, the header controls, and the detail panel
//! beside the body. Logical state changes go straight into the node's
//! [`NodeExpansionController`]; only the visuals are animated, over a
//! fixed short duration, and an animation never gates a transition.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Ui};
use std::collections::HashMap;

use objectflow_core::{
    DetailPanelPresenter, GraphNode, InspectorTab, NodeExpansionController, NodeId, NodeKind,
    TabIcon, TabRegistry,
};

use crate::content::ContentRegistry;
use crate::theme::colors;
use crate::UiError;

/// Node body width in canvas units
pub const NODE_WIDTH: f32 = 208.0;
/// Body height while collapsed
pub const COLLAPSED_HEIGHT: f32 = 64.0;
/// Body height while expanded
pub const EXPANDED_HEIGHT: f32 = 266.0;
/// Detail panel edge length
pub const PANEL_SIZE: f32 = 208.0;
/// Gap between body and detail panel
pub const PANEL_GAP: f32 = 18.0;
/// Horizontal travel of the panel's enter/leave slide
pub const PANEL_SLIDE_OFFSET: f32 = 64.0;
/// Duration of every visual transition, in seconds
pub const TRANSITION_SECONDS: f32 = 0.15;

const HEADER_HEIGHT: f32 = 64.0;
const ROW_HEIGHT: f32 = 36.0;
const AI_ROW_HEIGHT: f32 = 32.0;

/// Everything a node renderer needs for one frame of one node
pub struct NodeRenderArgs<'a> {
    /// The node record being drawn
    pub node: &'a GraphNode,
    /// Screen-space position of the body's top-left corner
    pub origin: Pos2,
    /// Current canvas zoom
    pub zoom: f32,
    /// Whether the node is in the canvas selection
    pub selected: bool,
    /// The node's expansion state machine
    pub controller: &'a mut NodeExpansionController,
    /// The node's detail panel presenter
    pub presenter: &'a mut DetailPanelPresenter,
    /// The inspector tab catalog
    pub catalog: &'a TabRegistry,
    /// Registered tab content surfaces
    pub content: &'a mut ContentRegistry,
}

/// What the surface needs back from a rendered node
#[derive(Debug, Clone, Copy)]
pub struct NodeResponse {
    /// Screen rect of the node body this frame (hit testing, box select)
    pub body_rect: Rect,
    /// Screen rect of the detail panel while it is shown or still
    /// animating out; part of the node for canvas hit testing
    pub panel_rect: Option<Rect>,
    /// Primary click landed on the body
    pub clicked: bool,
    /// The body is being dragged with the primary button
    pub dragged: bool,
    /// Screen-space drag delta for this frame
    pub drag_delta: egui::Vec2,
    /// The close control was activated
    pub close_requested: bool,
}

/// A visual+interactive unit for one kind of graph node
pub trait NodeRenderer {
    /// Draw one node and report its interactions
    fn show(&mut self, ui: &mut Ui, args: NodeRenderArgs<'_>) -> NodeResponse;

    /// Drop any per-node bookkeeping for a node that left the graph
    fn forget(&mut self, _id: &NodeId) {}
}

/// Screen rect of the detail panel for a given body rect and transition
/// progress (1.0 = fully entered)
pub fn detail_panel_rect(body_rect: Rect, zoom: f32, progress: f32) -> Rect {
    let slide = -(1.0 - progress) * PANEL_SLIDE_OFFSET * zoom;
    let scale = 0.95 + 0.05 * progress;
    Rect::from_min_size(
        Pos2::new(body_rect.max.x + PANEL_GAP * zoom + slide, body_rect.min.y),
        egui::Vec2::splat(PANEL_SIZE * zoom * scale),
    )
}

/// Callback invoked when a node's close control is activated
pub type CloseHandler = Box<dyn FnMut(&NodeId)>;

/// Renderer for [`NodeKind::Object`] nodes
#[derive(Default)]
pub struct ObjectNodeRenderer {
    /// What closing a node means is not defined yet; hosts can hook it.
    on_close: Option<CloseHandler>,
    /// Tab shown while a panel's leave transition finishes playing
    leaving_tabs: HashMap<NodeId, InspectorTab>,
}

impl ObjectNodeRenderer {
    /// Create a renderer with the close control unwired
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a close handler
    pub fn with_on_close(mut self, handler: CloseHandler) -> Self {
        self.on_close = Some(handler);
        self
    }

    fn icon_glyph(icon: TabIcon) -> &'static str {
        match icon {
            TabIcon::CodeBracket => "</>",
            TabIcon::Film => "▣",
            TabIcon::Bolt => "⚡",
            TabIcon::Adjustments => "☰",
        }
    }

    fn corner(zoom: f32) -> CornerRadius {
        CornerRadius::same((6.0 * zoom) as u8)
    }

    fn draw_header(&self, ui: &Ui, args: &NodeRenderArgs<'_>, body_rect: Rect) {
        let zoom = args.zoom;
        let painter = ui.painter().with_clip_rect(body_rect);

        // Avatar placeholder; real sprite textures are resolved by the host
        let avatar = Rect::from_min_size(
            body_rect.min + egui::vec2(8.0, 8.0) * zoom,
            egui::Vec2::splat(48.0 * zoom),
        );
        painter.rect_filled(avatar, Self::corner(zoom), colors::AVATAR_BG);
        let initial = args.node.label.chars().next().unwrap_or('?');
        painter.text(
            avatar.center(),
            Align2::CENTER_CENTER,
            initial,
            FontId::proportional(22.0 * zoom),
            colors::ACCENT_TEXT,
        );

        let text_x = body_rect.min.x + 64.0 * zoom;
        painter.text(
            Pos2::new(text_x, body_rect.min.y + 26.0 * zoom),
            Align2::LEFT_CENTER,
            &args.node.label,
            FontId::proportional(14.0 * zoom),
            colors::TEXT_PRIMARY,
        );
        painter.text(
            Pos2::new(text_x, body_rect.min.y + 42.0 * zoom),
            Align2::LEFT_CENTER,
            "Object",
            FontId::proportional(11.0 * zoom),
            colors::TEXT_SUBTLE,
        );
    }

    /// Minimize and close controls, present only while expanded
    fn draw_header_controls(
        &mut self,
        ui: &mut Ui,
        args: &mut NodeRenderArgs<'_>,
        id: egui::Id,
        body_rect: Rect,
    ) -> bool {
        let zoom = args.zoom;
        let mut close_requested = false;
        let button_size = egui::Vec2::splat(22.0 * zoom);

        for (idx, glyph) in ["−", "✕"].iter().enumerate() {
            let rect = Rect::from_min_size(
                Pos2::new(
                    body_rect.max.x - (56.0 - 26.0 * idx as f32) * zoom,
                    body_rect.min.y + 8.0 * zoom,
                ),
                button_size,
            );
            let response = ui.interact(rect, id.with(("header_control", idx)), Sense::click());
            let painter = ui.painter();
            if response.hovered() {
                painter.rect_filled(rect, Self::corner(zoom), colors::NODE_BODY_HOVER);
            }
            let color = if response.hovered() {
                colors::ICON_GREY_HOVER
            } else {
                colors::ICON_GREY
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                *glyph,
                FontId::proportional(14.0 * zoom),
                color,
            );

            if response.clicked() {
                if idx == 0 {
                    args.controller.request_collapse();
                } else {
                    // Close never touches expand/select; its effect is the
                    // host's decision.
                    close_requested = true;
                    if let Some(handler) = &mut self.on_close {
                        handler(&args.node.id);
                    }
                }
            }
        }
        close_requested
    }

    /// The revealed section of the expanded body: action row plus one row
    /// per catalog tab, fading in and out with `reveal`.
    fn draw_expanded_section(
        &self,
        ui: &mut Ui,
        args: &mut NodeRenderArgs<'_>,
        id: egui::Id,
        body_rect: Rect,
        reveal: f32,
    ) {
        let zoom = args.zoom;
        let expanded = args.controller.is_expanded();
        let painter = ui.painter().with_clip_rect(body_rect);
        let left = body_rect.min.x;
        let width = body_rect.width();
        let mut y = body_rect.min.y + (HEADER_HEIGHT + 4.0) * zoom;

        let separator = |painter: &egui::Painter, y: f32| {
            painter.line_segment(
                [Pos2::new(left, y), Pos2::new(left + width, y)],
                Stroke::new(1.0, colors::SEPARATOR.gamma_multiply(reveal)),
            );
        };

        separator(&painter, y);
        y += 4.0 * zoom;

        // "Edit with AI" action row: stateless, purely decorative for now
        let ai_rect = Rect::from_min_size(
            Pos2::new(left + 4.0 * zoom, y),
            egui::vec2(width - 8.0 * zoom, AI_ROW_HEIGHT * zoom),
        );
        let ai_response = ui.interact(ai_rect, id.with("ai_row"), Sense::click());
        if ai_response.hovered() && expanded {
            painter.rect_filled(
                ai_rect,
                Self::corner(zoom),
                colors::ACCENT_ROW_BG.gamma_multiply(reveal),
            );
        }
        painter.text(
            Pos2::new(ai_rect.min.x + 10.0 * zoom, ai_rect.center().y),
            Align2::LEFT_CENTER,
            "✨",
            FontId::proportional(13.0 * zoom),
            colors::ACCENT_ICON.gamma_multiply(reveal),
        );
        painter.text(
            Pos2::new(ai_rect.min.x + 32.0 * zoom, ai_rect.center().y),
            Align2::LEFT_CENTER,
            "Edit with AI",
            FontId::proportional(13.0 * zoom),
            colors::ACCENT_TEXT.gamma_multiply(reveal),
        );
        y += (AI_ROW_HEIGHT + 4.0) * zoom;

        separator(&painter, y);
        y += 4.0 * zoom;

        // One row per catalog tab, in fixed catalog order
        for descriptor in args.catalog.descriptors() {
            let row_rect = Rect::from_min_size(
                Pos2::new(left + 4.0 * zoom, y),
                egui::vec2(width - 8.0 * zoom, ROW_HEIGHT * zoom),
            );
            let response = ui.interact(
                row_rect,
                id.with(("tab_row", descriptor.display_name)),
                Sense::click(),
            );
            let active = args.controller.active_tab() == Some(descriptor.tab);

            if active || (response.hovered() && expanded) {
                painter.rect_filled(
                    row_rect,
                    Self::corner(zoom),
                    colors::ROW_ACTIVE_BG.gamma_multiply(reveal),
                );
            }
            let icon_color = if active {
                colors::TEXT_ROW
            } else if response.hovered() {
                colors::ICON_GREY_HOVER
            } else {
                colors::ICON_GREY
            };
            let text_color = if active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_ROW
            };
            painter.text(
                Pos2::new(row_rect.min.x + 10.0 * zoom, row_rect.center().y),
                Align2::LEFT_CENTER,
                Self::icon_glyph(descriptor.icon),
                FontId::proportional(12.0 * zoom),
                icon_color.gamma_multiply(reveal),
            );
            painter.text(
                Pos2::new(row_rect.min.x + 36.0 * zoom, row_rect.center().y),
                Align2::LEFT_CENTER,
                descriptor.display_name,
                FontId::proportional(12.5 * zoom),
                text_color.gamma_multiply(reveal),
            );

            // Row clicks are gated by visibility; the controller is safe
            // against stray calls regardless.
            if response.clicked() && expanded {
                args.controller.select_tab(descriptor.tab);
            }
            y += ROW_HEIGHT * zoom;
        }
    }

    fn draw_panel(
        &mut self,
        ui: &mut Ui,
        content: &mut ContentRegistry,
        body_rect: Rect,
        panel_rect: Rect,
        zoom: f32,
        tab: InspectorTab,
        progress: f32,
    ) {
        let painter = ui.painter();

        // Thin frosted strip between body and panel
        let strip = Rect::from_min_max(
            Pos2::new(body_rect.max.x + 2.0 * zoom, body_rect.min.y),
            Pos2::new(
                body_rect.max.x + (PANEL_GAP - 2.0) * zoom,
                body_rect.min.y + PANEL_SIZE * zoom,
            ),
        );
        painter.rect_filled(
            strip,
            0.0,
            Color32::from_white_alpha((140.0 * progress) as u8),
        );

        painter.rect_filled(
            panel_rect.translate(egui::vec2(0.0, 3.0 * zoom)),
            Self::corner(zoom),
            colors::NODE_SHADOW.gamma_multiply(progress),
        );
        painter.rect_filled(
            panel_rect,
            Self::corner(zoom),
            colors::NODE_BODY.gamma_multiply(progress),
        );
        painter.rect_stroke(
            panel_rect,
            Self::corner(zoom),
            Stroke::new(1.0, colors::NODE_RING.gamma_multiply(progress)),
            StrokeKind::Inside,
        );

        if let Some(surface) = content.get_mut(tab) {
            let inner = panel_rect.shrink(10.0 * zoom);
            let mut child = ui.new_child(
                egui::UiBuilder::new()
                    .max_rect(inner)
                    .layout(egui::Layout::top_down(egui::Align::Min)),
            );
            child.set_clip_rect(panel_rect);
            child.set_opacity(progress);
            surface.ui(&mut child);
        }
    }
}

impl NodeRenderer for ObjectNodeRenderer {
    fn show(&mut self, ui: &mut Ui, mut args: NodeRenderArgs<'_>) -> NodeResponse {
        let zoom = args.zoom;
        let id = egui::Id::new(("object_node", args.node.id.as_str()));
        let ctx = ui.ctx().clone();
        let expanded = args.controller.is_expanded();

        // Logical state flips immediately; only the height chases it
        let target_height = if expanded {
            EXPANDED_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        };
        let height = ctx.animate_value_with_time(id.with("height"), target_height, TRANSITION_SECONDS);
        let body_rect = Rect::from_min_size(args.origin, egui::vec2(NODE_WIDTH, height) * zoom);

        let body_response = ui.interact(body_rect, id.with("body"), Sense::click_and_drag());

        // Body chrome
        let painter = ui.painter();
        painter.rect_filled(
            body_rect.translate(egui::vec2(0.0, 3.0 * zoom)),
            Self::corner(zoom),
            colors::NODE_SHADOW,
        );
        let fill = if !expanded && body_response.hovered() {
            colors::NODE_BODY_HOVER
        } else {
            colors::NODE_BODY
        };
        painter.rect_filled(body_rect, Self::corner(zoom), fill);
        painter.rect_stroke(
            body_rect,
            Self::corner(zoom),
            Stroke::new(1.0, colors::NODE_RING),
            StrokeKind::Inside,
        );
        if args.selected {
            painter.rect_stroke(
                body_rect.expand(3.0 * zoom),
                Self::corner(zoom),
                Stroke::new(1.5 * zoom, colors::SELECTION),
                StrokeKind::Outside,
            );
        }

        self.draw_header(ui, &args, body_rect);

        let reveal = ctx.animate_bool_with_time(id.with("reveal"), expanded, TRANSITION_SECONDS);
        if reveal > 0.0 {
            self.draw_expanded_section(ui, &mut args, id, body_rect, reveal);
        }

        let mut close_requested = false;
        if expanded {
            close_requested = self.draw_header_controls(ui, &mut args, id, body_rect);
        }

        // A click on the body only ever expands; the controller ignores
        // the request while already expanded, so a stray click on the open
        // body cannot flicker it.
        if body_response.clicked() {
            args.controller.request_expand();
        }

        // Detail panel: state is derived fresh every frame, the leave
        // transition keeps drawing the last visible tab until it is done.
        let (panel, transition) = args.presenter.observe(&args.controller.state(), args.catalog);
        if let Some(tab) = panel.tab {
            self.leaving_tabs.insert(args.node.id.clone(), tab);
        }
        if let Some(transition) = transition {
            tracing::debug!(node = %args.node.id, ?transition, "detail panel transition");
        }
        let progress = ctx.animate_bool_with_time(id.with("panel"), panel.visible, TRANSITION_SECONDS);
        let mut panel_rect = None;
        if progress > 0.0 {
            let showing = panel
                .tab
                .or_else(|| self.leaving_tabs.get(&args.node.id).copied());
            if let Some(tab) = showing {
                let rect = detail_panel_rect(body_rect, zoom, progress);
                self.draw_panel(ui, args.content, body_rect, rect, zoom, tab, progress);
                panel_rect = Some(rect);
            }
        } else if !panel.visible {
            self.leaving_tabs.remove(&args.node.id);
        }

        NodeResponse {
            body_rect,
            panel_rect,
            clicked: body_response.clicked(),
            dragged: body_response.dragged_by(egui::PointerButton::Primary),
            drag_delta: body_response.drag_delta(),
            close_requested,
        }
    }

    fn forget(&mut self, id: &NodeId) {
        self.leaving_tabs.remove(id);
    }
}

/// Maps node kinds to their renderers; the canvas rejects graphs holding
/// a kind with no renderer here.
#[derive(Default)]
pub struct NodeRendererRegistry {
    renderers: HashMap<NodeKind, Box<dyn NodeRenderer>>,
}

impl NodeRendererRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the object node renderer wired up
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NodeKind::Object, Box::new(ObjectNodeRenderer::new()));
        registry
    }

    /// Register (or replace) the renderer for a node kind
    pub fn register(&mut self, kind: NodeKind, renderer: Box<dyn NodeRenderer>) {
        self.renderers.insert(kind, renderer);
    }

    /// Whether a kind has a renderer
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    /// Mutable access to a kind's renderer
    pub fn get_mut(&mut self, kind: NodeKind) -> Option<&mut (dyn NodeRenderer + '_)> {
        self.renderers.get_mut(&kind).map(|b| &mut **b as &mut (dyn NodeRenderer + '_))
    }

    /// Fail fast if the graph contains a kind this registry cannot draw
    pub fn validate_for(&self, graph: &objectflow_core::NodeGraph) -> Result<(), UiError> {
        for node in graph.nodes() {
            if !self.contains(node.kind) {
                return Err(UiError::UnknownNodeKind(node.kind.as_tag().to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objectflow_core::NodeGraph;

    #[test]
    fn test_default_registry_covers_initial_graph() {
        let registry = NodeRendererRegistry::with_defaults();
        assert!(registry.validate_for(&NodeGraph::initial()).is_ok());
    }

    #[test]
    fn test_empty_registry_rejects_graph() {
        let registry = NodeRendererRegistry::new();
        let result = registry.validate_for(&NodeGraph::initial());
        assert!(matches!(result, Err(UiError::UnknownNodeKind(tag)) if tag == "objectNode"));
    }

    #[test]
    fn test_forget_drops_leave_transition_bookkeeping() {
        let mut renderer = ObjectNodeRenderer::new();
        renderer
            .leaving_tabs
            .insert(NodeId::new("Player"), InspectorTab::Events);

        renderer.forget(&NodeId::new("Player"));
        assert!(renderer.leaving_tabs.is_empty());
    }

    #[test]
    fn test_panel_rect_sits_beside_body_when_entered() {
        let body = Rect::from_min_size(
            Pos2::new(100.0, 100.0),
            egui::vec2(NODE_WIDTH, EXPANDED_HEIGHT),
        );
        let panel = detail_panel_rect(body, 1.0, 1.0);
        assert_eq!(panel.min.x, body.max.x + PANEL_GAP);
        assert_eq!(panel.min.y, body.min.y);
        assert_eq!(panel.width(), PANEL_SIZE);
    }

    #[test]
    fn test_panel_rect_slides_in_from_the_left() {
        let body = Rect::from_min_size(
            Pos2::new(100.0, 100.0),
            egui::vec2(NODE_WIDTH, EXPANDED_HEIGHT),
        );
        let entering = detail_panel_rect(body, 1.0, 0.0);
        let entered = detail_panel_rect(body, 1.0, 1.0);
        assert!(entering.min.x < entered.min.x);
        assert!(entering.width() < entered.width());
    }
}
