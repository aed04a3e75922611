//! Graph canvas surface
//!
//! Hosts the node graph on an infinite pannable/zoomable 2D canvas and
//! delegates each node to its kind's renderer. Primary drag over empty
//! canvas is reserved for rubber-band selection; middle and secondary
//! drags pan, as does the scroll gesture. The surface owns node
//! positions and the selection; every other piece of per-node state
//! lives in the node's own controller.

use egui::{Pos2, Rect, Sense, Stroke, StrokeKind, Ui};
use std::collections::HashMap;

use objectflow_core::{
    DetailPanelPresenter, ExpansionStore, GraphNode, NodeGraph, NodeId, TabRegistry,
};

use crate::content::ContentRegistry;
use crate::object_node::{NodeRenderArgs, NodeRendererRegistry};
use crate::theme::colors;
use crate::UiError;

const ZOOM_RANGE: std::ops::RangeInclusive<f32> = 0.2..=3.0;
const GRID_SPACING: f32 = 24.0;

/// The pannable/zoomable canvas hosting all graph nodes
pub struct GraphSurface {
    graph: NodeGraph,
    expansion: ExpansionStore,
    presenters: HashMap<NodeId, DetailPanelPresenter>,
    catalog: TabRegistry,
    content: ContentRegistry,
    renderers: NodeRendererRegistry,

    /// Canvas pan offset, in canvas units
    pan_offset: egui::Vec2,
    /// Canvas zoom level
    zoom: f32,
    /// Rubber-band anchor (screen coords) while box-selecting
    box_select_start: Option<Pos2>,
    /// Node being dragged with the primary button
    dragging_node: Option<NodeId>,
}

impl GraphSurface {
    /// Build a surface over a graph.
    ///
    /// Fails fast when the graph holds a node kind without a renderer or
    /// the content registry disagrees with the tab catalog; both are
    /// configuration errors, not render-time conditions.
    pub fn new(
        graph: NodeGraph,
        catalog: TabRegistry,
        content: ContentRegistry,
        renderers: NodeRendererRegistry,
    ) -> Result<Self, UiError> {
        renderers.validate_for(&graph)?;
        content.validate(&catalog)?;
        Ok(Self {
            graph,
            expansion: ExpansionStore::new(),
            presenters: HashMap::new(),
            catalog,
            content,
            renderers,
            pan_offset: egui::Vec2::ZERO,
            zoom: 1.0,
            box_select_start: None,
            dragging_node: None,
        })
    }

    /// Surface over the seeded initial graph with the default registries
    pub fn with_defaults() -> Result<Self, UiError> {
        Self::new(
            NodeGraph::initial(),
            TabRegistry::default(),
            ContentRegistry::with_defaults(),
            NodeRendererRegistry::with_defaults(),
        )
    }

    /// The hosted graph
    pub fn graph(&self) -> &NodeGraph {
        &self.graph
    }

    /// Add a node, validating its kind against the renderer registry
    pub fn add_node(&mut self, node: GraphNode) -> Result<(), UiError> {
        if !self.renderers.contains(node.kind) {
            return Err(UiError::UnknownNodeKind(node.kind.as_tag().to_string()));
        }
        self.graph.add_node(node)?;
        Ok(())
    }

    /// Remove a node together with its expansion state, presenter, and
    /// renderer bookkeeping
    pub fn remove_node(&mut self, id: &NodeId) -> Option<GraphNode> {
        self.expansion.remove(id);
        self.presenters.remove(id);
        let node = self.graph.remove_node(id)?;
        if let Some(renderer) = self.renderers.get_mut(node.kind) {
            renderer.forget(id);
        }
        Some(node)
    }

    /// Current zoom level
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    fn to_screen(canvas_rect: Rect, pan: egui::Vec2, zoom: f32, world: glam::Vec2) -> Pos2 {
        canvas_rect.min + (egui::vec2(world.x, world.y) + pan) * zoom
    }

    fn from_screen(canvas_rect: Rect, pan: egui::Vec2, zoom: f32, screen: Pos2) -> egui::Vec2 {
        (screen - canvas_rect.min) / zoom - pan
    }

    /// Draw the canvas and process one frame of interaction
    pub fn show(&mut self, ui: &mut Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = response.rect;

        painter.rect_filled(canvas_rect, 0.0, colors::CANVAS_BG);

        // Scroll pans; ctrl+scroll zooms about the pointer
        let (scroll, ctrl, hover_pos) = ui.input(|i| {
            (
                i.raw_scroll_delta,
                i.modifiers.ctrl,
                i.pointer.hover_pos(),
            )
        });
        if response.hovered() && scroll != egui::Vec2::ZERO {
            if ctrl {
                if let Some(pos) = hover_pos {
                    let anchor = Self::from_screen(canvas_rect, self.pan_offset, self.zoom, pos);
                    let factor = 1.0 + scroll.y * 0.004;
                    self.zoom = (self.zoom * factor).clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end());
                    // Keep the point under the cursor stationary
                    self.pan_offset = (pos - canvas_rect.min) / self.zoom - anchor;
                }
            } else {
                self.pan_offset += scroll / self.zoom;
            }
        }

        // Middle and secondary drags pan; primary stays free for
        // selection and node dragging
        let pans_canvas = response.dragged_by(egui::PointerButton::Middle)
            || response.dragged_by(egui::PointerButton::Secondary);
        if pans_canvas && self.dragging_node.is_none() {
            self.pan_offset += response.drag_delta() / self.zoom;
        }

        self.draw_grid(&painter, canvas_rect);

        // Render nodes, collecting interactions to apply afterwards
        let ids: Vec<NodeId> = self.graph.nodes().iter().map(|n| n.id.clone()).collect();
        let mut node_rects: Vec<(NodeId, Rect)> = Vec::with_capacity(ids.len());
        let mut obstacle_rects: Vec<Rect> = Vec::with_capacity(ids.len());
        let mut moves: Vec<(NodeId, egui::Vec2)> = Vec::new();
        let mut clicked_node: Option<NodeId> = None;

        for id in &ids {
            let Some(node) = self.graph.node(id) else {
                continue;
            };
            let origin = Self::to_screen(canvas_rect, self.pan_offset, self.zoom, node.position);
            let selected = self.graph.is_selected(id);
            let controller = self.expansion.controller_mut(id);
            let presenter = self.presenters.entry(id.clone()).or_default();
            let Some(renderer) = self.renderers.get_mut(node.kind) else {
                // Ruled out at construction; skip defensively is wrong,
                // so keep the invariant loud in debug builds.
                debug_assert!(false, "node kind lost its renderer");
                continue;
            };

            let node_response = renderer.show(
                ui,
                NodeRenderArgs {
                    node,
                    origin,
                    zoom: self.zoom,
                    selected,
                    controller,
                    presenter,
                    catalog: &self.catalog,
                    content: &mut self.content,
                },
            );

            if node_response.dragged {
                self.dragging_node = Some(id.clone());
                moves.push((id.clone(), node_response.drag_delta / self.zoom));
            }
            if node_response.clicked {
                clicked_node = Some(id.clone());
            }
            if node_response.close_requested {
                tracing::debug!(node = %id, "close control activated (no behavior wired)");
            }
            node_rects.push((id.clone(), node_response.body_rect));
            obstacle_rects.push(node_response.body_rect);
            if let Some(rect) = node_response.panel_rect {
                obstacle_rects.push(rect);
            }
        }

        // Drag-to-move is the only mutation the surface applies to node
        // records
        for (id, delta) in moves {
            self.graph
                .translate_node(&id, glam::Vec2::new(delta.x, delta.y));
        }

        let shift = ui.input(|i| i.modifiers.shift);
        if let Some(id) = clicked_node {
            if shift {
                self.graph.extend_selection(id);
            } else {
                self.graph.set_selection(vec![id]);
            }
        }

        self.handle_box_selection(ui, &painter, canvas_rect, &node_rects, &obstacle_rects);

        if ui.input(|i| i.pointer.primary_released()) {
            self.dragging_node = None;
        }
    }

    /// Whether a screen position is on bare canvas, clear of every node
    /// body and detail panel
    fn over_empty_canvas(canvas_rect: Rect, obstacles: &[Rect], pos: Pos2) -> bool {
        canvas_rect.contains(pos) && !obstacles.iter().any(|rect| rect.contains(pos))
    }

    /// Rubber-band selection over empty canvas. A node is selected when
    /// the band intersects its body; full enclosure is not required.
    fn handle_box_selection(
        &mut self,
        ui: &Ui,
        painter: &egui::Painter,
        canvas_rect: Rect,
        node_rects: &[(NodeId, Rect)],
        obstacles: &[Rect],
    ) {
        let (pointer, pressed, released, shift) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.modifiers.shift,
            )
        });

        if pressed && self.dragging_node.is_none() && self.box_select_start.is_none() {
            if let Some(pos) = pointer {
                if Self::over_empty_canvas(canvas_rect, obstacles, pos) {
                    self.box_select_start = Some(pos);
                }
            }
        }

        let Some(start) = self.box_select_start else {
            return;
        };
        let Some(current) = pointer else {
            if released {
                self.box_select_start = None;
            }
            return;
        };

        let band = Rect::from_two_pos(start, current);
        painter.rect_filled(band, 0.0, colors::SELECTION.gamma_multiply(0.12));
        painter.rect_stroke(
            band,
            0.0,
            Stroke::new(1.5, colors::SELECTION),
            StrokeKind::Inside,
        );

        if released {
            if !shift {
                self.graph.clear_selection();
            }
            // A stationary click over empty canvas just clears the
            // selection; a stretched band selects by intersection
            if band.width() > 2.0 || band.height() > 2.0 {
                for (id, rect) in node_rects {
                    if band.intersects(*rect) {
                        self.graph.extend_selection(id.clone());
                    }
                }
            }
            self.box_select_start = None;
        }
    }

    fn draw_grid(&self, painter: &egui::Painter, canvas_rect: Rect) {
        let spacing = GRID_SPACING * self.zoom;
        if spacing < 6.0 {
            return;
        }
        let offset = self.pan_offset * self.zoom;
        let start_x = canvas_rect.min.x + offset.x.rem_euclid(spacing);
        let start_y = canvas_rect.min.y + offset.y.rem_euclid(spacing);

        let mut y = start_y;
        while y < canvas_rect.max.y {
            let mut x = start_x;
            while x < canvas_rect.max.x {
                painter.circle_filled(Pos2::new(x, y), 1.0, colors::GRID_DOT);
                x += spacing;
            }
            y += spacing;
        }
    }
}
