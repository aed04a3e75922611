use objectflow_ui::{GraphSurface, ThemeConfig};

/// The eframe shell: one borderless panel filled by the graph canvas
pub struct ObjectFlowApp {
    surface: GraphSurface,
}

impl ObjectFlowApp {
    pub fn new(cc: &eframe::CreationContext<'_>, theme: ThemeConfig, surface: GraphSurface) -> Self {
        theme.apply(&cc.egui_ctx);
        Self { surface }
    }
}

impl eframe::App for ObjectFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(objectflow_ui::theme::colors::CANVAS_BG))
            .show(ctx, |ui| {
                self.surface.show(ui);
            });
    }
}
