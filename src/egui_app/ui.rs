//! egui renderer for the dashboard UI.
use crate::egui_app::controller::DashboardController;
use eframe::egui::{self, Align, Color32, RichText, Ui, Vec2};

mod cards;
mod charts_panel;
pub mod style;
mod table_panel;
mod upload_panel;

pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(980.0, 660.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                self.controller.handle_dropped_file(path);
            }
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::NONE
                    .fill(palette.card)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("InsightForge")
                            .color(palette.text_primary)
                            .size(18.0)
                            .strong(),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Customer Review Analytics")
                            .color(palette.text_secondary)
                            .size(12.0),
                    );
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        style::chip(ui, concat!("v", env!("CARGO_PKG_VERSION")));
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::BLACK)
                    .inner_margin(egui::Margin::symmetric(8, 5)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(5.0, 9.0),
                        5.0,
                        status.badge_color,
                    );
                    ui.add_space(14.0);
                    ui.label(
                        RichText::new(&status.badge_label)
                            .color(palette.text_primary)
                            .size(12.0),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(&status.text)
                            .color(palette.text_secondary)
                            .size(12.0),
                    );
                });
            });
    }

    fn render_loading(&self, ui: &mut Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(RichText::new("Loading dashboard...").color(palette.text_secondary));
        });
    }

    fn render_dashboard(&mut self, ui: &mut Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                cards::render(ui, &self.controller);
                ui.add_space(16.0);
                charts_panel::render(ui, &self.controller);
                ui.add_space(16.0);
                table_panel::render(ui, &mut self.controller);
                ui.add_space(16.0);
                upload_panel::render(ui, &mut self.controller);
                ui.add_space(24.0);
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();
        self.handle_dropped_files(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(style::palette().surface)
                    .inner_margin(egui::Margin::same(20)),
            )
            .show(ctx, |ui| {
                if self.controller.loading() {
                    self.render_loading(ui);
                } else {
                    self.render_dashboard(ui);
                }
            });
        if self.controller.busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
