//! CSV upload card: drop zone, file picker, and outcome banner.
use egui::{
    Color32, CornerRadius, Margin, RichText, Sense, Shape, Stroke, Ui, pos2, vec2,
};

use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::UploadStatus;
use crate::egui_app::ui::style;
use crate::egui_app::view_model;

const DROP_ZONE_HEIGHT: f32 = 110.0;
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 5.0;

pub(super) fn render(ui: &mut Ui, controller: &mut DashboardController) {
    let palette = style::palette();
    let hovering_files = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    let mut browse_clicked = false;
    let mut upload_clicked = false;

    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("Upload CSV")
                .color(palette.text_primary)
                .size(15.0)
                .strong(),
        );
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new("Drop a review export below. Expected columns:")
                    .color(palette.text_secondary)
                    .size(12.0),
            );
            ui.label(
                RichText::new("review_id, customer_name, review_text, date")
                    .monospace()
                    .color(palette.text_secondary)
                    .size(12.0),
            );
        });
        ui.add_space(10.0);

        browse_clicked = drop_zone(ui, controller, hovering_files);
        ui.add_space(10.0);

        let uploading = controller.uploading();
        let has_file = controller.ui.upload.selected.is_some();
        ui.horizontal(|ui| {
            let button = egui::Button::new(if uploading {
                "Uploading..."
            } else {
                "Upload & Process"
            });
            if ui.add_enabled(has_file && !uploading, button).clicked() {
                upload_clicked = true;
            }
            if uploading {
                ui.spinner();
            }
        });

        match controller.ui.upload.status.clone() {
            UploadStatus::Idle => {}
            UploadStatus::Success(message) => {
                ui.add_space(8.0);
                banner(ui, &message, palette.accent_green);
            }
            UploadStatus::Error(message) => {
                ui.add_space(8.0);
                banner(ui, &message, palette.accent_red);
            }
        }
    });

    if browse_clicked {
        controller.browse_for_file();
    }
    if upload_clicked {
        controller.begin_upload();
    }
}

/// Dashed drop target showing either the prompt or the selected file.
/// Returns true when clicked.
fn drop_zone(ui: &mut Ui, controller: &DashboardController, hovering_files: bool) -> bool {
    let palette = style::palette();
    let (rect, response) = ui.allocate_exact_size(
        vec2(ui.available_width(), DROP_ZONE_HEIGHT),
        Sense::click(),
    );
    let highlight = hovering_files || response.hovered();
    let border_color = if highlight {
        palette.text_secondary
    } else {
        palette.border
    };
    if highlight {
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(8),
            palette.text_primary.gamma_multiply(0.03),
        );
    }
    dashed_border(ui, rect, border_color);

    let mut inner = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect.shrink2(vec2(12.0, 16.0)))
            .layout(egui::Layout::top_down(egui::Align::Center)),
    );
    match &controller.ui.upload.selected {
        Some(file) => {
            inner.add_space(18.0);
            inner.label(
                RichText::new(&file.name)
                    .color(palette.text_primary)
                    .size(13.0),
            );
            if let Some(size) = file.size_bytes {
                inner.label(
                    RichText::new(view_model::file_size_label(size))
                        .color(palette.text_muted)
                        .size(11.0),
                );
            }
            inner.add_space(4.0);
            inner.label(
                RichText::new("Click to choose a different file")
                    .color(palette.text_muted)
                    .size(11.0),
            );
        }
        None => {
            inner.add_space(24.0);
            inner.label(
                RichText::new("Drag & drop a .csv file here")
                    .color(palette.text_secondary)
                    .size(13.0),
            );
            inner.add_space(4.0);
            inner.label(
                RichText::new("or click to browse")
                    .color(palette.text_muted)
                    .size(11.0),
            );
        }
    }
    response.clicked()
}

fn dashed_border(ui: &mut Ui, rect: egui::Rect, color: Color32) {
    let stroke = Stroke::new(1.0, color);
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    let mut shapes = Vec::new();
    for i in 0..4 {
        let from = corners[i];
        let to = corners[(i + 1) % 4];
        shapes.extend(Shape::dashed_line(
            &[pos2(from.x, from.y), pos2(to.x, to.y)],
            stroke,
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    }
    ui.painter().extend(shapes);
}

fn banner(ui: &mut Ui, message: &str, color: Color32) {
    egui::Frame::NONE
        .fill(color.gamma_multiply(0.12))
        .stroke(Stroke::new(1.0, color.gamma_multiply(0.5)))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(color).size(12.0));
        });
}
