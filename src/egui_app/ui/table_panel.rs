//! Filterable review table with one expandable row.
use egui::{
    CornerRadius, Id, Margin, Rect, RichText, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::charts;
use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::SentimentFilter;
use crate::egui_app::ui::style;
use crate::egui_app::view_model::{self, ReviewRow, ScoreBreakdown};

const METER_WIDTH: f32 = 70.0;
const METER_HEIGHT: f32 = 6.0;

/// Owned display payload for one row, detached from the controller borrow so
/// clicks can mutate state after rendering.
struct RowPayload {
    row: ReviewRow,
    text: String,
    breakdown: ScoreBreakdown,
    expanded: bool,
}

pub(super) fn render(ui: &mut Ui, controller: &mut DashboardController) {
    let palette = style::palette();
    let total = controller.reviews().len();
    let expanded_id = controller.ui.table.expanded.clone();
    let payloads: Vec<RowPayload> = controller
        .filtered_reviews()
        .into_iter()
        .map(|review| RowPayload {
            row: view_model::review_row(review),
            text: review.review_text.clone(),
            breakdown: view_model::score_breakdown(&review.sentiment_scores),
            expanded: expanded_id.as_deref() == Some(review.review_id.as_str()),
        })
        .collect();
    let current_filter = controller.ui.table.filter;

    let mut clicked_filter: Option<SentimentFilter> = None;
    let mut clicked_row: Option<String> = None;

    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Recent Reviews")
                    .color(palette.text_primary)
                    .size(15.0)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} of {total} reviews", payloads.len()))
                        .color(palette.text_muted)
                        .size(11.0),
                );
            });
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for filter in SentimentFilter::ALL {
                let selected = filter == current_filter;
                if ui.selectable_label(selected, filter.label()).clicked() && !selected {
                    clicked_filter = Some(filter);
                }
            }
        });
        ui.add_space(10.0);
        header_row(ui);
        ui.add_space(4.0);
        if payloads.is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No reviews match the selected filter.")
                        .color(palette.text_muted),
                );
            });
            ui.add_space(12.0);
        }
        for payload in &payloads {
            if review_row_ui(ui, payload) {
                clicked_row = Some(payload.row.id.clone());
            }
            if payload.expanded {
                expanded_row_ui(ui, payload);
            }
            ui.add_space(2.0);
        }
    });

    if let Some(filter) = clicked_filter {
        controller.set_filter(filter);
    }
    if let Some(id) = clicked_row {
        controller.toggle_row(&id);
    }
}

fn header_row(ui: &mut Ui) {
    let palette = style::palette();
    let widths = column_widths(ui.available_width());
    ui.horizontal(|ui| {
        for (title, width) in [
            ("Customer", widths.customer),
            ("Date", widths.date),
            ("Sentiment", widths.sentiment),
            ("Churn Risk", widths.churn),
            ("Negative", widths.meter),
            ("Key Phrases", widths.phrases),
        ] {
            ui.allocate_ui(vec2(width, 16.0), |ui| {
                ui.label(RichText::new(title).color(palette.text_muted).size(10.0));
            });
        }
    });
    let rect = ui.max_rect();
    let y = ui.cursor().min.y + 2.0;
    ui.painter().hline(
        rect.left()..=rect.right(),
        y,
        Stroke::new(1.0, palette.border),
    );
    ui.add_space(4.0);
}

struct ColumnWidths {
    customer: f32,
    date: f32,
    sentiment: f32,
    churn: f32,
    meter: f32,
    phrases: f32,
}

fn column_widths(available: f32) -> ColumnWidths {
    let fixed = 110.0 + 90.0 + 90.0 + METER_WIDTH + 30.0;
    ColumnWidths {
        customer: 150.0,
        date: 110.0,
        sentiment: 90.0,
        churn: 90.0,
        meter: METER_WIDTH + 30.0,
        phrases: (available - 150.0 - fixed).max(120.0),
    }
}

/// Render one collapsed row; returns true when it was clicked.
fn review_row_ui(ui: &mut Ui, payload: &RowPayload) -> bool {
    let palette = style::palette();
    let row = &payload.row;
    let widths = column_widths(ui.available_width());
    let response = ui
        .scope(|ui| {
            ui.horizontal(|ui| {
                ui.allocate_ui(vec2(widths.customer, 20.0), |ui| {
                    ui.label(
                        RichText::new(&row.customer)
                            .color(palette.text_primary)
                            .size(12.0),
                    );
                });
                ui.allocate_ui(vec2(widths.date, 20.0), |ui| {
                    ui.label(
                        RichText::new(&row.date_label)
                            .color(palette.text_secondary)
                            .size(12.0),
                    );
                });
                ui.allocate_ui(vec2(widths.sentiment, 20.0), |ui| {
                    style::badge(
                        ui,
                        row.sentiment.display_name(),
                        charts::color_for_label(row.sentiment.as_str()),
                    );
                });
                ui.allocate_ui(vec2(widths.churn, 20.0), |ui| {
                    style::badge(
                        ui,
                        row.churn.display_name(),
                        charts::color_for_label(row.churn.as_str()),
                    );
                });
                ui.allocate_ui(vec2(widths.meter, 20.0), |ui| {
                    negative_meter(ui, row.negative_fraction, &row.negative_label);
                });
                ui.horizontal_wrapped(|ui| {
                    for phrase in &row.phrases {
                        style::chip(ui, phrase);
                    }
                });
            });
        })
        .response;
    let rect = response.rect;
    let clicked = ui
        .interact(rect, Id::new(("review_row", &row.id)), Sense::click())
        .clicked();
    if ui.rect_contains_pointer(rect) {
        ui.painter().rect_filled(
            rect,
            CornerRadius::same(4),
            palette.text_primary.gamma_multiply(0.04),
        );
    }
    clicked
}

fn negative_meter(ui: &mut Ui, fraction: f32, label: &str) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let (track, _) = ui.allocate_exact_size(vec2(METER_WIDTH, METER_HEIGHT), Sense::hover());
        let track = track.translate(vec2(0.0, 5.0));
        ui.painter().rect(
            track,
            3.0,
            palette.surface_raised,
            Stroke::new(1.0, palette.border),
            StrokeKind::Inside,
        );
        if fraction > 0.0 {
            let fill = Rect::from_min_size(
                track.min,
                vec2(track.width() * fraction.clamp(0.0, 1.0), track.height()),
            );
            ui.painter().rect_filled(fill, 3.0, palette.accent_red);
        }
        ui.label(RichText::new(label).color(palette.text_secondary).size(11.0));
    });
}

fn expanded_row_ui(ui: &mut Ui, payload: &RowPayload) {
    let palette = style::palette();
    egui::Frame::NONE
        .fill(palette.surface_raised)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("\u{201c}{}\u{201d}", payload.text))
                    .color(palette.text_primary)
                    .size(12.0)
                    .italics(),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                score_entry(ui, "Positive", &payload.breakdown.positive, palette.accent_green);
                score_entry(ui, "Negative", &payload.breakdown.negative, palette.accent_red);
                score_entry(ui, "Neutral", &payload.breakdown.neutral, palette.text_muted);
                score_entry(ui, "Mixed", &payload.breakdown.mixed, palette.accent_amber);
            });
        });
}

fn score_entry(ui: &mut Ui, name: &str, value: &str, color: egui::Color32) {
    let palette = style::palette();
    ui.label(RichText::new(format!("{name}:")).color(palette.text_muted).size(11.0));
    ui.label(RichText::new(value).color(color).size(11.0));
    ui.add_space(10.0);
}
