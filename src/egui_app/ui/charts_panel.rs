//! The three chart cards: sentiment pie, average-score bars, churn bars.
use std::f32::consts::TAU;

use egui::{Pos2, Rect, RichText, Sense, Shape, Stroke, StrokeKind, Ui, Vec2, pos2, vec2};

use crate::api::models::{ChurnRisk, MetricsSnapshot, SentimentLabel};
use crate::charts::{self, ChartSegment};
use crate::egui_app::controller::DashboardController;
use crate::egui_app::ui::style;

const PIE_RADIUS: f32 = 70.0;
const BAR_HEIGHT: f32 = 18.0;
const BAR_GAP: f32 = 10.0;

pub(super) fn render(ui: &mut Ui, controller: &DashboardController) {
    let snapshot = controller.metrics().cloned().unwrap_or_default();
    ui.columns(3, |cols| {
        chart_card(&mut cols[0], "Sentiment Distribution", |ui| {
            pie_chart(ui, &charts::pie_segments(&sentiment_record(&snapshot)));
        });
        chart_card(&mut cols[1], "Average Sentiment Scores", |ui| {
            bar_chart(ui, &charts::bar_segments(&score_record(&snapshot), 1.0), true);
        });
        chart_card(&mut cols[2], "Churn Risk Levels", |ui| {
            bar_chart(ui, &charts::bar_segments(&churn_record(&snapshot), 0.0), false);
        });
    });
}

fn sentiment_record(snapshot: &MetricsSnapshot) -> Vec<(String, f64)> {
    SentimentLabel::ALL
        .iter()
        .map(|label| {
            (
                label.display_name().to_string(),
                snapshot.sentiment_count(*label) as f64,
            )
        })
        .collect()
}

fn score_record(snapshot: &MetricsSnapshot) -> Vec<(String, f64)> {
    let scores = snapshot.average_scores;
    vec![
        ("Positive".to_string(), scores.positive),
        ("Negative".to_string(), scores.negative),
        ("Neutral".to_string(), scores.neutral),
        ("Mixed".to_string(), scores.mixed),
    ]
}

fn churn_record(snapshot: &MetricsSnapshot) -> Vec<(String, f64)> {
    ChurnRisk::ALL
        .iter()
        .map(|risk| {
            (
                risk.display_name().to_string(),
                snapshot.churn_count(*risk) as f64,
            )
        })
        .collect()
}

fn chart_card(ui: &mut Ui, title: &str, body: impl FnOnce(&mut Ui)) {
    let palette = style::palette();
    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).color(palette.text_secondary).size(13.0));
        ui.add_space(10.0);
        body(ui);
    });
}

/// Filled pie drawn as a triangle fan per slice, with a legend underneath.
fn pie_chart(ui: &mut Ui, segments: &[ChartSegment]) {
    let palette = style::palette();
    let size = PIE_RADIUS * 2.0 + 8.0;
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width(), size), Sense::hover());
    let center = response.rect.center();
    if segments.is_empty() {
        painter.circle_stroke(center, PIE_RADIUS, Stroke::new(1.0, palette.border));
        ui.label(RichText::new("No data yet").color(palette.text_muted).size(11.0));
        return;
    }
    let mut start = -TAU / 4.0;
    for segment in segments {
        let sweep = segment.fraction * TAU;
        painter.add(pie_slice(center, PIE_RADIUS, start, sweep, segment.color));
        start += sweep;
    }
    ui.add_space(8.0);
    for segment in segments {
        ui.horizontal(|ui| {
            let (swatch, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, segment.color);
            ui.label(
                RichText::new(format!(
                    "{} ({:.0}%)",
                    segment.label,
                    f64::from(segment.fraction) * 100.0
                ))
                .color(palette.text_secondary)
                .size(11.0),
            );
        });
    }
}

fn pie_slice(center: Pos2, radius: f32, start: f32, sweep: f32, color: egui::Color32) -> Shape {
    // One sub-triangle per ~4 degrees keeps the arc visually round.
    let steps = ((sweep / TAU * 90.0).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let angle = start + sweep * (i as f32 / steps as f32);
        points.push(pos2(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    Shape::convex_polygon(points, color, Stroke::NONE)
}

/// Horizontal bars with the category label to the left and the value to the
/// right. `percent` formats values as whole percentages instead of counts.
fn bar_chart(ui: &mut Ui, segments: &[ChartSegment], percent: bool) {
    let palette = style::palette();
    if segments.is_empty() {
        ui.label(RichText::new("No data yet").color(palette.text_muted).size(11.0));
        return;
    }
    let label_width = 64.0;
    let value_width = 44.0;
    for segment in segments {
        ui.horizontal(|ui| {
            ui.add_sized(
                vec2(label_width, BAR_HEIGHT),
                egui::Label::new(
                    RichText::new(&segment.label)
                        .color(palette.text_secondary)
                        .size(11.0),
                ),
            );
            let track_width = (ui.available_width() - value_width).max(20.0);
            let (track, _) =
                ui.allocate_exact_size(vec2(track_width, BAR_HEIGHT), Sense::hover());
            ui.painter().rect(
                track,
                4.0,
                palette.surface_raised,
                Stroke::new(1.0, palette.border),
                StrokeKind::Inside,
            );
            if segment.fraction > 0.0 {
                let fill = Rect::from_min_size(
                    track.min,
                    vec2(track.width() * segment.fraction, track.height()),
                );
                ui.painter().rect_filled(fill, 4.0, segment.color);
            }
            let value_text = if percent {
                format!("{:.0}%", segment.value * 100.0)
            } else {
                format!("{:.0}", segment.value)
            };
            ui.label(RichText::new(value_text).color(palette.text_primary).size(11.0));
        });
        ui.add_space(BAR_GAP - 4.0);
    }
}
