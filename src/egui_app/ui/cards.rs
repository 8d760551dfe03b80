//! Top row of metric cards.
use egui::{Color32, RichText, Ui};

use crate::api::MetricsSnapshot;
use crate::egui_app::controller::DashboardController;
use crate::egui_app::ui::style;
use crate::metrics;

/// Title, value, caption, and value color for one card.
struct CardData {
    title: &'static str,
    value: String,
    caption: String,
    value_color: Color32,
}

pub(super) fn render(ui: &mut Ui, controller: &DashboardController) {
    let cards = card_data(controller.metrics());
    ui.columns(cards.len(), |cols| {
        for (col, data) in cols.iter_mut().zip(&cards) {
            card(col, data);
        }
    });
}

fn card_data(snapshot: Option<&MetricsSnapshot>) -> [CardData; 4] {
    let palette = style::palette();
    let empty = MetricsSnapshot::default();
    let snapshot = snapshot.unwrap_or(&empty);
    [
        CardData {
            title: "Total Reviews",
            value: metrics::group_thousands(snapshot.total_reviews),
            caption: "All time".to_string(),
            value_color: palette.text_primary,
        },
        CardData {
            title: "Negative Sentiment",
            value: format!("{}%", metrics::negative_percent(snapshot)),
            caption: format!("{} reviews", metrics::negative_count(snapshot)),
            value_color: palette.accent_red,
        },
        CardData {
            title: "Positive Score",
            value: format!("{}%", metrics::positive_score_percent(snapshot)),
            caption: "Avg. confidence".to_string(),
            value_color: palette.accent_green,
        },
        CardData {
            title: "High Churn Risk",
            value: metrics::group_thousands(metrics::high_churn_count(snapshot)),
            caption: "Customers at risk".to_string(),
            value_color: palette.accent_red,
        },
    ]
}

fn card(ui: &mut Ui, data: &CardData) {
    let palette = style::palette();
    style::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(data.title)
                .color(palette.text_secondary)
                .size(12.0),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(&data.value)
                .color(data.value_color)
                .size(26.0)
                .strong(),
        );
        ui.add_space(2.0);
        ui.label(
            RichText::new(&data.caption)
                .color(palette.text_muted)
                .size(11.0),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo;

    #[test]
    fn cards_derive_values_from_the_snapshot() {
        let snapshot = demo::mock_metrics();
        let cards = card_data(Some(&snapshot));
        assert_eq!(cards[0].value, "200");
        assert_eq!(cards[1].value, "15.0%");
        assert_eq!(cards[1].caption, "30 reviews");
        assert_eq!(cards[2].value, "72%");
        assert_eq!(cards[3].value, "18");
    }

    #[test]
    fn risk_cards_use_the_red_accent() {
        let palette = style::palette();
        let cards = card_data(None);
        assert_eq!(cards[1].value_color, palette.accent_red);
        assert_eq!(cards[3].value_color, palette.accent_red);
        assert_eq!(cards[0].value, "0");
        assert_eq!(cards[1].value, "0%");
    }
}
