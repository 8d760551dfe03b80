//! Dark palette and shared widget styling for the dashboard.

use egui::{
    Color32, Frame, Margin, RichText, Stroke, Ui, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub surface: Color32,
    pub card: Color32,
    pub surface_raised: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub accent_green: Color32,
    pub accent_red: Color32,
    pub accent_amber: Color32,
}

pub fn palette() -> Palette {
    Palette {
        surface: Color32::from_rgb(0x0a, 0x0a, 0x0a),
        card: Color32::from_rgb(0x11, 0x11, 0x11),
        surface_raised: Color32::from_rgb(0x1a, 0x1a, 0x1a),
        border: Color32::from_rgb(0x2e, 0x2e, 0x2e),
        text_primary: Color32::from_rgb(0xed, 0xed, 0xed),
        text_secondary: Color32::from_rgb(0xa0, 0xa0, 0xa0),
        text_muted: Color32::from_rgb(0x66, 0x66, 0x66),
        accent_green: Color32::from_rgb(0x27, 0xc9, 0x3f),
        accent_red: Color32::from_rgb(0xff, 0x4c, 0x4c),
        accent_amber: Color32::from_rgb(0xff, 0xbd, 0x2e),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.surface;
    visuals.panel_fill = palette.surface;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.surface;
    visuals.faint_bg_color = palette.surface_raised;
    visuals.error_fg_color = palette.accent_red;
    visuals.warn_fg_color = palette.accent_amber;
    visuals.selection.bg_fill = palette.surface_raised;
    visuals.selection.stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.surface;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_secondary);
    style_widget(&mut visuals.widgets.inactive, palette);
    style_widget(&mut visuals.widgets.hovered, palette);
    style_widget(&mut visuals.widgets.active, palette);
    style_widget(&mut visuals.widgets.open, palette);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn style_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.surface_raised;
    vis.weak_bg_fill = palette.surface_raised;
    vis.bg_stroke = Stroke::new(1.0, palette.border);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Container used by every card on the page.
pub fn card_frame() -> Frame {
    let palette = palette();
    Frame::NONE
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(16))
}

/// Tone of the footer status badge and inline badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Success,
    Warning,
    Error,
}

impl StatusTone {
    pub fn label(self) -> &'static str {
        match self {
            StatusTone::Idle => "Idle",
            StatusTone::Busy => "Busy",
            StatusTone::Info => "Info",
            StatusTone::Success => "OK",
            StatusTone::Warning => "Warning",
            StatusTone::Error => "Error",
        }
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Busy => palette.text_secondary,
        StatusTone::Info => palette.text_primary,
        StatusTone::Success => palette.accent_green,
        StatusTone::Warning => palette.accent_amber,
        StatusTone::Error => palette.accent_red,
    }
}

/// Small tinted pill with colored text, used for sentiment and churn labels.
pub fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::NONE
        .fill(color.gamma_multiply(0.16))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::symmetric(7, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(color).size(11.0));
        });
}

/// Muted chip used for key phrases and the CSV column hint.
pub fn chip(ui: &mut Ui, text: &str) {
    let palette = palette();
    Frame::NONE
        .fill(palette.surface_raised)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::symmetric(5, 1))
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(palette.text_secondary).size(11.0));
        });
}
