// src/tiles.rs
use crate::sim::VitalStatus;
use eframe::egui;
use egui::{Color32, Rounding, Stroke, Vec2};

const CARD_FILL: Color32 = Color32::from_rgb(22, 24, 30);
const LABEL_COLOR: Color32 = Color32::from_rgb(160, 165, 175);
const NORMAL_ACCENT: Color32 = Color32::from_rgb(80, 220, 140);
const ABNORMAL_ACCENT: Color32 = Color32::from_rgb(235, 80, 80);

/// One numeric dashboard card. The border and value pick up the
/// classification color, so an excursion is visible at a glance.
pub fn draw_vital_tile(
    ui: &mut egui::Ui,
    label: &str,
    value_text: &str,
    unit: &str,
    status: VitalStatus,
) {
    let accent = if status.is_abnormal() {
        ABNORMAL_ACCENT
    } else {
        NORMAL_ACCENT
    };

    let size = Vec2::new(180.0, 110.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    // 1. Card body
    painter.rect_filled(rect, Rounding::same(10.0), CARD_FILL);
    painter.rect_stroke(rect, Rounding::same(10.0), Stroke::new(2.0, accent));

    // 2. Metric label
    painter.text(
        rect.min + Vec2::new(12.0, 10.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(13.0),
        LABEL_COLOR,
    );

    // 3. Big value
    painter.text(
        rect.center() + Vec2::new(0.0, 6.0),
        egui::Align2::CENTER_CENTER,
        value_text,
        egui::FontId::proportional(34.0),
        accent,
    );

    // 4. Unit, bottom-right
    painter.text(
        rect.max - Vec2::new(12.0, 8.0),
        egui::Align2::RIGHT_BOTTOM,
        unit,
        egui::FontId::proportional(12.0),
        LABEL_COLOR,
    );
}
