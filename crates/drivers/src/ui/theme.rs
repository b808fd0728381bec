use eframe::egui::{self, Color32, CornerRadius, Margin, Stroke, Visuals};

pub const COL_BG: Color32 = Color32::from_rgb(10, 10, 10);
pub const COL_PANEL: Color32 = Color32::from_rgb(26, 26, 26);
pub const COL_BORDER: Color32 = Color32::from_rgb(42, 42, 42);
pub const COL_GOLD: Color32 = Color32::from_rgb(212, 175, 55);
pub const COL_RED: Color32 = Color32::from_rgb(196, 30, 58);
pub const COL_TEXT: Color32 = Color32::from_rgb(240, 240, 240);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(176, 176, 176);
pub const COL_MUTED: Color32 = Color32::from_rgb(128, 128, 128);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_PANEL;
    visuals.panel_fill = COL_BG;
    visuals.override_text_color = Some(COL_TEXT);

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_PANEL;
    visuals.widgets.inactive.weak_bg_fill = COL_PANEL;

    visuals.widgets.hovered.bg_fill = COL_RED;
    visuals.widgets.hovered.weak_bg_fill = COL_RED;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_GOLD);

    visuals.widgets.active.bg_fill = COL_GOLD;
    visuals.widgets.active.weak_bg_fill = COL_GOLD;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_GOLD.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, COL_GOLD);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}

pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(COL_PANEL)
        .stroke(Stroke::new(1.0, COL_BORDER))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(14))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(COL_PANEL)
        .stroke(Stroke::new(3.0, COL_GOLD))
        .corner_radius(CornerRadius::same(14))
        .inner_margin(Margin::same(20))
}

pub fn note_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(COL_RED.linear_multiply(0.15))
        .stroke(Stroke::new(1.0, COL_GOLD.linear_multiply(0.6)))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(12))
}
