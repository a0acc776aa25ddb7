use eframe::egui;

// --- Sizing ---
pub const HEADING_SIZE: f32 = 18.0;
pub const MONO_SIZE: f32 = 12.0;
pub const PATH_INPUT_RESERVED: f32 = 160.0;
pub const DROP_ZONE_MARGIN: f32 = 12.0;
pub const DROP_ZONE_ROUNDING: f32 = 8.0;
pub const DROP_ZONE_STROKE: f32 = 2.0;

// --- Toast ---
pub const TOAST_MAX_WIDTH: f32 = 360.0;
pub const TOAST_OFFSET: f32 = 16.0;

// --- Colors ---
pub const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(248, 113, 113);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(127, 29, 29);
pub const SUCCESS_COLOR: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(20, 83, 45);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

// --- Helper functions ---

pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Centered icon + title block used at the top of non-image previews.
pub fn preview_title(ui: &mut egui::Ui, title: &str) {
    ui.add_space(20.0);
    ui.label(egui::RichText::new(title).size(HEADING_SIZE));
    ui.add_space(10.0);
}
