// Panel rendering: top bar, info panel, drop zone and toast

use crate::app::PreviewApp;
use crate::state::Notification;
use crate::style;
use crate::view::preview::{self, PreviewContext};
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;

impl PreviewApp {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("File:");
                let response = ui.add_sized(
                    [
                        (ui.available_width() - style::PATH_INPUT_RESERVED).max(100.0),
                        ui.spacing().interact_size.y,
                    ],
                    egui::TextEdit::singleline(&mut self.widget.ui.path_input)
                        .hint_text("Path to a file"),
                );
                let submitted =
                    response.lost_focus() && ctx.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Open").clicked() || submitted {
                    let path = PathBuf::from(self.widget.ui.path_input.trim());
                    self.open_path(ctx, path);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme = self.widget.theme();
                    if ui
                        .button(egui::RichText::new(theme.toggle_icon()).size(16.0))
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        self.toggle_theme(ctx);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    pub(crate) fn render_info_panel(&mut self, ctx: &egui::Context) {
        let Some(info) = self.widget.info() else {
            return;
        };
        let mut remove = false;
        egui::TopBottomPanel::bottom("info_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                egui::Grid::new("info_grid").num_columns(2).show(ui, |ui| {
                    ui.label(egui::RichText::new("Name").strong());
                    style::truncated_label(ui, &info.name);
                    ui.end_row();
                    ui.label(egui::RichText::new("Type").strong());
                    style::truncated_label(ui, &info.file_type);
                    ui.end_row();
                    ui.label(egui::RichText::new("Size").strong());
                    ui.label(&info.size);
                    ui.end_row();
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑 Remove file").clicked() {
                        remove = true;
                    }
                });
            });
            ui.add_space(4.0);
        });
        if remove {
            self.remove_file(ctx);
        }
    }

    pub(crate) fn render_drop_zone(&mut self, ctx: &egui::Context) {
        let active = self.widget.ui.drop_active;
        egui::CentralPanel::default().show(ctx, |ui| {
            let stroke_color = if active {
                style::ACCENT
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            };
            let fill = if active {
                ui.visuals().extreme_bg_color
            } else {
                egui::Color32::TRANSPARENT
            };

            egui::Frame::new()
                .inner_margin(style::DROP_ZONE_MARGIN)
                .corner_radius(style::DROP_ZONE_ROUNDING)
                .stroke(egui::Stroke::new(style::DROP_ZONE_STROKE, stroke_color))
                .fill(fill)
                .show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    let context = PreviewContext {
                        syntax_set: &self.syntax_set,
                        theme_set: &self.theme_set,
                        theme: self.widget.theme(),
                        file: self.widget.selected(),
                        token: self.widget.generation(),
                        cache: &self.preview_cache,
                    };
                    preview::render_preview(ui, self.widget.preview(), &context);
                });
        });
    }

    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.widget.ui.clear_expired_messages(now);
        let Some(notification) = self.widget.ui.notification.clone() else {
            return;
        };
        show_toast(ctx, &notification);
        if let Some(remaining) = self.widget.ui.remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}

fn show_toast(ctx: &egui::Context, notification: &Notification) {
    let (fill, text) = if notification.is_error {
        (style::ERROR_COLOR, style::ERROR_TEXT)
    } else {
        (style::SUCCESS_COLOR, style::SUCCESS_TEXT)
    };
    egui::Area::new(egui::Id::new("toast"))
        .anchor(
            egui::Align2::RIGHT_BOTTOM,
            [-style::TOAST_OFFSET, -style::TOAST_OFFSET],
        )
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(fill)
                .corner_radius(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.set_max_width(style::TOAST_MAX_WIDTH);
                    ui.label(egui::RichText::new(&notification.text).color(text).strong());
                });
        });
}
