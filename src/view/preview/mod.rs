// Preview area
//
// Each PreviewElement variant has exactly one handler; `handler_for` matches
// exhaustively so adding a variant without a handler fails to compile.

mod cache;
mod handler;
mod handlers;

pub use cache::PreviewCache;
pub use handler::{PreviewContext, PreviewHandler};
use handlers::*;

use crate::widget::{PreviewElement, PreviewSlot};
use eframe::egui;

pub const PLACEHOLDER_TITLE: &str = "📂 No file selected";
pub const PLACEHOLDER_HINT: &str = "Drop a file here or open one from the bar above";

static IMAGE: ImagePreviewHandler = ImagePreviewHandler;
static VIDEO: VideoPreviewHandler = VideoPreviewHandler;
static AUDIO: AudioPreviewHandler = AudioPreviewHandler;
static PDF: PdfPreviewHandler = PdfPreviewHandler;
static TEXT: TextPreviewHandler = TextPreviewHandler;
static ERROR: ErrorTextHandler = ErrorTextHandler;

pub fn handler_for(element: &PreviewElement) -> &'static dyn PreviewHandler {
    match element {
        PreviewElement::Image { .. } => &IMAGE,
        PreviewElement::Video { .. } => &VIDEO,
        PreviewElement::Audio { .. } => &AUDIO,
        PreviewElement::Frame { .. } => &PDF,
        PreviewElement::Text { .. } => &TEXT,
        PreviewElement::ErrorText { .. } => &ERROR,
    }
}

/// "Open externally" button for files that came from disk.
pub(crate) fn playback_controls(ui: &mut egui::Ui, context: &PreviewContext) -> Result<(), String> {
    match context.file.and_then(|f| f.path()) {
        Some(path) => {
            if ui.button("▶ Open in default application").clicked() {
                log::info!("Opening {} externally", path.display());
                open::that(path).map_err(|e| format!("Could not open file: {}", e))?;
            }
        }
        None => {
            ui.label(
                egui::RichText::new("Playback is only available for files opened from disk")
                    .italics()
                    .weak(),
            );
        }
    }
    Ok(())
}

fn render_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(egui::RichText::new(PLACEHOLDER_TITLE).size(crate::style::HEADING_SIZE));
            ui.add_space(10.0);
            ui.label(egui::RichText::new(PLACEHOLDER_HINT).weak());
        });
    });
}

/// Render whatever currently occupies the preview slot.
pub fn render_preview(ui: &mut egui::Ui, slot: &PreviewSlot, context: &PreviewContext) {
    match slot {
        PreviewSlot::Placeholder => render_placeholder(ui),
        PreviewSlot::Loading => {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        }
        PreviewSlot::Element(element) => {
            let handler = handler_for(element);
            if let Err(e) = handler.render(ui, element, context) {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("Preview error ({}): {}", handler.name(), e),
                );
            }
        }
    }
}
