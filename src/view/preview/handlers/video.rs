// Video preview handler

use crate::format::format_bytes;
use crate::style;
use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::view::preview::playback_controls;
use crate::widget::PreviewElement;
use eframe::egui;

pub struct VideoPreviewHandler;

impl PreviewHandler for VideoPreviewHandler {
    fn name(&self) -> &str {
        "video"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::Video { src, controls } = element else {
            return Err(wrong_element(self.name(), element));
        };

        let mut result = Ok(());
        ui.vertical_centered(|ui| {
            style::preview_title(ui, "🎬 Video");
            ui.label(format!("{} · {}", src.mime(), format_bytes(src.bytes().len() as u64, 2)));
            ui.add_space(10.0);
            if *controls {
                result = playback_controls(ui, context);
            }
        });
        result
    }
}
