// Error text shown in place of a preview

use crate::style;
use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::widget::PreviewElement;
use eframe::egui;

pub struct ErrorTextHandler;

impl PreviewHandler for ErrorTextHandler {
    fn name(&self) -> &str {
        "error"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        _context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::ErrorText { text } = element else {
            return Err(wrong_element(self.name(), element));
        };
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new(text).color(style::ERROR_COLOR).strong());
        });
        Ok(())
    }
}
