// Image preview handler

use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::widget::PreviewElement;
use eframe::egui;
use std::io::Cursor;

pub struct ImagePreviewHandler;

impl ImagePreviewHandler {
    fn dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
        image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .ok()?
            .into_dimensions()
            .ok()
    }

    /// Loader uri for a preview. The loaders pick a decoder from the uri's
    /// extension, which comes from the MIME type rather than the file name.
    fn uri(token: u64, mime: &str) -> String {
        let subtype = mime.strip_prefix("image/").unwrap_or(mime);
        let extension = subtype.split('+').next().unwrap_or(subtype);
        format!("bytes://preview/{}/image.{}", token, extension)
    }
}

impl PreviewHandler for ImagePreviewHandler {
    fn name(&self) -> &str {
        "image"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::Image { src, alt } = element else {
            return Err(wrong_element(self.name(), element));
        };

        let dimensions = *context
            .cache
            .borrow_mut()
            .image
            .get_or_insert_with(context.token, || Self::dimensions(src.bytes()));
        if let Some((width, height)) = dimensions {
            ui.label(egui::RichText::new(format!("{} × {} px", width, height)).weak());
        }

        let uri = Self::uri(context.token, src.mime());
        egui::ScrollArea::vertical()
            .id_salt("preview_img")
            .auto_shrink([false, false])
            .max_height(ui.available_height())
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width());
                let available = ui.available_size();
                ui.add(
                    egui::Image::from_bytes(uri, src.bytes().clone())
                        .max_width(available.x)
                        .max_height(available.y)
                        .maintain_aspect_ratio(true)
                        .shrink_to_fit(),
                )
                .on_hover_text(alt.as_str());
            });
        Ok(())
    }
}
