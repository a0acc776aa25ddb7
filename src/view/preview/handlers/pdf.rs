// PDF preview handler

use crate::format::format_bytes;
use crate::style;
use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::view::preview::playback_controls;
use crate::widget::PreviewElement;
use eframe::egui;
use lopdf::{Dictionary, Document as PdfDocument};

/// Document facts shown on the PDF card. Every field is optional so an
/// unparseable file still gets a card and an open button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfSummary {
    pub pages: Option<usize>,
    pub title: Option<String>,
    pub author: Option<String>,
}

fn info_string(info: &Dictionary, key: &[u8]) -> Option<String> {
    let bytes = info.get(key).ok()?.as_str().ok()?;
    let text = String::from_utf8(bytes.to_vec()).ok()?;
    (!text.is_empty()).then_some(text)
}

impl PdfSummary {
    pub fn extract(bytes: &[u8]) -> Self {
        let doc = match PdfDocument::load_mem(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!("Failed to load PDF metadata: {}", e);
                return Self::default();
            }
        };
        let mut summary = Self {
            pages: Some(doc.get_pages().len()),
            ..Default::default()
        };

        let info = doc
            .trailer
            .get(b"Info")
            .and_then(|obj| obj.as_reference())
            .and_then(|id| doc.get_object(id))
            .and_then(|obj| obj.as_dict());
        if let Ok(info) = info {
            summary.title = info_string(info, b"Title");
            summary.author = info_string(info, b"Author");
        }
        summary
    }

    /// Card lines below the heading.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(pages) = self.pages {
            lines.push(format!("Pages: {}", pages));
        }
        if let Some(title) = &self.title {
            lines.push(format!("Title: {}", title));
        }
        if let Some(author) = &self.author {
            lines.push(format!("Author: {}", author));
        }
        if lines.is_empty() {
            lines.push("No metadata available".to_string());
        }
        lines
    }
}

pub struct PdfPreviewHandler;

impl PreviewHandler for PdfPreviewHandler {
    fn name(&self) -> &str {
        "pdf"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::Frame { src, title } = element else {
            return Err(wrong_element(self.name(), element));
        };

        let lines = context
            .cache
            .borrow_mut()
            .pdf
            .get_or_insert_with(context.token, || PdfSummary::extract(src.bytes()))
            .lines();

        let mut result = Ok(());
        ui.vertical_centered(|ui| {
            style::preview_title(ui, &format!("📕 {}", title));
            ui.label(format!("Size: {}", format_bytes(src.bytes().len() as u64, 2)));
            ui.add_space(5.0);
            for line in &lines {
                ui.label(line);
            }
            ui.add_space(10.0);
            result = playback_controls(ui, context);
        });
        result
    }
}
