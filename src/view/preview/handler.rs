// Preview handler trait and context shared by all handlers

use super::cache::PreviewCache;
use crate::entry::SelectedFile;
use crate::theme::ThemeMode;
use crate::widget::PreviewElement;
use eframe::egui;
use syntect::highlighting::ThemeSet;
use std::cell::RefCell;
use syntect::parsing::SyntaxSet;

/// Context passed to preview handlers containing shared resources
pub struct PreviewContext<'a> {
    pub syntax_set: &'a SyntaxSet,
    pub theme_set: &'a ThemeSet,
    pub theme: ThemeMode,
    /// The file the element was built from
    pub file: Option<&'a SelectedFile>,
    /// Generation token of the read that produced the element
    pub token: u64,
    /// Metadata extracted for the current load
    pub cache: &'a RefCell<PreviewCache>,
}

/// Renders one kind of preview element.
pub trait PreviewHandler: Send + Sync {
    /// Name of this handler (for error messages and logs)
    fn name(&self) -> &str;

    /// Render the element into the preview area.
    ///
    /// Returns Err(message) when the element can't be drawn; the caller shows
    /// the message in place of the preview.
    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String>;
}

pub(super) fn wrong_element(handler: &str, element: &PreviewElement) -> String {
    format!("{} handler can't render {:?}", handler, std::mem::discriminant(element))
}
