// Text preview handler with syntax highlighting

use crate::style;
use crate::theme::ThemeMode;
use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::widget::PreviewElement;
use eframe::egui;
use syntect::easy::HighlightLines;
use syntect::highlighting::Theme;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

pub struct TextPreviewHandler;

impl TextPreviewHandler {
    /// Maximum number of lines to syntax-highlight for performance.
    /// Lines past this are still shown, in the plain text color.
    const MAX_HIGHLIGHTED_LINES: usize = 1000;

    fn mono(color: egui::Color32) -> egui::TextFormat {
        egui::TextFormat {
            font_id: egui::FontId::monospace(style::MONO_SIZE),
            color,
            ..Default::default()
        }
    }

    /// Lay out the whole file: highlighted up to the limit, plain after it.
    fn layout(
        content: &str,
        syntax: &SyntaxReference,
        theme: &Theme,
        syntax_set: &SyntaxSet,
        plain: egui::Color32,
    ) -> egui::text::LayoutJob {
        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut job = egui::text::LayoutJob::default();
        let mut highlighted_len = 0;

        for line in LinesWithEndings::from(content).take(Self::MAX_HIGHLIGHTED_LINES) {
            highlighted_len += line.len();
            match highlighter.highlight_line(line, syntax_set) {
                Ok(ranges) => {
                    for (highlight, text) in ranges {
                        let color = egui::Color32::from_rgb(
                            highlight.foreground.r,
                            highlight.foreground.g,
                            highlight.foreground.b,
                        );
                        job.append(text, 0.0, Self::mono(color));
                    }
                }
                Err(_) => job.append(line, 0.0, Self::mono(plain)),
            }
        }

        let rest = &content[highlighted_len..];
        if !rest.is_empty() {
            job.append(rest, 0.0, Self::mono(plain));
        }
        job
    }
}

impl PreviewHandler for TextPreviewHandler {
    fn name(&self) -> &str {
        "text"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::Text { content } = element else {
            return Err(wrong_element(self.name(), element));
        };

        let extension = context.file.map(|f| f.extension.as_str()).unwrap_or("");
        let syntax = context
            .syntax_set
            .find_syntax_by_extension(extension)
            .or_else(|| context.syntax_set.find_syntax_by_first_line(content))
            .unwrap_or_else(|| context.syntax_set.find_syntax_plain_text());

        let theme_name = if context.theme == ThemeMode::Dark {
            "base16-ocean.dark"
        } else {
            "base16-ocean.light"
        };
        let theme = context
            .theme_set
            .themes
            .get(theme_name)
            .ok_or_else(|| format!("Missing highlight theme {}", theme_name))?;

        let total_lines = content.lines().count();
        if total_lines > Self::MAX_HIGHLIGHTED_LINES {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").color(egui::Color32::YELLOW));
                ui.label(
                    egui::RichText::new(format!(
                        "Large file: syntax highlighting limited to the first {} of {} lines",
                        Self::MAX_HIGHLIGHTED_LINES,
                        total_lines
                    ))
                    .italics(),
                );
            });
            ui.separator();
        }

        let plain = ui.visuals().text_color();
        egui::ScrollArea::both()
            .id_salt("preview_text")
            .auto_shrink([false, false])
            .max_height(ui.available_height())
            .show(ui, |ui| {
                ui.label(Self::layout(content, syntax, theme, context.syntax_set, plain));
            });

        Ok(())
    }
}
