// Audio preview handler: ID3 metadata plus playback in the system player

use crate::format::format_bytes;
use crate::style;
use crate::view::preview::handler::{wrong_element, PreviewContext, PreviewHandler};
use crate::view::preview::playback_controls;
use crate::widget::PreviewElement;
use eframe::egui;
use id3::TagLike;
use std::io::Cursor;

/// ID3 fields shown on the audio card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AudioTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    /// MIME type and size of the first embedded picture
    pub picture: Option<(String, usize)>,
}

impl AudioTags {
    pub fn read(bytes: &[u8]) -> Result<Self, String> {
        let tag = id3::Tag::read_from2(Cursor::new(bytes)).map_err(|e| e.to_string())?;
        let tags = Self {
            title: tag.title().map(str::to_string),
            artist: tag.artist().map(str::to_string),
            album: tag.album().map(str::to_string),
            year: tag.year(),
            genre: tag.genre().map(str::to_string),
            picture: tag
                .pictures()
                .next()
                .map(|p| (p.mime_type.clone(), p.data.len())),
        };
        Ok(tags)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(format!("Title: {}", title));
        }
        if let Some(artist) = &self.artist {
            lines.push(format!("Artist: {}", artist));
        }
        if let Some(album) = &self.album {
            lines.push(format!("Album: {}", album));
        }
        if let Some(year) = self.year {
            lines.push(format!("Year: {}", year));
        }
        if let Some(genre) = &self.genre {
            lines.push(format!("Genre: {}", genre));
        }
        if let Some((mime, size)) = &self.picture {
            lines.push(format!("Album art: {} ({})", mime, format_bytes(*size as u64, 2)));
        }
        lines
    }
}

pub struct AudioPreviewHandler;

impl PreviewHandler for AudioPreviewHandler {
    fn name(&self) -> &str {
        "audio"
    }

    fn render(
        &self,
        ui: &mut egui::Ui,
        element: &PreviewElement,
        context: &PreviewContext,
    ) -> Result<(), String> {
        let PreviewElement::Audio { src, controls } = element else {
            return Err(wrong_element(self.name(), element));
        };

        let tags = (src.mime() == "audio/mpeg").then(|| {
            context
                .cache
                .borrow_mut()
                .audio
                .get_or_insert_with(context.token, || AudioTags::read(src.bytes()))
                .clone()
        });

        let mut result = Ok(());
        ui.vertical_centered(|ui| {
            style::preview_title(ui, "🎵 Audio");
            ui.label(format!("{} · {}", src.mime(), format_bytes(src.bytes().len() as u64, 2)));
            ui.add_space(10.0);

            match tags {
                Some(Ok(tags)) => {
                    for line in tags.lines() {
                        ui.label(line);
                    }
                    ui.add_space(10.0);
                }
                Some(Err(e)) => {
                    ui.label(egui::RichText::new(format!("No ID3 tags: {}", e)).italics().weak());
                    ui.add_space(10.0);
                }
                None => {}
            }

            if *controls {
                result = playback_controls(ui, context);
            }
        });
        result
    }
}
