// File preview widget state
//
// Owns the selected file, the preview slot, the theme store and the
// notification state. Rendering lives in `view`; this module only decides
// what is shown.

use crate::classify::{classify, Classification};
use crate::data_url::DataUrl;
use crate::entry::SelectedFile;
use crate::format::format_bytes;
use crate::io::worker::{ReadOutcome, ReadRequest};
use crate::io::FileContent;
use crate::state::UIState;
use crate::theme::{ThemeMode, ThemeStorage, ThemeStore};

pub const EXECUTABLE_PREVIEW_TEXT: &str = "For security, executable files cannot be previewed.";
pub const EXECUTABLE_MESSAGE: &str = "Executable files cannot be previewed.";
pub const LOADED_MESSAGE: &str = "File loaded successfully!";
pub const UNREADABLE_MESSAGE: &str = "Not a readable file";

/// The single node living in the preview area.
#[derive(Clone, Debug, PartialEq)]
pub enum PreviewElement {
    Image { src: DataUrl, alt: String },
    Video { src: DataUrl, controls: bool },
    Audio { src: DataUrl, controls: bool },
    /// Embedded document frame, used for PDFs
    Frame { src: DataUrl, title: String },
    Text { content: String },
    ErrorText { text: String },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PreviewSlot {
    Placeholder,
    Loading,
    Element(PreviewElement),
}

/// How a file reached the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOrigin {
    Picker,
    Drop,
}

/// Text fields of the info panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub file_type: String,
    pub size: String,
}

pub struct FilePreviewWidget<S: ThemeStorage> {
    theme: ThemeStore<S>,
    pub ui: UIState,
    selected: Option<SelectedFile>,
    classification: Option<Classification>,
    preview: PreviewSlot,
    generation: u64,
}

fn build_element(
    classification: &Classification,
    content: FileContent,
) -> Result<PreviewElement, String> {
    match (classification, content) {
        (Classification::Image, FileContent::DataUrl(src)) => Ok(PreviewElement::Image {
            src,
            alt: "Image Preview".to_string(),
        }),
        (Classification::Video, FileContent::DataUrl(src)) => Ok(PreviewElement::Video {
            src,
            controls: true,
        }),
        (Classification::Audio, FileContent::DataUrl(src)) => Ok(PreviewElement::Audio {
            src,
            controls: true,
        }),
        (Classification::Pdf, FileContent::DataUrl(src)) => Ok(PreviewElement::Frame {
            src,
            title: "PDF Preview".to_string(),
        }),
        (Classification::Text, FileContent::Text(content)) => Ok(PreviewElement::Text { content }),
        (
            Classification::Image | Classification::Video | Classification::Audio | Classification::Pdf,
            FileContent::Text(_),
        )
        | (Classification::Text, FileContent::DataUrl(_)) => {
            Err("File was read in the wrong format for its type".to_string())
        }
        (Classification::RejectedExecutable | Classification::RejectedUnsupported(_), _) => {
            Err("File type cannot be previewed".to_string())
        }
    }
}

impl<S: ThemeStorage> FilePreviewWidget<S> {
    pub fn new(theme: ThemeStore<S>, message_timeout_secs: u64) -> Self {
        Self {
            theme,
            ui: UIState::new(message_timeout_secs),
            selected: None,
            classification: None,
            preview: PreviewSlot::Placeholder,
            generation: 0,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> &PreviewSlot {
        &self.preview
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Info panel and remove control are shown iff a file is loaded.
    pub fn info_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn info(&self) -> Option<FileInfo> {
        self.selected.as_ref().map(|file| FileInfo {
            name: file.name.clone(),
            file_type: file.display_type().to_string(),
            size: format_bytes(file.size, 2),
        })
    }

    pub fn show_message(&mut self, text: impl Into<String>, is_error: bool) {
        self.ui.show_message(text, is_error);
    }

    /// Flip the theme and persist it. A failed save is reported but the
    /// mode still changes.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        if let Err(e) = self.theme.toggle() {
            log::warn!("Failed to save theme preference: {}", e);
            self.show_message(format!("Could not save theme: {}", e), true);
        }
        self.theme.get()
    }

    fn next_token(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn reject(&mut self, preview_text: String, message: String) {
        self.next_token();
        self.selected = None;
        self.classification = None;
        self.preview = PreviewSlot::Element(PreviewElement::ErrorText { text: preview_text });
        self.show_message(message, true);
    }

    /// Load a new file. Returns the read to dispatch when the file is accepted.
    pub fn select_file(
        &mut self,
        file: Option<SelectedFile>,
        origin: SelectOrigin,
    ) -> Option<ReadRequest> {
        let file = file?;
        let classification = classify(&file.declared_type, &file.name, &file.extension);
        log::info!(
            "Selected {} ({}, {} bytes) -> {:?}",
            file.name,
            file.display_type(),
            file.size,
            classification
        );

        let mode = match classification.read_mode() {
            Some(mode) => mode,
            None => {
                match &classification {
                    Classification::RejectedUnsupported(label) => self.reject(
                        format!("Unsupported file type: {}", label),
                        format!("Unsupported file type: {}. Please try another file.", label),
                    ),
                    _ => self.reject(
                        EXECUTABLE_PREVIEW_TEXT.to_string(),
                        EXECUTABLE_MESSAGE.to_string(),
                    ),
                }
                return None;
            }
        };

        let token = self.next_token();
        let request = ReadRequest {
            token,
            source: file.source.clone(),
            mode,
            mime: file.declared_type.clone(),
        };
        self.selected = Some(file);
        self.classification = Some(classification);
        self.preview = PreviewSlot::Loading;
        if origin == SelectOrigin::Drop {
            self.show_message(LOADED_MESSAGE, false);
        }
        Some(request)
    }

    /// Load a dropped file. `None` means the drop carried nothing readable,
    /// such as a directory, and is reported rather than ignored.
    pub fn select_dropped(&mut self, file: Option<SelectedFile>) -> Option<ReadRequest> {
        if file.is_none() {
            log::warn!("Dropped item is not a readable file");
            self.show_message(UNREADABLE_MESSAGE, true);
            return None;
        }
        self.select_file(file, SelectOrigin::Drop)
    }

    /// Apply a finished read. Returns false when the outcome is stale.
    pub fn complete_read(&mut self, outcome: ReadOutcome) -> bool {
        if outcome.token != self.generation {
            log::debug!(
                "Discarding stale read #{} (current #{})",
                outcome.token,
                self.generation
            );
            return false;
        }
        let Some(classification) = &self.classification else {
            return false;
        };

        let element = outcome
            .result
            .and_then(|content| build_element(classification, content));
        match element {
            Ok(element) => self.preview = PreviewSlot::Element(element),
            Err(e) => {
                log::warn!("Preview failed: {}", e);
                self.preview = PreviewSlot::Element(PreviewElement::ErrorText {
                    text: format!("Could not preview file: {}", e),
                });
                self.show_message(format!("Could not read file: {}", e), true);
            }
        }
        true
    }

    /// Clear the current file and restore the placeholder.
    pub fn remove_file(&mut self) {
        self.next_token();
        self.selected = None;
        self.classification = None;
        self.preview = PreviewSlot::Placeholder;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ReadMode;
    use crate::entry::FileSource;
    use crate::io::read_file;
    use crate::theme::MemoryStorage;
    use eframe::egui;
    use std::sync::Arc;

    fn widget() -> FilePreviewWidget<MemoryStorage> {
        let store = ThemeStore::initialize(MemoryStorage::default(), None);
        FilePreviewWidget::new(store, 3)
    }

    fn file(name: &str, declared_type: &str, contents: &[u8]) -> SelectedFile {
        SelectedFile::new(
            name.to_string(),
            declared_type.to_string(),
            contents.len() as u64,
            FileSource::Bytes(Arc::from(contents.to_vec())),
        )
    }

    /// Run a request synchronously the way the worker would.
    fn run(request: ReadRequest) -> ReadOutcome {
        let result = read_file(&request.source, request.mode, &request.mime, u64::MAX)
            .map_err(|e| e.to_string());
        ReadOutcome {
            token: request.token,
            result,
        }
    }

    fn load(widget: &mut FilePreviewWidget<MemoryStorage>, file: SelectedFile) {
        let request = widget
            .select_file(Some(file), SelectOrigin::Picker)
            .expect("file accepted");
        assert!(widget.complete_read(run(request)));
    }

    fn error_text(widget: &FilePreviewWidget<MemoryStorage>) -> &str {
        match widget.preview() {
            PreviewSlot::Element(PreviewElement::ErrorText { text }) => text,
            other => panic!("expected error text, got {:?}", other),
        }
    }

    #[test]
    fn test_none_is_noop() {
        let mut w = widget();
        assert!(w.select_file(None, SelectOrigin::Picker).is_none());
        assert_eq!(w.preview(), &PreviewSlot::Placeholder);
        assert_eq!(w.generation(), 0);
        assert!(w.ui.notification.is_none());
    }

    #[test]
    fn test_png_becomes_image_data_url() {
        let mut w = widget();
        load(&mut w, file("pic.png", "image/png", &[0x89, b'P', b'N', b'G']));
        match w.preview() {
            PreviewSlot::Element(PreviewElement::Image { src, alt }) => {
                assert!(src.to_string().starts_with("data:image/png;base64,"));
                assert_eq!(alt, "Image Preview");
            }
            other => panic!("expected image, got {:?}", other),
        }
        assert!(w.info_visible());
    }

    #[test]
    fn test_lrc_read_as_text() {
        let mut w = widget();
        let lyrics = "[00:12.00]Line one\n[00:17.20]Line two";
        let request = w
            .select_file(Some(file("lyrics.lrc", "", lyrics.as_bytes())), SelectOrigin::Picker)
            .expect("accepted");
        assert_eq!(request.mode, ReadMode::Text);
        assert!(w.complete_read(run(request)));
        assert_eq!(
            w.preview(),
            &PreviewSlot::Element(PreviewElement::Text {
                content: lyrics.to_string()
            })
        );
        let info = w.info().expect("info");
        assert_eq!(info.file_type, "Unknown");
    }

    #[test]
    fn test_media_elements_have_controls() {
        let mut w = widget();
        load(&mut w, file("clip.mp4", "video/mp4", b"....ftyp"));
        assert!(matches!(
            w.preview(),
            PreviewSlot::Element(PreviewElement::Video { controls: true, .. })
        ));
        load(&mut w, file("song.mp3", "audio/mpeg", b"ID3"));
        assert!(matches!(
            w.preview(),
            PreviewSlot::Element(PreviewElement::Audio { controls: true, .. })
        ));
        load(&mut w, file("doc.pdf", "application/pdf", b"%PDF-1.4"));
        assert!(matches!(
            w.preview(),
            PreviewSlot::Element(PreviewElement::Frame { .. })
        ));
    }

    #[test]
    fn test_executable_rejected_before_info_is_shown() {
        let mut w = widget();
        let request = w.select_file(
            Some(file("setup.exe", "application/x-msdownload", b"MZ")),
            SelectOrigin::Picker,
        );
        assert!(request.is_none());
        assert!(error_text(&w).contains("security"));
        let n = w.ui.notification.as_ref().expect("notification");
        assert!(n.is_error);
        assert_eq!(n.text, EXECUTABLE_MESSAGE);
        assert!(!w.info_visible());
        assert!(w.info().is_none());
    }

    #[test]
    fn test_unsupported_type_is_named() {
        let mut w = widget();
        let request = w.select_file(
            Some(file("x.made", "application/unknown-made-up", b"??")),
            SelectOrigin::Picker,
        );
        assert!(request.is_none());
        assert!(error_text(&w).contains("application/unknown-made-up"));
        let n = w.ui.notification.as_ref().expect("notification");
        assert!(n.is_error);
        assert!(n.text.contains("application/unknown-made-up"));
        assert!(!w.info_visible());
    }

    #[test]
    fn test_rejection_clears_previous_file() {
        let mut w = widget();
        load(&mut w, file("notes.txt", "text/plain", b"hi"));
        assert!(w.info_visible());
        w.select_file(Some(file("setup.exe", "", b"MZ")), SelectOrigin::Picker);
        assert!(!w.info_visible());
    }

    #[test]
    fn test_info_fields() {
        let mut w = widget();
        load(&mut w, file("data.json", "application/json", &[b' '; 1536]));
        assert_eq!(
            w.info(),
            Some(FileInfo {
                name: "data.json".to_string(),
                file_type: "application/json".to_string(),
                size: "1.5 KB".to_string(),
            })
        );
    }

    #[test]
    fn test_stale_read_is_discarded() {
        let mut w = widget();
        let slow = w
            .select_file(Some(file("a.txt", "text/plain", b"old")), SelectOrigin::Picker)
            .expect("accepted");
        let fast = w
            .select_file(Some(file("b.txt", "text/plain", b"new")), SelectOrigin::Picker)
            .expect("accepted");

        assert!(w.complete_read(run(fast)));
        assert!(!w.complete_read(run(slow)));
        assert_eq!(
            w.preview(),
            &PreviewSlot::Element(PreviewElement::Text {
                content: "new".to_string()
            })
        );
        assert_eq!(w.selected().map(|f| f.name.as_str()), Some("b.txt"));
    }

    #[test]
    fn test_read_after_remove_is_discarded() {
        let mut w = widget();
        let request = w
            .select_file(Some(file("a.txt", "text/plain", b"x")), SelectOrigin::Picker)
            .expect("accepted");
        w.remove_file();
        assert!(!w.complete_read(run(request)));
        assert_eq!(w.preview(), &PreviewSlot::Placeholder);
    }

    #[test]
    fn test_remove_restores_placeholder() {
        let mut w = widget();
        load(&mut w, file("pic.png", "image/png", b"png"));
        w.remove_file();
        assert_eq!(w.preview(), &PreviewSlot::Placeholder);
        assert!(!w.info_visible());
        assert!(w.selected().is_none());
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut w = widget();
        let request = w
            .select_file(Some(file("a.txt", "text/plain", b"x")), SelectOrigin::Picker)
            .expect("accepted");
        let outcome = ReadOutcome {
            token: request.token,
            result: Err("disk on fire".to_string()),
        };
        assert!(w.complete_read(outcome));
        assert!(error_text(&w).contains("disk on fire"));
        assert!(w.ui.notification.as_ref().expect("notification").is_error);
    }

    #[test]
    fn test_mismatched_content_is_rejected() {
        let mut w = widget();
        let request = w
            .select_file(Some(file("pic.png", "image/png", b"x")), SelectOrigin::Picker)
            .expect("accepted");
        let outcome = ReadOutcome {
            token: request.token,
            result: Ok(FileContent::Text("x".to_string())),
        };
        assert!(w.complete_read(outcome));
        assert!(matches!(
            w.preview(),
            PreviewSlot::Element(PreviewElement::ErrorText { .. })
        ));
    }

    #[test]
    fn test_drop_shows_success_message() {
        let mut w = widget();
        w.select_file(Some(file("notes.txt", "text/plain", b"hi")), SelectOrigin::Drop);
        let n = w.ui.notification.as_ref().expect("notification");
        assert_eq!(n.text, LOADED_MESSAGE);
        assert!(!n.is_error);
    }

    #[test]
    fn test_unreadable_drop_is_reported() {
        let mut w = widget();
        load(&mut w, file("notes.txt", "text/plain", b"hi"));
        let generation = w.generation();

        let dir = tempfile::tempdir().expect("tempdir");
        let dropped = egui::DroppedFile {
            path: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(w.select_dropped(SelectedFile::from_dropped(&dropped)).is_none());

        let n = w.ui.notification.as_ref().expect("notification");
        assert_eq!(n.text, UNREADABLE_MESSAGE);
        assert!(n.is_error);
        assert_eq!(w.generation(), generation);
        assert!(w.info_visible());
    }

    #[test]
    fn test_toggle_theme_twice() {
        let mut w = widget();
        let original = w.theme();
        assert_eq!(w.toggle_theme(), original.toggle());
        assert_eq!(w.toggle_theme(), original);
    }
}
