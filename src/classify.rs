// File classification
//
// One function decides the category of a file. Both the read mode and the
// preview that gets built are derived from its result, so the two can't drift.

/// Extensions previewed as text even when no text type is declared.
const TEXT_EXTENSIONS: &[&str] = &["lrc", "srt", "txt"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    RejectedExecutable,
    /// Carries the declared type, or the extension when no type was declared.
    RejectedUnsupported(String),
}

/// How the file contents are handed to the preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadMode {
    Text,
    DataUrl,
}

impl Classification {
    /// Read mode for accepted files, `None` for rejections.
    pub fn read_mode(&self) -> Option<ReadMode> {
        match self {
            Self::Text => Some(ReadMode::Text),
            Self::Image | Self::Video | Self::Audio | Self::Pdf => Some(ReadMode::DataUrl),
            Self::RejectedExecutable | Self::RejectedUnsupported(_) => None,
        }
    }
}

/// Lowercased text after the last `.` of `name`, empty when there is none.
pub fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

fn is_text_like(declared_type: &str, extension: &str) -> bool {
    declared_type.starts_with("text/")
        || declared_type == "application/json"
        || declared_type == "application/xml"
        || TEXT_EXTENSIONS.contains(&extension)
}

fn is_executable(declared_type: &str, name: &str) -> bool {
    declared_type.contains("octet-stream")
        || declared_type.contains("msdownload")
        || name.to_lowercase().ends_with(".exe")
}

/// Classify a file by declared type, falling back to the extension for text.
pub fn classify(declared_type: &str, name: &str, extension: &str) -> Classification {
    if declared_type.starts_with("image/") {
        Classification::Image
    } else if declared_type.starts_with("video/") {
        Classification::Video
    } else if declared_type.starts_with("audio/") {
        Classification::Audio
    } else if declared_type == "application/pdf" {
        Classification::Pdf
    } else if is_text_like(declared_type, extension) {
        Classification::Text
    } else if is_executable(declared_type, name) {
        Classification::RejectedExecutable
    } else {
        let label = if !declared_type.is_empty() {
            declared_type.to_string()
        } else if !extension.is_empty() {
            extension.to_string()
        } else {
            "unknown".to_string()
        };
        Classification::RejectedUnsupported(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_name(declared_type: &str, name: &str) -> Classification {
        classify(declared_type, name, &extension_of(name))
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.PNG"), "png");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn test_media_types() {
        assert_eq!(classify_name("image/png", "a.png"), Classification::Image);
        assert_eq!(classify_name("video/mp4", "a.mp4"), Classification::Video);
        assert_eq!(classify_name("audio/mpeg", "a.mp3"), Classification::Audio);
        assert_eq!(classify_name("application/pdf", "a.pdf"), Classification::Pdf);
    }

    #[test]
    fn test_text_types_and_fallback_extensions() {
        assert_eq!(classify_name("text/plain", "notes"), Classification::Text);
        assert_eq!(classify_name("application/json", "a.json"), Classification::Text);
        assert_eq!(classify_name("application/xml", "a.xml"), Classification::Text);
        assert_eq!(classify_name("", "lyrics.lrc"), Classification::Text);
        assert_eq!(classify_name("", "movie.SRT"), Classification::Text);
        assert_eq!(classify_name("", "notes.txt"), Classification::Text);
    }

    #[test]
    fn test_executables_rejected() {
        assert_eq!(
            classify_name("application/x-msdownload", "setup.exe"),
            Classification::RejectedExecutable
        );
        assert_eq!(
            classify_name("application/octet-stream", "blob.bin"),
            Classification::RejectedExecutable
        );
        assert_eq!(classify_name("", "SETUP.EXE"), Classification::RejectedExecutable);
    }

    #[test]
    fn test_unsupported_label() {
        assert_eq!(
            classify_name("application/unknown-made-up", "x.made"),
            Classification::RejectedUnsupported("application/unknown-made-up".to_string())
        );
        assert_eq!(
            classify_name("", "data.parquet"),
            Classification::RejectedUnsupported("parquet".to_string())
        );
        assert_eq!(
            classify_name("", "Makefile"),
            Classification::RejectedUnsupported("unknown".to_string())
        );
    }

    #[test]
    fn test_read_mode_follows_classification() {
        assert_eq!(Classification::Text.read_mode(), Some(ReadMode::Text));
        assert_eq!(Classification::Image.read_mode(), Some(ReadMode::DataUrl));
        assert_eq!(Classification::Pdf.read_mode(), Some(ReadMode::DataUrl));
        assert_eq!(Classification::RejectedExecutable.read_mode(), None);
        assert_eq!(Classification::RejectedUnsupported("x".into()).read_mode(), None);
    }
}
