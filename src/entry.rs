use crate::classify::extension_of;
use crate::mime::declared_type_for;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where the contents of a selected file come from.
#[derive(Clone, Debug)]
pub enum FileSource {
    Path(PathBuf),
    /// Contents delivered with a drop when the platform gives no path.
    Bytes(Arc<[u8]>),
}

/// The currently loaded file.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    /// Declared MIME type, possibly empty.
    pub declared_type: String,
    pub size: u64,
    pub extension: String,
    pub source: FileSource,
}

impl SelectedFile {
    pub fn new(name: String, declared_type: String, size: u64, source: FileSource) -> Self {
        let extension = extension_of(&name);
        let declared_type = if declared_type.is_empty() {
            declared_type_for(&extension).to_string()
        } else {
            declared_type
        };
        Self {
            name,
            declared_type,
            size,
            extension,
            source,
        }
    }

    pub fn from_path(path: PathBuf) -> Option<Self> {
        let metadata = fs::metadata(&path).ok()?;
        if metadata.is_dir() {
            return None;
        }
        let name = path.file_name()?.to_string_lossy().to_string();
        Some(Self::new(
            name,
            String::new(),
            metadata.len(),
            FileSource::Path(path),
        ))
    }

    /// Build from a dropped file; prefers the path, falls back to inline bytes.
    pub fn from_dropped(file: &eframe::egui::DroppedFile) -> Option<Self> {
        if let Some(path) = &file.path {
            let mut selected = Self::from_path(path.clone())?;
            if !file.mime.is_empty() {
                selected.declared_type = file.mime.clone();
            }
            return Some(selected);
        }
        let bytes = file.bytes.clone()?;
        Some(Self::new(
            file.name.clone(),
            file.mime.clone(),
            bytes.len() as u64,
            FileSource::Bytes(bytes),
        ))
    }

    /// Type shown in the info panel.
    pub fn display_type(&self) -> &str {
        if self.declared_type.is_empty() {
            "Unknown"
        } else {
            &self.declared_type
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Bytes(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_declared_type_from_extension() {
        let file = SelectedFile::new(
            "Photo.JPG".to_string(),
            String::new(),
            10,
            FileSource::Bytes(Arc::from(vec![0u8; 10])),
        );
        assert_eq!(file.extension, "jpg");
        assert_eq!(file.declared_type, "image/jpeg");
    }

    #[test]
    fn test_unknown_type_display() {
        let file = SelectedFile::new(
            "lyrics.lrc".to_string(),
            String::new(),
            0,
            FileSource::Bytes(Arc::from(Vec::new())),
        );
        assert_eq!(file.display_type(), "Unknown");
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        let mut f = fs::File::create(&path).expect("create");
        f.write_all(b"hello").expect("write");

        let file = SelectedFile::from_path(path.clone()).expect("file");
        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.size, 5);
        assert_eq!(file.declared_type, "text/plain");
        assert_eq!(file.path(), Some(path.as_path()));

        assert!(SelectedFile::from_path(dir.path().to_path_buf()).is_none());
    }
}
