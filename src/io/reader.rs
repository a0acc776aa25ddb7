use crate::classify::ReadMode;
use crate::data_url::DataUrl;
use crate::entry::FileSource;
use crate::error::{Error, Result};
use std::fs;
use std::sync::Arc;

/// Decoded file contents, shaped by the read mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    DataUrl(DataUrl),
}

fn load_bytes(source: &FileSource, limit: u64) -> Result<Arc<[u8]>> {
    match source {
        FileSource::Path(path) => {
            let size = fs::metadata(path)?.len();
            if size > limit {
                return Err(Error::TooLarge { size, limit });
            }
            Ok(Arc::from(fs::read(path)?))
        }
        FileSource::Bytes(bytes) => {
            let size = bytes.len() as u64;
            if size > limit {
                return Err(Error::TooLarge { size, limit });
            }
            Ok(bytes.clone())
        }
    }
}

/// Read a file as UTF-8 text (invalid sequences replaced) or as a data URL.
pub fn read_file(source: &FileSource, mode: ReadMode, mime: &str, limit: u64) -> Result<FileContent> {
    let bytes = load_bytes(source, limit)?;
    Ok(match mode {
        ReadMode::Text => FileContent::Text(String::from_utf8_lossy(&bytes).into_owned()),
        ReadMode::DataUrl => FileContent::DataUrl(DataUrl::new(mime, bytes)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 1024;

    #[test]
    fn test_read_text_from_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lyrics.lrc");
        fs::write(&path, "[00:01.00]hello").expect("write");

        let content = read_file(&FileSource::Path(path), ReadMode::Text, "", LIMIT).expect("read");
        assert_eq!(content, FileContent::Text("[00:01.00]hello".to_string()));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let source = FileSource::Bytes(Arc::from(vec![b'a', 0xff, b'b']));
        let content = read_file(&source, ReadMode::Text, "text/plain", LIMIT).expect("read");
        assert_eq!(content, FileContent::Text("a\u{fffd}b".to_string()));
    }

    #[test]
    fn test_read_data_url() {
        let source = FileSource::Bytes(Arc::from(vec![0x89, b'P', b'N', b'G']));
        let content = read_file(&source, ReadMode::DataUrl, "image/png", LIMIT).expect("read");
        match content {
            FileContent::DataUrl(url) => {
                assert!(url.to_string().starts_with("data:image/png;base64,"));
                assert_eq!(url.bytes().len(), 4);
            }
            other => panic!("expected data url, got {:?}", other),
        }
    }

    #[test]
    fn test_size_limit() {
        let source = FileSource::Bytes(Arc::from(vec![0u8; 16]));
        let err = read_file(&source, ReadMode::DataUrl, "image/png", 8).unwrap_err();
        assert!(matches!(err, Error::TooLarge { size: 16, limit: 8 }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = FileSource::Path(dir.path().join("gone.txt"));
        assert!(matches!(
            read_file(&source, ReadMode::Text, "", LIMIT),
            Err(Error::Io(_))
        ));
    }
}
