// Per-load cache for metadata extracted by preview handlers
//
// Handlers render every frame; parsing a PDF or an ID3 tag each time would
// stall the UI. Values are keyed by the generation token of the read that
// produced the element, so a new load or a removal invalidates them.

use super::handlers::{AudioTags, PdfSummary};

/// One cached value tied to a generation token.
pub struct CachedSlot<T> {
    entry: Option<(u64, T)>,
}

impl<T> Default for CachedSlot<T> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<T> CachedSlot<T> {
    /// Value for `token`, computing it only when the cached one belongs to
    /// another load.
    pub fn get_or_insert_with(&mut self, token: u64, compute: impl FnOnce() -> T) -> &T {
        if self.entry.as_ref().is_some_and(|(cached, _)| *cached != token) {
            self.entry = None;
        }
        let (_, value) = self.entry.get_or_insert_with(|| {
            log::debug!("Extracting preview metadata for read #{}", token);
            (token, compute())
        });
        value
    }
}

#[derive(Default)]
pub struct PreviewCache {
    pub image: CachedSlot<Option<(u32, u32)>>,
    pub audio: CachedSlot<Result<AudioTags, String>>,
    pub pdf: CachedSlot<PdfSummary>,
}
