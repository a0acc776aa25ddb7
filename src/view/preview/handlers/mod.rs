// Preview handlers module

mod audio;
mod error;
mod image;
mod pdf;
mod text;
mod video;

pub use audio::{AudioPreviewHandler, AudioTags};
pub use error::ErrorTextHandler;
pub use image::ImagePreviewHandler;
pub use pdf::{PdfPreviewHandler, PdfSummary};
pub use text::TextPreviewHandler;
pub use video::VideoPreviewHandler;
