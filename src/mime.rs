// Declared MIME types for files that arrive without one

/// MIME type registered for a lowercase extension, or `""` when unknown.
///
/// Mirrors the types desktop browsers report for the same files, so a file
/// opened from disk classifies the same way as one dropped with a type.
pub fn declared_type_for(extension: &str) -> &'static str {
    match extension {
        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",

        // Video
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "ogv" => "video/ogg",

        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" | "oga" => "audio/ogg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "opus" => "audio/opus",

        // Documents
        "pdf" => "application/pdf",
        "json" => "application/json",
        "xml" => "application/xml",

        // Text
        "txt" | "text" | "log" => "text/plain",
        "csv" => "text/csv",
        "md" | "markdown" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",

        // Executables and opaque binaries
        "exe" | "dll" | "msi" | "com" => "application/x-msdownload",
        "bin" => "application/octet-stream",

        _ => "",
    }
}
