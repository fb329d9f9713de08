//! File naming for materialized picks.
//!
//! This module contains the pure pieces of the materialization step:
//! - MIME type detection from file extensions
//! - MIME-based routing into a category directory
//! - collision-safe naming with a suffix counter

use chrono::Local;

/// Get MIME type from a file name's extension.
///
/// Used on desktop where no content resolver exists. Unknown extensions
/// fall back to `application/octet-stream`, which routes to `documents`.
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => ext.to_lowercase(),
        _ => return "application/octet-stream",
    };
    match ext.as_str() {
        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "heic" | "heif" => "image/heic",
        // Audio
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        // Video
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "ogv" => "video/ogg",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        // Documents and archives
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "zip" => "application/zip",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "7z" => "application/x-7z-compressed",
        _ => "application/octet-stream",
    }
}

/// Route a MIME type to a storage category directory.
///
/// Mirrors the Android media directory split: pictures, movies, music,
/// and documents for everything else.
pub fn category_for_mime(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "pictures"
    } else if mime.starts_with("video/") {
        "movies"
    } else if mime.starts_with("audio/") {
        "music"
    } else {
        "documents"
    }
}

/// Split a file name into (base, extension-with-dot).
///
/// A leading dot does not count as an extension separator, so dot-files
/// like `.config` split into (`.config`, ``).
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Append a fallback extension if the name has none.
pub fn ensure_extension(name: &str, fallback_ext: &str) -> String {
    let (_, ext) = split_name(name);
    if ext.is_empty() {
        format!("{}.{}", name, fallback_ext)
    } else {
        name.to_string()
    }
}

/// Find a free file name by inserting a `_N` counter before the extension.
///
/// Returns `name` unchanged if it is already free. The counter starts at 1
/// and increments until `exists` reports a free slot (`report.pdf`,
/// `report_1.pdf`, `report_2.pdf`, ...).
pub fn unique_name(name: &str, exists: impl Fn(&str) -> bool) -> String {
    if !exists(name) {
        return name.to_string();
    }
    let (base, ext) = split_name(name);
    let mut index = 1;
    loop {
        let candidate = format!("{}_{}{}", base, index, ext);
        if !exists(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Display name used when the platform cannot supply one.
pub fn fallback_name() -> String {
    format!("picked_{}", Local::now().format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_detection() {
        assert_eq!(mime_for_name("cat.PNG"), "image/png");
        assert_eq!(mime_for_name("clip.mkv"), "video/x-matroska");
        assert_eq!(mime_for_name("song.flac"), "audio/flac");
        assert_eq!(mime_for_name("backup.tar"), "application/x-tar");
        assert_eq!(mime_for_name("noext"), "application/octet-stream");
        assert_eq!(mime_for_name(".gitignore"), "application/octet-stream");
    }

    #[test]
    fn test_category_routing() {
        assert_eq!(category_for_mime("image/jpeg"), "pictures");
        assert_eq!(category_for_mime("video/mp4"), "movies");
        assert_eq!(category_for_mime("audio/ogg"), "music");
        assert_eq!(category_for_mime("application/pdf"), "documents");
        assert_eq!(category_for_mime("text/plain"), "documents");
    }

    #[test]
    fn test_split_name() {
        assert_eq!(split_name("report.pdf"), ("report", ".pdf"));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_name("noext"), ("noext", ""));
        assert_eq!(split_name(".config"), (".config", ""));
    }

    #[test]
    fn test_ensure_extension() {
        assert_eq!(ensure_extension("photo", "png"), "photo.png");
        assert_eq!(ensure_extension("photo.jpg", "png"), "photo.jpg");
        assert_eq!(ensure_extension(".config", "zip"), ".config.zip");
    }

    #[test]
    fn test_unique_name_counter() {
        let taken = ["report.pdf", "report_1.pdf"];
        let exists = |name: &str| taken.contains(&name);

        assert_eq!(unique_name("other.pdf", exists), "other.pdf");
        assert_eq!(unique_name("report.pdf", exists), "report_2.pdf");
    }

    #[test]
    fn test_unique_name_without_extension() {
        let taken = ["notes", "notes_1"];
        let exists = |name: &str| taken.contains(&name);

        assert_eq!(unique_name("notes", exists), "notes_2");
    }

    #[test]
    fn test_fallback_name_shape() {
        let name = fallback_name();
        assert!(name.starts_with("picked_"));
        // picked_ + YYYYMMDD-HHMMSS
        assert_eq!(name.len(), "picked_".len() + 15);
    }
}
