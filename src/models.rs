//! Types crossing the bridge boundary.
//!
//! Everything here serializes with camelCase field names for the webview
//! side. Raw bytes travel as base64 strings (~33% expansion) since the
//! invoke bridge is JSON.

use serde::{Deserialize, Serialize};

/// What a pick operation is filtered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
    Image,
    Archive,
}

impl PickKind {
    /// Filter label and extensions for the desktop file dialog.
    pub fn dialog_filter(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PickKind::Image => ("Images", &["png", "jpg", "jpeg", "webp"]),
            PickKind::Archive => ("Archives", &["zip", "tar", "gz", "7z"]),
        }
    }

    /// MIME types for the Android document picker.
    pub fn mime_types(&self) -> &'static [&'static str] {
        match self {
            PickKind::Image => &["image/*"],
            PickKind::Archive => &[
                "application/zip",
                "application/x-tar",
                "application/gzip",
                "application/x-7z-compressed",
            ],
        }
    }

    /// Extension used when the picked file has none.
    pub fn fallback_extension(&self) -> &'static str {
        match self {
            PickKind::Image => "png",
            PickKind::Archive => "zip",
        }
    }
}

/// A picked file materialized into app-private storage.
///
/// `path` is virtual, relative to the app data dir (e.g.
/// `files/pictures/cat.png`) - never an absolute host path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub path: String,
    pub name: String,
}

/// A picked file returned as raw bytes, without materialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedFile {
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

/// Payload for a save-as export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Suggested file name shown in the save dialog.
    pub name: String,
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
    /// Optional MIME type hint for the save target.
    #[serde(default)]
    pub mime: Option<String>,
}

/// Where an exported payload landed.
///
/// On desktop `location` is a filesystem path; on Android it is the
/// JSON-serialized `FileUri` of the created document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFile {
    pub location: String,
}

// ── Base64 serde helper for Vec<u8> fields ──────────────────────────────────

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imported_file_bytes_travel_as_base64() {
        let file = ImportedFile {
            name: "notes.txt".into(),
            data: b"hello bridge".to_vec(),
        };

        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["name"], "notes.txt");
        assert_eq!(json["data"], "aGVsbG8gYnJpZGdl");

        let back: ImportedFile = serde_json::from_value(json).unwrap();
        assert_eq!(back.data, b"hello bridge");
    }

    #[test]
    fn test_export_request_rejects_bad_base64() {
        let json = serde_json::json!({
            "name": "out.bin",
            "data": "***not base64***",
        });
        assert!(serde_json::from_value::<ExportRequest>(json).is_err());
    }

    #[test]
    fn test_export_request_mime_is_optional() {
        let json = serde_json::json!({
            "name": "out.bin",
            "data": "",
        });
        let req: ExportRequest = serde_json::from_value(json).unwrap();
        assert!(req.mime.is_none());
        assert!(req.data.is_empty());
    }

    #[test]
    fn test_cancellation_serializes_as_null() {
        // Commands resolve cancellation with None - the webview must see null,
        // not an error and not an empty object.
        let cancelled: Option<FileResponse> = None;
        assert_eq!(serde_json::to_value(cancelled).unwrap(), serde_json::Value::Null);
    }
}
