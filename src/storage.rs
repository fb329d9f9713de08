//! Materialization of picked files into app-private storage.
//!
//! Picked documents are copied under `<app_data_dir>/files/<category>/`,
//! where the category comes from the MIME type. The returned path is
//! virtual (relative to the app data dir) so callers never see a host
//! filesystem path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{FileResponse, PickKind};
use crate::naming;
use crate::Result;

/// Name of the storage root under the app data dir.
const FILES_DIR: &str = "files";

/// Resolve the storage root under the app data dir.
pub fn files_root(app_data_dir: &Path) -> PathBuf {
    app_data_dir.join(FILES_DIR)
}

/// Write picked bytes into app-private storage.
///
/// The file lands in a category subdirectory derived from `mime`, under a
/// collision-safe name derived from `display_name`. A name without an
/// extension gets the pick kind's fallback extension first, so the copy
/// stays openable by type-sniffing consumers.
pub fn materialize(
    files_root: &Path,
    display_name: &str,
    mime: &str,
    kind: PickKind,
    bytes: &[u8],
) -> Result<FileResponse> {
    let name = naming::ensure_extension(display_name, kind.fallback_extension());
    let category = naming::category_for_mime(mime);

    let dir = files_root.join(category);
    fs::create_dir_all(&dir)?;

    let name = naming::unique_name(&name, |candidate| dir.join(candidate).exists());
    fs::write(dir.join(&name), bytes)?;

    Ok(FileResponse {
        path: format!("{}/{}/{}", FILES_DIR, category, name),
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fresh directory under the system temp dir, unique per test.
    fn temp_root(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("file-bridge-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn test_materialize_routes_by_mime() {
        let root = temp_root("routing");

        let resp = materialize(&root, "cat.png", "image/png", PickKind::Image, b"png!").unwrap();
        assert_eq!(resp.path, "files/pictures/cat.png");
        assert_eq!(resp.name, "cat.png");
        assert_eq!(fs::read(root.join("pictures/cat.png")).unwrap(), b"png!");

        let resp =
            materialize(&root, "notes.pdf", "application/pdf", PickKind::Archive, b"pdf").unwrap();
        assert_eq!(resp.path, "files/documents/notes.pdf");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_materialize_never_overwrites() {
        let root = temp_root("collision");

        let first = materialize(&root, "dup.zip", "application/zip", PickKind::Archive, b"one");
        let second = materialize(&root, "dup.zip", "application/zip", PickKind::Archive, b"two");

        assert_eq!(first.unwrap().name, "dup.zip");
        assert_eq!(second.unwrap().name, "dup_1.zip");
        assert_eq!(fs::read(root.join("documents/dup.zip")).unwrap(), b"one");
        assert_eq!(fs::read(root.join("documents/dup_1.zip")).unwrap(), b"two");

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_materialize_adds_fallback_extension() {
        let root = temp_root("fallback-ext");

        let resp = materialize(&root, "snapshot", "image/png", PickKind::Image, b"img").unwrap();
        assert_eq!(resp.name, "snapshot.png");
        assert!(root.join("pictures/snapshot.png").exists());

        let _ = fs::remove_dir_all(&root);
    }
}
