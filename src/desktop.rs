//! Desktop implementation on top of the native file dialogs.
//!
//! Dialog callbacks are bridged into async through a oneshot channel; the
//! picker slot keeps a second dialog from opening while one is up.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tauri_plugin_dialog::{DialogExt, FileDialogBuilder, FilePath};
use tokio::sync::oneshot;

use crate::models::{ExportRequest, FileResponse, ImportedFile, PickKind, SavedFile};
use crate::slot::PickerSlot;
use crate::{naming, storage, Error, Result};

pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
) -> crate::Result<FileBridge<R>> {
    Ok(FileBridge {
        app: app.clone(),
        slot: PickerSlot::new(),
    })
}

/// Access to the file-bridge APIs.
pub struct FileBridge<R: Runtime> {
    app: AppHandle<R>,
    slot: PickerSlot,
}

impl<R: Runtime> FileBridge<R> {
    pub async fn pick_image(&self) -> Result<Option<FileResponse>> {
        self.pick(PickKind::Image).await
    }

    pub async fn pick_archive(&self) -> Result<Option<FileResponse>> {
        self.pick(PickKind::Archive).await
    }

    /// Pick a file of the given kind and copy it into app-private storage.
    async fn pick(&self, kind: PickKind) -> Result<Option<FileResponse>> {
        let _lease = self.slot.acquire()?;

        let (label, extensions) = kind.dialog_filter();
        let picked = self
            .show_open_dialog(|builder| builder.add_filter(label, extensions))
            .await?;
        let Some(picked) = picked else {
            return Ok(None); // user cancelled
        };

        let display_name = file_name_of(&picked);
        let mime = naming::mime_for_name(&display_name);
        let bytes = fs::read(&picked)?;

        let files_root = storage::files_root(&self.app.path().app_data_dir()?);
        storage::materialize(&files_root, &display_name, mime, kind, &bytes).map(Some)
    }

    /// Pick any file and return its bytes without materializing a copy.
    pub async fn import_file(&self) -> Result<Option<ImportedFile>> {
        let _lease = self.slot.acquire()?;

        let Some(picked) = self.show_open_dialog(|builder| builder).await? else {
            return Ok(None);
        };

        let name = file_name_of(&picked);
        let data = fs::read(&picked)?;

        Ok(Some(ImportedFile { name, data }))
    }

    /// Save the payload to a user-chosen location.
    pub async fn export_file(&self, request: ExportRequest) -> Result<Option<SavedFile>> {
        let _lease = self.slot.acquire()?;

        let (tx, rx) = oneshot::channel();
        FileDialogBuilder::new(self.app.dialog().clone())
            .set_file_name(request.name.as_str())
            .save_file(move |file| {
                let _ = tx.send(file);
            });

        let Some(target) = resolve_path(rx.await?)? else {
            return Ok(None);
        };

        fs::write(&target, &request.data)?;

        Ok(Some(SavedFile {
            location: target.to_string_lossy().into_owned(),
        }))
    }

    async fn show_open_dialog(
        &self,
        configure: impl FnOnce(FileDialogBuilder<R>) -> FileDialogBuilder<R>,
    ) -> Result<Option<PathBuf>> {
        let (tx, rx) = oneshot::channel();
        configure(FileDialogBuilder::new(self.app.dialog().clone())).pick_file(move |file| {
            let _ = tx.send(file);
        });
        resolve_path(rx.await?)
    }
}

/// Display name of a picked path, with a timestamped fallback.
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(naming::fallback_name)
}

fn resolve_path(file: Option<FilePath>) -> Result<Option<PathBuf>> {
    match file {
        Some(FilePath::Path(path)) => Ok(Some(path)),
        Some(other) => Err(Error::UnsupportedLocation(format!("{other:?}"))),
        None => Ok(None), // user cancelled
    }
}
