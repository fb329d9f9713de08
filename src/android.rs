//! Android implementation on top of the Storage Access Framework (SAF).
//!
//! User-selected documents arrive as `content://` URIs resolved through the
//! content resolver, never as filesystem paths. Picked documents are copied
//! into the app's private data dir (a plain path on Android), so the rest of
//! the app never touches a content URI. Export targets stay SAF documents;
//! their JSON-serialized `FileUri` is returned as the location.
//!
//! Uses tauri-plugin-android-fs for the actual SAF operations.

use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use tauri::{plugin::PluginApi, AppHandle, Manager, Runtime};
use tauri_plugin_android_fs::{AndroidFsExt, FileAccessMode, FileUri};

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

    /// Pick a document of the given kind and copy it into app-private storage.
    async fn pick(&self, kind: PickKind) -> Result<Option<FileResponse>> {
        let _lease = self.slot.acquire()?;

        let Some(uri) = self.show_picker(kind.mime_types()).await? else {
            return Ok(None); // user cancelled
        };

        let display_name = self.display_name(&uri);
        let mime = self
            .app
            .android_fs()
            .get_mime_type(&uri)
            .unwrap_or_else(|_| naming::mime_for_name(&display_name).to_string());
        let bytes = self.read_document(&uri)?;

        let files_root = storage::files_root(&self.app.path().app_data_dir()?);
        storage::materialize(&files_root, &display_name, &mime, kind, &bytes).map(Some)
    }

    /// Pick any document and return its bytes without materializing a copy.
    pub async fn import_file(&self) -> Result<Option<ImportedFile>> {
        let _lease = self.slot.acquire()?;

        let Some(uri) = self.show_picker(&["*/*"]).await? else {
            return Ok(None);
        };

        let name = self.display_name(&uri);
        let data = self.read_document(&uri)?;

        Ok(Some(ImportedFile { name, data }))
    }

    /// Save the payload to a user-chosen document via the save dialog.
    pub async fn export_file(&self, request: ExportRequest) -> Result<Option<SavedFile>> {
        let _lease = self.slot.acquire()?;

        let api = self.app.android_fs_async();
        let uri = api
            .file_picker()
            .save_file(
                None, // Initial location
                &request.name,
                request.mime.as_deref(),
                false, // local_only
            )
            .await
            .map_err(|e| Error::Picker(format!("Save dialog failed: {:?}", e)))?;
        let Some(uri) = uri else {
            return Ok(None); // user cancelled
        };

        // Keep access across app restarts in case the caller reuses the URI
        let _ = api.file_picker().persist_uri_permission(&uri).await;

        let mut file = self
            .app
            .android_fs()
            .open_file(&uri, FileAccessMode::WriteTruncate)
            .map_err(|e| {
                eprintln!("[FileBridge] Failed to open export target: {:?}", e);
                Error::Picker(format!("Failed to open document for writing: {:?}", e))
            })?;
        file.write_all(&request.data)?;

        let location = uri
            .to_json_string()
            .map_err(|e| Error::Picker(format!("Failed to serialize FileUri: {:?}", e)))?;

        Ok(Some(SavedFile { location }))
    }

    /// Show the document picker and return the first selection, if any.
    async fn show_picker(&self, mime_types: &[&str]) -> Result<Option<FileUri>> {
        let files = self
            .app
            .android_fs_async()
            .file_picker()
            .pick_files(
                None, // Initial location
                mime_types,
                false, // local_only
            )
            .await
            .map_err(|e| Error::Picker(format!("File picker failed: {:?}", e)))?;

        Ok(files.into_iter().next())
    }

    /// Display name of a document, with a timestamped fallback.
    fn display_name(&self, uri: &FileUri) -> String {
        self.app
            .android_fs()
            .get_name(uri)
            .unwrap_or_else(|_| naming::fallback_name())
    }

    /// Read a document's bytes through the content resolver.
    fn read_document(&self, uri: &FileUri) -> Result<Vec<u8>> {
        let mut file = self
            .app
            .android_fs()
            .open_file(uri, FileAccessMode::Read)
            .map_err(|e| {
                eprintln!("[FileBridge] Failed to open picked document: {:?}", e);
                Error::Picker(format!("Failed to open document for reading: {:?}", e))
            })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;

        Ok(contents)
    }
}
