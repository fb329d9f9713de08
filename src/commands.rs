use tauri::{command, AppHandle, Runtime};

use crate::models::{ExportRequest, FileResponse, ImportedFile, SavedFile};
use crate::FileBridgeExt;

#[command]
pub(crate) async fn pick_image<R: Runtime>(app: AppHandle<R>) -> crate::Result<Option<FileResponse>> {
    app.file_bridge().pick_image().await
}

#[command]
pub(crate) async fn pick_archive<R: Runtime>(
    app: AppHandle<R>,
) -> crate::Result<Option<FileResponse>> {
    app.file_bridge().pick_archive().await
}

#[command]
pub(crate) async fn import_file<R: Runtime>(
    app: AppHandle<R>,
) -> crate::Result<Option<ImportedFile>> {
    app.file_bridge().import_file().await
}

#[command]
pub(crate) async fn export_file<R: Runtime>(
    app: AppHandle<R>,
    request: ExportRequest,
) -> crate::Result<Option<SavedFile>> {
    app.file_bridge().export_file(request).await
}
