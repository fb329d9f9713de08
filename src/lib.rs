//! File pick, import and export bridge for Tauri apps.
//!
//! Lets a sandboxed app request file selection (with materialization into
//! app-private storage), file import (raw bytes across the bridge), and
//! file export (save-as) through the platform's native picker: the system
//! file dialog on desktop, the SAF document picker on Android.
//!
//! At most one picker operation may be in flight; overlapping requests fail
//! with a busy error instead of silently replacing the pending one.

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::{ExportRequest, FileResponse, ImportedFile, PickKind, SavedFile};

#[cfg(target_os = "android")]
mod android;
#[cfg(not(target_os = "android"))]
mod desktop;

mod commands;
mod error;
mod models;
mod naming;
mod slot;
mod storage;

pub use error::{Error, Result};

#[cfg(target_os = "android")]
use android::FileBridge;
#[cfg(not(target_os = "android"))]
use desktop::FileBridge;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`]
/// to access the file-bridge APIs.
pub trait FileBridgeExt<R: Runtime> {
    fn file_bridge(&self) -> &FileBridge<R>;
}

impl<R: Runtime, T: Manager<R>> crate::FileBridgeExt<R> for T {
    fn file_bridge(&self) -> &FileBridge<R> {
        self.state::<FileBridge<R>>().inner()
    }
}

/// Initializes the plugin.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("file-bridge")
        .invoke_handler(tauri::generate_handler![
            commands::pick_image,
            commands::pick_archive,
            commands::import_file,
            commands::export_file
        ])
        .setup(|app, api| {
            #[cfg(target_os = "android")]
            let bridge = android::init(app, api)?;
            #[cfg(not(target_os = "android"))]
            let bridge = desktop::init(app, api)?;
            app.manage(bridge);
            Ok(())
        })
        .build()
}
