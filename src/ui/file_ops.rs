//! File operations for opening and saving layouts.
//!
//! Dialogs and disk I/O run on the tokio runtime; results come back through
//! the channel in [`FileState`](super::state::FileState) and are drained once
//! per frame.

use super::state::{FileOperationResult, PendingSaveOperation, SeatingApp};
use crate::error::SeatingError;
use crate::types::Layout;
use eframe::egui;

impl SeatingApp {
    /// Processes finished async operations and starts newly requested ones.
    pub fn handle_pending_operations(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.file.receiver.try_recv() {
            self.apply_file_result(result);
        }

        if let Some(save_op) = self.file.pending_save_operation.take() {
            match self.layout.to_json() {
                Ok(json) => self.spawn_save(ctx, save_op, json),
                Err(e) => self.report_error(&e),
            }
        }

        if std::mem::take(&mut self.file.pending_load_operation) {
            self.spawn_load(ctx);
        }
    }

    /// Applies one async result to the app state.
    pub fn apply_file_result(&mut self, result: FileOperationResult) {
        match result {
            FileOperationResult::SaveCompleted(path) => {
                log::info!("layout saved to {path}");
                self.status = Some(format!("Saved {path}"));
                self.file.current_path = Some(path);
                self.file.has_unsaved_changes = false;
            }
            FileOperationResult::LoadCompleted(path, content) => match Layout::from_json(&content) {
                Ok((layout, issues)) => {
                    self.replace_layout(layout);
                    self.file.current_path = Some(path.clone());
                    self.status = Some(if issues.is_empty() {
                        format!("Opened {path}")
                    } else {
                        format!("Opened {path}, skipped {} malformed entries", issues.len())
                    });
                    log::info!("layout loaded from {path}");
                }
                Err(e) => self.report_error(&e),
            },
            FileOperationResult::ExportCompleted(path) => {
                log::info!("exported {path}");
                self.status = Some(format!("Exported {path}"));
            }
            FileOperationResult::OperationFailed(message) => {
                log::error!("file operation failed: {message}");
                self.status = Some(message);
            }
        }
    }

    /// Logs an error and shows it in the status line.
    pub fn report_error(&mut self, error: &SeatingError) {
        log::error!("{error}");
        self.status = Some(error.to_string());
    }

    fn spawn_save(&mut self, ctx: &egui::Context, op: PendingSaveOperation, json: String) {
        let ctx = ctx.clone();
        let sender = self.file.sender.clone();
        let existing = match op {
            PendingSaveOperation::Save => self.file.current_path.clone(),
            PendingSaveOperation::SaveAs => None,
        };

        tokio::spawn(async move {
            let path = match existing {
                Some(path) => Some(std::path::PathBuf::from(path)),
                None => rfd::AsyncFileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("layout.json")
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf()),
            };
            if let Some(path) = path {
                let result = match std::fs::write(&path, json) {
                    Ok(()) => FileOperationResult::SaveCompleted(path.display().to_string()),
                    Err(e) => FileOperationResult::OperationFailed(
                        SeatingError::from(e).to_string(),
                    ),
                };
                let _ = sender.send(result);
            }
            ctx.request_repaint();
        });
    }

    fn spawn_load(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let sender = self.file.sender.clone();

        tokio::spawn(async move {
            if let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
                .await
            {
                let path = handle.path().to_path_buf();
                let result = match std::fs::read_to_string(&path) {
                    Ok(json) => FileOperationResult::LoadCompleted(path.display().to_string(), json),
                    Err(e) => FileOperationResult::OperationFailed(
                        SeatingError::from(e).to_string(),
                    ),
                };
                let _ = sender.send(result);
            }
            ctx.request_repaint();
        });
    }

    /// Saves to the current path, or asks for one.
    pub fn save_layout(&mut self) {
        self.file.pending_save_operation = Some(if self.file.current_path.is_some() {
            PendingSaveOperation::Save
        } else {
            PendingSaveOperation::SaveAs
        });
    }

    /// Asks for a new path and saves there.
    pub fn save_layout_as(&mut self) {
        self.file.pending_save_operation = Some(PendingSaveOperation::SaveAs);
    }

    /// Opens a layout file chosen by the user.
    pub fn open_layout(&mut self) {
        self.file.pending_load_operation = true;
    }
}
