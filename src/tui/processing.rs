use crate::config::{Configuration, load_preset, save_preset};
use crate::executor::execute_batch;

use super::app::App;

impl App {
    /// Run one rename batch over the current previews.
    pub fn rename_files(&mut self) {
        let result = execute_batch(
            &self.folder,
            &mut self.entries,
            &self.selection,
            &self.config,
            &mut self.history,
        );

        match result {
            Ok(report) => {
                let title = if report.recorded == 0 {
                    "No Changes"
                } else if report.simulated {
                    "Simulation Complete"
                } else {
                    "Success"
                };
                self.show_info(title, report.summary());
                self.refresh_previews();
            }
            Err(error) => {
                self.show_error(&error);
                self.refresh_previews();
            }
        }
    }

    /// Reverse the latest batch, then reload the folder.
    pub fn undo_rename(&mut self) {
        match self.history.undo() {
            Ok(None) => self.set_status_message("Nothing to undo".to_string()),
            Ok(Some(report)) => {
                self.rescan();
                let message = if report.simulated {
                    "Simulated batch discarded".to_string()
                } else {
                    format!("Undo completed: {} rename(s) reverted", report.reverted)
                };
                self.set_status_message(message);
            }
            Err(error) => {
                self.rescan();
                self.show_error(&error);
            }
        }
    }

    /// Back to default rules, empty history, fresh listing.
    pub fn reset(&mut self) {
        self.config = Configuration::default();
        self.history.clear();
        self.config_index = 0;
        self.rescan();
        self.set_status_message("Settings reset".to_string());
    }

    pub fn save_preset(&mut self) {
        match save_preset(&self.preset_path, &self.config) {
            Ok(()) => {
                let message = format!("Preset saved to {}", self.preset_path.display());
                self.set_status_message(message);
            }
            Err(error) => self.show_error(&error),
        }
    }

    pub fn load_preset(&mut self) {
        match load_preset(&self.preset_path) {
            Ok(config) => {
                self.config = config;
                self.rescan();
                let message = format!("Preset loaded from {}", self.preset_path.display());
                self.set_status_message(message);
            }
            Err(error) => self.show_error(&error),
        }
    }
}
