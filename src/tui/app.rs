use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::widgets::{ListState, ScrollbarState};

use crate::config::Configuration;
use crate::error::RenameError;
use crate::folder::scan_folder;
use crate::history::History;
use crate::models::{FileEntry, Selection};
use crate::rename_engine::project_previews;

use super::models::{ConfigField, Focus, Popup};

#[derive(Debug)]
pub struct App {
    pub folder: PathBuf,
    pub preset_path: PathBuf,
    pub config: Configuration,
    pub entries: Vec<FileEntry>,
    pub selection: Selection,
    pub history: History,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
    pub focus: Focus,
    pub config_index: usize,
    pub show_help: bool,
    pub popup: Option<Popup>,
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(folder: PathBuf, preset_path: PathBuf, config: Configuration) -> Self {
        let mut app = Self {
            folder,
            preset_path,
            config,
            entries: Vec::new(),
            selection: Selection::default(),
            history: History::new(),
            list_state: ListState::default(),
            scroll_state: ScrollbarState::default(),
            focus: Focus::Files,
            config_index: 0,
            show_help: false,
            popup: None,
            status_message: None,
            status_message_time: None,
        };
        app.rescan();
        app
    }

    /// Reload the entry list from disk, dropping the selection.
    pub fn rescan(&mut self) {
        match scan_folder(&self.folder, &self.config.filter_extension) {
            Ok(entries) => self.entries = entries,
            Err(error) => {
                self.entries.clear();
                self.show_error(&error);
            }
        }
        self.selection.clear();
        self.scroll_state = ScrollbarState::new(self.entries.len());
        self.list_state
            .select(if self.entries.is_empty() { None } else { Some(0) });
        self.refresh_previews();
    }

    pub fn refresh_previews(&mut self) {
        if let Err(error) = project_previews(&mut self.entries, &self.config, &self.selection) {
            self.show_error(&error);
        }
    }

    pub fn changed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.preview_name.is_some())
            .count()
    }

    pub fn focused_field(&self) -> ConfigField {
        ConfigField::ALL[self.config_index.min(ConfigField::ALL.len() - 1)]
    }

    pub fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        };
        self.select_row(i);
    }

    pub fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.select_row(i);
    }

    fn select_row(&mut self, i: usize) {
        self.list_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i);
    }

    /// Add or remove the highlighted row from the selection.
    pub fn toggle_selection(&mut self) {
        if let Some(i) = self.list_state.selected() {
            self.selection.toggle(i);
            self.refresh_previews();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.refresh_previews();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Files => Focus::Config,
            Focus::Config => Focus::Files,
        };
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_message_time = Some(Instant::now());
    }

    pub fn clear_status_message_if_expired(&mut self) {
        if let (Some(_), Some(time)) = (&self.status_message, self.status_message_time) {
            if time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    pub fn show_error(&mut self, error: &RenameError) {
        tracing::warn!(kind = ?error.kind(), "{error}");
        self.popup = Some(Popup {
            title: error.title().to_string(),
            message: error.to_string(),
            is_error: true,
        });
    }

    pub fn show_info(&mut self, title: &str, message: String) {
        self.popup = Some(Popup {
            title: title.to_string(),
            message,
            is_error: false,
        });
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }
}
