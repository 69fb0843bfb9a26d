//! Terminal front end: file list with previews, rule editor, rename and undo.

pub mod app;
pub mod app_logic;
pub mod events;
pub mod models;
pub mod processing;
pub mod rendering;
pub mod utils;

pub use app::App;
pub use events::run_tui;
