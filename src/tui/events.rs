use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::app::App;
use super::models::Focus;
use super::rendering::ui;

pub fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.clear_status_message_if_expired();

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if app.popup.is_some() {
        app.dismiss_popup();
        return false;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('q')) {
            app.toggle_help();
        }
        return false;
    }

    match app.focus {
        Focus::Files => handle_files_key(app, key.code),
        Focus::Config => {
            handle_config_key(app, key.code);
            false
        }
    }
}

fn handle_files_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Char(' ') => app.toggle_selection(),
        KeyCode::Char('a') => app.clear_selection(),
        KeyCode::Enter | KeyCode::Char('r') => app.rename_files(),
        KeyCode::Char('u') => app.undo_rename(),
        KeyCode::Char('g') => app.rescan(),
        KeyCode::Char('s') => app.save_preset(),
        KeyCode::Char('l') => app.load_preset(),
        KeyCode::Char('x') => app.reset(),
        KeyCode::Char('h') | KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab => app.toggle_focus(),
        _ => {}
    }
    false
}

fn handle_config_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Tab => app.toggle_focus(),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Enter => {
            app.handle_config_navigation(code)
        }
        KeyCode::Backspace => app.handle_config_backspace(),
        KeyCode::Char(c) => app.handle_config_input(c),
        _ => {}
    }
}
