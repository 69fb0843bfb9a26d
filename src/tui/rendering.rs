use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, Wrap,
    },
};

use super::app::App;
use super::models::{ConfigField, Focus, Popup};
use super::utils::{centered_rect, fit_width};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);
    render_file_list(f, body[0], app);
    render_config_panel(f, body[1], app);

    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help_popup(f);
    }
    if let Some(popup) = &app.popup {
        render_message_popup(f, popup);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("REnamer", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  {}", app.folder.display())),
    ];
    if app.config.simulation_mode {
        spans.push(Span::styled(
            "  [SIMULATION]",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_file_list(f: &mut Frame, area: Rect, app: &App) {
    // Borders, highlight symbol, selection mark and the arrow between columns.
    let usable = area.width.saturating_sub(2 + 2 + 4 + 4) as usize;
    let column = usable / 2;

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mark = if app.selection.is_selected(i) { "[x] " } else { "[ ] " };
            let (arrow, preview) = match &entry.preview_name {
                Some(name) => (" -> ", name.as_str()),
                None => ("    ", ""),
            };
            let included = app.selection.includes(i);
            let name_style = if included {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            ListItem::new(Line::from(vec![
                Span::styled(mark, Style::default().fg(Color::Cyan)),
                Span::styled(fit_width(&entry.original_name, column), name_style),
                Span::styled(arrow, Style::default().fg(Color::Gray)),
                Span::styled(fit_width(preview, column), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let title = format!(
        "Original | Preview  ({} files, {} changing, {} selected)",
        app.entries.len(),
        app.changed_count(),
        app.selection.len()
    );
    let border = if app.focus == Focus::Files { Color::Blue } else { Color::Gray };
    let files_list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(files_list, area, &mut app.list_state.clone());

    if app.entries.len() > area.height.saturating_sub(2) as usize {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("^"))
            .end_symbol(Some("v"));
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut app.scroll_state.clone(),
        );
    }
}

fn render_config_panel(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Config;
    let label_width = ConfigField::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = ConfigField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let enabled = field.is_enabled(&app.config);
            let active = focused && i == app.config_index;
            let value_style = match (active, enabled) {
                (true, _) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                (false, true) => Style::default().fg(Color::White),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            let label_style = if enabled {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(if active { "> " } else { "  " }, value_style),
                Span::styled(fit_width(field.label(), label_width), label_style),
                Span::raw(" : "),
                Span::styled(field.display_value(&app.config), value_style),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Rules (Tab to edit)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::Gray })),
    );
    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let status_text = match &app.status_message {
        Some(message) => message.clone(),
        None => format!(
            "{} of {} files will change | undo depth {}",
            app.changed_count(),
            app.entries.len(),
            app.history.depth()
        ),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(if app.status_message.is_some() { Color::Cyan } else { Color::Green }))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    let controls_text = match app.focus {
        Focus::Config => "Up/Down field, type to edit, Left/Right change, Esc back",
        Focus::Files if app.history.can_undo() => "r rename, u undo, space select, h help, q quit",
        Focus::Files => "r rename, space select, Tab rules, h help, q quit",
    };
    let controls = Paragraph::new(controls_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    f.render_widget(controls, chunks[1]);
}

fn render_help_popup(f: &mut Frame) {
    let popup_area = centered_rect(60, 70, f.area());

    let help_text = vec![
        Line::from(Span::styled("REnamer - Help", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Files:"),
        Line::from("  Up/k, Down/j  - Move"),
        Line::from("  Space         - Select / deselect (none selected = all)"),
        Line::from("  a             - Clear selection"),
        Line::from("  r/Enter       - Rename files"),
        Line::from("  u             - Undo last rename"),
        Line::from("  g             - Rescan folder"),
        Line::from("  s / l         - Save / load preset"),
        Line::from("  x             - Reset all settings"),
        Line::from("  Tab           - Edit rules"),
        Line::from(""),
        Line::from("Rules:"),
        Line::from("  Up/Down       - Choose field"),
        Line::from("  typing        - Edit text and numbers"),
        Line::from("  Regex groups  - $1 or ${1}; use ${1}USD when text follows"),
        Line::from("  Left/Right    - Change option or number"),
        Line::from("  Space/Enter   - Toggle checkbox"),
        Line::from("  Esc/Tab       - Back to files"),
        Line::from(""),
        Line::from(Span::styled("Press Esc or h to close", Style::default().fg(Color::Gray))),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn render_message_popup(f: &mut Frame, popup: &Popup) {
    let popup_area = centered_rect(50, 30, f.area());
    let color = if popup.is_error { Color::Red } else { Color::Green };

    let paragraph = Paragraph::new(vec![
        Line::from(popup.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("Press any key", Style::default().fg(Color::Gray))),
    ])
    .block(
        Block::default()
            .title(popup.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    )
    .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}
