use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new("KATA")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(main_chunks[1]);

    draw_exercise_list(f, app, content_chunks[0]);
    draw_output(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let help = match app.input_mode {
        InputMode::Normal => "j/k: Navigate | Enter: Run | q: Quit",
        InputMode::Editing => "Enter: Submit | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_exercise_list(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app.exercises.iter().enumerate().map(|(i, exercise)| {
        Row::new(vec![
            Span::styled(format!("{}", i + 1), Style::default().fg(Color::Yellow)),
            Span::styled(exercise.title(), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Number
            Constraint::Min(10),    // Title
        ]
    )
    .block(Block::default().title(" Exercises ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.output_is_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let text: Vec<Line> = if app.output.is_empty() {
        vec![Line::from(Span::styled(
            "Select an exercise and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.output.iter().map(|l| Line::from(Span::styled(l.as_str(), style))).collect()
    };

    let output = Paragraph::new(text)
        .block(Block::default().title(" Result ").borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(output, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match (&app.input_mode, app.selected().and_then(|e| e.prompt())) {
        (InputMode::Editing, Some(prompt)) => format!(" {} ", prompt),
        _ => " Input ".to_string(),
    };
    let border_style = match app.input_mode {
        InputMode::Editing => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };

    let input = Paragraph::new(app.input.as_str())
        .block(Block::default().title(title).borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border_style));
    f.render_widget(input, area);

    if let InputMode::Editing = app.input_mode {
        let before_cursor = &app.input[..app.byte_index()];
        let x = area.x + 1 + before_cursor.width() as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}
