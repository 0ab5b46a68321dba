// File: src/tui/view.rs
use crate::tui::state::{AppState, Speaker};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, state: &AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(f.area());
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(v_chunks[0]);

    // --- Conversation ---
    let mut lines: Vec<Line> = Vec::new();
    for (speaker, text) in &state.transcript {
        match speaker {
            Speaker::User => lines.push(Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    text.as_str(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            Speaker::Derek => {
                if text.is_empty() {
                    lines.push(Line::from(""));
                }
                for l in text.lines() {
                    lines.push(Line::from(l));
                }
            }
        }
    }

    let conv_area = h_chunks[0];
    let visible = conv_area.height.saturating_sub(2) as usize;
    let bottom_offset = lines.len().saturating_sub(visible);
    let offset = bottom_offset.saturating_sub(state.scroll_back as usize);

    let conversation = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Derek "))
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    f.render_widget(conversation, conv_area);

    // --- Task list ---
    let tasks = state.session.tasks();
    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if t.completed {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}.{}", i + 1, t)).style(style)
        })
        .collect();
    let title = format!(" Tasks ({}) ", tasks.size());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, h_chunks[1]);

    // --- Input ---
    let footer_area = v_chunks[1];
    let prefix = "> ";
    let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enter:Send  Esc:Quit  PgUp/PgDn:Scroll "),
    );
    f.render_widget(input, footer_area);

    let cursor_x =
        footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
    f.set_cursor_position((
        cursor_x.min(footer_area.x + footer_area.width.saturating_sub(2)),
        footer_area.y + 1,
    ));
}
