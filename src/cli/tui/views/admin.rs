//! Static operator dashboard (placeholder data, no live telemetry)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{title, MUTED};

const STATS: [(&str, &str, Color); 3] = [
    ("TOTAL DIAGNOSES", "1,248", Color::White),
    ("MOST COMMON ISSUE", "RAM Bottle..", Color::White),
    ("API LATENCY", "840ms", Color::Green),
];

const LOGS: [(&str, Color, &str); 5] = [
    ("[INFO]", Color::Blue, "System initialized"),
    ("[SUCCESS]", Color::Green, "Gemini API connected"),
    ("[INFO]", Color::Blue, "User #8821 started diagnosis (Laptop)"),
    ("[WARN]", Color::Yellow, "High volume of requests for 'Overheating'"),
    ("[INFO]", Color::Blue, "New model config loaded: gemini-3-flash-preview"),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Min(7),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(title("Admin Dashboard")), rows[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    for ((label, value, color), area) in STATS.iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(*label, Style::default().fg(MUTED))),
            Line::from(Span::styled(
                *value,
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *area);
    }

    let logs: Vec<Line> = LOGS
        .iter()
        .map(|(level, color, message)| {
            Line::from(vec![
                Span::styled(*level, Style::default().fg(*color)),
                Span::raw(format!(" {}", message)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(logs).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Recent System Logs "),
        ),
        rows[2],
    );
}
