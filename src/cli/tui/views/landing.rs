use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{ACCENT, MUTED};

const FEATURES: [(&str, &str, Color); 3] = [
    (
        "Identify Issues",
        "Pinpoint hardware failures or bottlenecks.",
        Color::Blue,
    ),
    (
        "Get Recommendations",
        "Find exact RAM or SSD upgrades compatible with your model.",
        Color::Magenta,
    ),
    (
        "Estimate Costs",
        "See price estimates for parts and repairs.",
        Color::Green,
    ),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(area);

    let hero = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Diagnose & Upgrade",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Your Electronics",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Is your laptop slow? Overheating? Get an AI-assisted diagnosis and tailored upgrade recommendations.",
            Style::default().fg(MUTED),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "[ Enter ] Start Checkup",
            Style::default().fg(Color::Black).bg(ACCENT),
        )),
    ];
    frame.render_widget(
        Paragraph::new(hero)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for ((name, desc, color), area) in FEATURES.iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                *name,
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::raw(*desc),
        ])
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        frame.render_widget(card, *area);
    }
}
