//! Input steps: Category, Symptoms, Specs

use devicerx_core::model::MIN_DESCRIPTION_CHARS;
use devicerx_core::{DeviceType, SymptomTag};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{pointer, subtitle, title, ACCENT, MUTED};
use crate::cli::tui::app::{App, SpecSlot, DESCRIPTION_ROW};

fn next_button(label: &str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default().fg(Color::Black).bg(ACCENT)
    } else {
        Style::default().fg(MUTED).add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(format!("[ Enter ] {}", label), style))
}

pub fn draw_category(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.state().device_type;

    let mut lines = vec![title("What device are you checking?"), Line::raw("")];
    for (idx, device) in DeviceType::ALL.iter().enumerate() {
        let is_selected = selected == Some(*device);
        let mark = if is_selected { "(•) " } else { "( ) " };
        let style = if is_selected {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            pointer(app.cursor == idx),
            Span::styled(format!("{}{}", mark, device.label()), style),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(next_button("Next Step", app.state().can_advance()));

    frame.render_widget(Paragraph::new(lines), area);
}

pub fn draw_symptoms(frame: &mut Frame, app: &App, area: Rect) {
    let symptoms = &app.state().symptoms;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SymptomTag::ALL.len() as u16 + 3),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    let mut lines = vec![
        title("What's wrong?"),
        subtitle("Select all that apply or describe the issue below."),
        Line::raw(""),
    ];
    for (idx, tag) in SymptomTag::ALL.iter().enumerate() {
        let on = symptoms.is_selected(*tag);
        let style = if on {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            pointer(app.cursor == idx),
            Span::raw(if on { "[x] " } else { "[ ] " }),
            Span::styled(tag.label(), style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), rows[0]);

    let editing = app.cursor == DESCRIPTION_ROW;
    let text = if symptoms.free_text.is_empty() && !editing {
        Span::styled(
            "E.g., My laptop freezes when I open more than 3 tabs...",
            Style::default().fg(MUTED),
        )
    } else if editing {
        Span::raw(format!("{}▏", symptoms.free_text))
    } else {
        Span::raw(symptoms.free_text.clone())
    };
    let border = if editing { ACCENT } else { MUTED };
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(" Detailed Description "),
            )
            .wrap(Wrap { trim: false }),
        rows[1],
    );

    let mut footer = vec![next_button("Next Step", symptoms.is_complete())];
    if !symptoms.is_complete() {
        footer.push(subtitle(&format!(
            "Pick a symptom or write at least {} characters.",
            MIN_DESCRIPTION_CHARS
        )));
    }
    frame.render_widget(Paragraph::new(footer), rows[2]);
}

pub fn draw_specs(frame: &mut Frame, app: &App, area: Rect) {
    let specs = &app.state().specs;

    let mut lines = vec![
        title("Device Specifications"),
        subtitle("Provide details to help us recommend compatible parts."),
        Line::raw(""),
    ];

    for (idx, slot) in SpecSlot::ALL.iter().enumerate() {
        let active = app.cursor == idx;
        let value = match slot {
            SpecSlot::Brand => specs.brand.clone(),
            SpecSlot::Model => specs.model.clone(),
            SpecSlot::Processor => specs.processor.clone(),
            SpecSlot::Storage => specs.storage.clone(),
            SpecSlot::Ram => specs.ram_label().to_string(),
            SpecSlot::Age => specs.age_years.to_string(),
        };

        let value_span = if value.is_empty() {
            Span::styled(slot.placeholder(), Style::default().fg(MUTED))
        } else {
            Span::raw(value)
        };
        let mut row = vec![
            pointer(active),
            Span::styled(format!("{:<20}", slot.label()), Style::default().fg(MUTED)),
        ];
        match slot {
            SpecSlot::Ram | SpecSlot::Age => {
                row.push(Span::raw("◂ "));
                row.push(value_span);
                row.push(Span::raw(" ▸"));
            }
            _ => {
                row.push(value_span);
                if active {
                    row.push(Span::styled("▏", Style::default().fg(ACCENT)));
                }
            }
        }
        lines.push(Line::from(row));
    }

    lines.push(Line::raw(""));
    lines.push(next_button("Analyze Device", true));

    frame.render_widget(Paragraph::new(lines), area);
}
