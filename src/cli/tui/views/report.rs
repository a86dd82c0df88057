//! Output steps: Analyzing, Results, Upgrades, Summary

use devicerx_core::report::format_usd;
use devicerx_core::{CostComparison, DiagnosisResult, Severity};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{subtitle, title, ACCENT, MUTED};
use crate::cli::tui::app::App;

const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Moderate => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

fn no_results(frame: &mut Frame, area: Rect) {
    frame.render_widget(Paragraph::new("No results"), area);
}

fn bullet_list(heading: &str, items: &[String], color: Color) -> Paragraph<'static> {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| Line::from(format!("• {}", item)))
        .collect();
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", heading)),
    )
}

pub fn draw_analyzing(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER_FRAMES[app.loading_tick % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::raw(""),
        Line::raw(""),
        Line::from(Span::styled(
            spinner,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        title("Analyzing your device..."),
        subtitle("Gemini AI is reviewing your specs and symptoms."),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    let Some(diagnosis) = app.state().diagnosis.as_ref() else {
        return no_results(frame, area);
    };
    let banner = app.state().last_error.as_deref();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if banner.is_some() { 3 } else { 0 }),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .split(area);

    if let Some(message) = banner {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
            rows[0],
        );
    }

    let color = severity_color(diagnosis.severity);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Diagnosis Report  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", diagnosis.severity.label().to_uppercase()),
                Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
            ),
        ])),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(diagnosis.diagnosis_summary.clone())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Summary ")),
        rows[2],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);
    frame.render_widget(
        bullet_list("Potential Causes", &diagnosis.potential_causes, Color::Yellow),
        columns[0],
    );
    frame.render_widget(
        bullet_list("Maintenance Tips", &diagnosis.maintenance_tips, ACCENT),
        columns[1],
    );
}

pub fn draw_upgrades(frame: &mut Frame, app: &App, area: Rect) {
    let Some(diagnosis) = app.state().diagnosis.as_ref() else {
        return no_results(frame, area);
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);
    frame.render_widget(Paragraph::new(title("Recommended Upgrades")), rows[0]);

    if diagnosis.recommended_upgrades.is_empty() {
        let lines = vec![
            Line::from(Span::styled(
                "Good news! No hardware upgrades are strictly necessary based on your symptoms.",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            subtitle("Try the maintenance tips from the previous page."),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[1],
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let mut cards = Vec::new();
    for upgrade in &diagnosis.recommended_upgrades {
        cards.push(Line::from(vec![
            Span::styled(
                upgrade.component.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{} Priority]", upgrade.priority),
                Style::default().fg(MUTED),
            ),
        ]));
        cards.push(Line::raw(format!("  {}", upgrade.reason)));
        cards.push(Line::from(vec![
            Span::styled(
                format!("  ~${}", format_usd(upgrade.estimated_cost_usd)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("   +{}% Perf", upgrade.performance_boost_percentage),
                Style::default().fg(ACCENT),
            ),
        ]));
        cards.push(Line::raw(""));
    }
    frame.render_widget(
        Paragraph::new(cards)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL)),
        columns[0],
    );

    frame.render_widget(boost_chart(diagnosis), columns[1]);
}

/// Bar chart of the estimated performance gain per upgrade
fn boost_chart(diagnosis: &DiagnosisResult) -> BarChart<'static> {
    let bars: Vec<Bar> = diagnosis
        .recommended_upgrades
        .iter()
        .enumerate()
        .map(|(idx, upgrade)| {
            let boost = upgrade.performance_boost_percentage.max(0.0).round() as u64;
            let color = if idx % 2 == 0 { Color::Blue } else { Color::Magenta };
            Bar::default()
                .value(boost)
                .text_value(format!("{}%", boost))
                .label(Line::from(upgrade.short_label()))
                .style(Style::default().fg(color))
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Performance Impact Estimate "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .max(100)
}

pub fn draw_summary(frame: &mut Frame, app: &App, area: Rect) {
    let Some(diagnosis) = app.state().diagnosis.as_ref() else {
        return no_results(frame, area);
    };
    let costs = CostComparison::from_result(diagnosis);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(9)])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            title("Decision Time"),
            subtitle(&format!(
                "Based on the age of your device ({} years) and the estimated costs.",
                app.state().specs.age_years
            )),
        ])
        .alignment(Alignment::Center),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let mut repair = vec![
        Line::from(Span::styled(
            format!("~${}", format_usd(costs.repair_total_usd())),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        subtitle("Estimated total for parts and service"),
        Line::raw(""),
    ];
    repair.extend(costs.repair_points().iter().map(|p| Line::raw(format!("• {}", p))));
    frame.render_widget(
        Paragraph::new(repair)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Repair & Upgrade ")),
        columns[0],
    );

    let highlight = if costs.favors_replacement() {
        Color::Green
    } else {
        MUTED
    };
    let mut replace = vec![
        Line::from(Span::styled(
            costs.replacement.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        subtitle("Entry to Mid-level modern replacement"),
        Line::raw(""),
    ];
    replace.extend(
        costs
            .replacement_points()
            .iter()
            .map(|p| Line::raw(format!("• {}", p))),
    );
    frame.render_widget(
        Paragraph::new(replace).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(highlight))
                .title(" New Device (Est.) "),
        ),
        columns[1],
    );
}
