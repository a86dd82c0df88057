//! TUI rendering with ratatui

use devicerx_core::Step;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::app::{App, Modal};
use super::views::{self, View};

/// Steps shown in the progress stepper
const STEPPER: [(Step, &str); 4] = [
    (Step::Category, "Device"),
    (Step::Symptoms, "Symptoms"),
    (Step::Specs, "Specs"),
    (Step::Results, "Results"),
];

/// Render header, stepper, current view, footer and any open modal.
pub fn draw(frame: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(2), // stepper
            Constraint::Min(5),    // body
            Constraint::Length(1), // status
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_header(frame, app, outer[0]);
    if stepper_visible(app.step()) {
        draw_stepper(frame, app, outer[1]);
    }
    let body = Block::default().borders(Borders::NONE);
    let inner = body.inner(outer[2]);
    views::draw(frame, app, inner);
    draw_status(frame, app, outer[3]);
    draw_footer(frame, app, outer[4]);

    if let Some(modal) = app.modal {
        draw_modal(frame, modal);
    }
}

fn stepper_visible(step: Step) -> bool {
    !matches!(step, Step::Landing | Step::Analyzing | Step::Admin)
}

// ── header ──────────────────────────────────────────────────────────────

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let nav = "F1 How it works · F2 About · F3 Support ";
    let left = vec![
        Span::styled(
            " SmartDevice",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Rx",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.provider_label),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let used: usize = left.iter().map(|s| s.content.width()).sum::<usize>() + nav.width();
    let spacer = (area.width as usize).saturating_sub(used);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(spacer)));
    spans.push(Span::styled(nav, Style::default().fg(Color::Gray)));

    let p = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)).fg(Color::White));
    frame.render_widget(p, area);
}

// ── stepper ─────────────────────────────────────────────────────────────

fn draw_stepper(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.step();
    let mut spans = vec![Span::raw(" ")];

    for (idx, (step, label)) in STEPPER.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let (mark, style) = if app.state().is_completed(*step) {
            ("✓", Style::default().fg(Color::Green))
        } else if current == *step {
            (
                "●",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{} {}", mark, label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ── status + footer ─────────────────────────────────────────────────────

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {}", status),
                Style::default().fg(Color::Yellow),
            )),
            area,
        );
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = View::for_step(app.step()).hints();
    let line = Line::from(vec![
        Span::styled(format!(" {}", hints), Style::default().fg(Color::Gray)),
        Span::styled(
            " · F10 admin · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20))),
        area,
    );
}

// ── modals ──────────────────────────────────────────────────────────────

fn modal_content(modal: Modal) -> (&'static str, Vec<Line<'static>>) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    match modal {
        Modal::HowItWorks => (
            " How it Works ",
            vec![
                Line::raw("SmartDevice Rx uses Google Gemini to analyze your device problems."),
                Line::raw(""),
                step_line(1, "Select Device:", "Tell us if it's a laptop, desktop, or mobile."),
                step_line(2, "Describe Issues:", "Select common symptoms or type your problem."),
                step_line(3, "Enter Specs:", "Provide basic details like RAM and Processor."),
                step_line(
                    4,
                    "AI Diagnosis:",
                    "Symptoms are cross-referenced with hardware patterns.",
                ),
                step_line(
                    5,
                    "Get Results:",
                    "Receive a fix estimate and upgrade recommendations.",
                ),
            ],
        ),
        Modal::About => (
            " About ",
            vec![
                Line::raw(
                    "SmartDevice Rx helps extend the lifespan of your electronics and reduce e-waste. \
                     Before buying new, find out whether a RAM upgrade or battery replacement can save your device.",
                ),
                Line::raw(""),
                Line::from(vec![
                    Span::raw("Powered by "),
                    Span::styled("Google Gemini", bold),
                    Span::raw(" for expert-level hardware advice."),
                ]),
                Line::raw(""),
                Line::from(Span::styled(
                    format!("Version {}", env!("CARGO_PKG_VERSION")),
                    muted,
                )),
            ],
        ),
        Modal::Support => (
            " Support ",
            vec![
                Line::raw("Need help using the tool? Or found a bug?"),
                Line::raw(""),
                Line::from(Span::styled("Contact Team", bold)),
                Line::from(Span::styled(
                    "support@smartdevicerx.com",
                    Style::default().fg(Color::Blue),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    "Disclaimer: recommendations come from AI analysis. Always consult a certified \
                     professional before performing hardware repairs.",
                    muted,
                )),
            ],
        ),
    }
}

fn step_line(n: u8, head: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{}. ", n)),
        Span::styled(head, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" {}", text)),
    ])
}

fn draw_modal(frame: &mut Frame, modal: Modal) {
    let (title, lines) = modal_content(modal);
    let area = centered(frame.area(), 64, 14);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(title)
                .title_bottom(" Esc close "),
        ),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use devicerx_core::{
        DeviceType, DiagnosisGateway, DiagnosisOutcome, GatewayConfig, Priority,
        UpgradeRecommendation, WizardAction,
    };
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        App::new(
            DiagnosisGateway::unconfigured(GatewayConfig::default()),
            std::env::temp_dir(),
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// App sitting on Results with the given outcome applied
    fn app_with_outcome(outcome: DiagnosisOutcome) -> App {
        let mut app = app();
        for action in [
            WizardAction::Advance,
            WizardAction::SelectDeviceType(DeviceType::Laptop),
            WizardAction::Advance,
            WizardAction::SetSymptomText("Runs hot".to_string()),
            WizardAction::Advance,
        ] {
            assert!(app.apply(action));
        }
        app.machine_mut().begin_diagnosis().unwrap();
        assert!(app.apply(WizardAction::CompleteDiagnosis(outcome)));
        app
    }

    #[test]
    fn test_landing_hides_stepper() {
        let screen = render(&app());
        assert!(screen.contains("Diagnose & Upgrade"));
        assert!(screen.contains("Identify Issues"));
        assert!(screen.contains("Get Recommendations"));
        assert!(screen.contains("Estimate Costs"));
        assert!(!screen.contains("○ Symptoms"));
    }

    #[test]
    fn test_category_lists_every_device_type() {
        let mut app = app();
        app.next();
        let screen = render(&app);
        for device in DeviceType::ALL {
            assert!(screen.contains(device.label()), "{} missing", device);
        }
        assert!(screen.contains("● Device"));
    }

    #[test]
    fn test_stepper_ticks_completed_steps() {
        let app = app_with_outcome(DiagnosisOutcome::fallback("offline"));
        let screen = render(&app);
        assert!(screen.contains("✓ Device"));
        assert!(screen.contains("✓ Specs"));
        assert!(screen.contains("● Results"));
    }

    #[test]
    fn test_results_shows_error_banner_on_fallback() {
        let app = app_with_outcome(DiagnosisOutcome::fallback("offline"));
        let screen = render(&app);
        assert!(screen.contains("Failed to diagnose device. Please try again."));
        assert!(screen.contains("MODERATE"));
        assert!(screen.contains("API Connection Error"));
    }

    #[test]
    fn test_upgrades_chart_and_summary() {
        let mut result = devicerx_core::DiagnosisResult::fallback();
        result.estimated_fix_price_usd = 50.0;
        result.recommended_upgrades.push(UpgradeRecommendation {
            component: "1TB NVMe SSD".to_string(),
            reason: "Faster boot".to_string(),
            estimated_cost_usd: 80.0,
            performance_boost_percentage: 40.0,
            priority: Priority::High,
        });
        let mut app = app_with_outcome(DiagnosisOutcome::from_model(result));
        assert!(!render(&app).contains("Failed to diagnose"));

        app.next();
        let screen = render(&app);
        assert!(screen.contains("Performance Impact Estimate"));
        assert!(screen.contains("1TB NVMe"));
        assert!(screen.contains("40%"));

        app.next();
        let screen = render(&app);
        assert!(screen.contains("Decision Time"));
        assert!(screen.contains("~$130"));
        assert!(screen.contains("$600 - $1200"));
        assert!(screen.contains("More expensive option"));
    }

    #[test]
    fn test_admin_and_modal() {
        let mut app = app();
        app.toggle_admin();
        let screen = render(&app);
        assert!(screen.contains("Admin Dashboard"));
        assert!(screen.contains("1,248"));
        assert!(screen.contains("High volume of requests for 'Overheating'"));

        app.toggle_modal(Modal::Support);
        let screen = render(&app);
        assert!(screen.contains("support@smartdevicerx.com"));
    }
}
