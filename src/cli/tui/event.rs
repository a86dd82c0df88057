//! Crossterm event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use devicerx_core::Step;
use std::time::Duration;

use super::app::{App, Modal};

/// Poll crossterm events and update app state.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<()> {
    // Apply any finished diagnosis first.
    app.poll_responses();

    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }

    // Advance the spinner.
    app.tick();

    Ok(())
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // ── Quit ────────────────────────────────────────────────
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Esc) if app.modal.is_some() => app.modal = None,
        (_, KeyCode::Esc) => app.should_quit = true,

        // ── Modals / chrome ─────────────────────────────────────
        (_, KeyCode::F(1)) => app.toggle_modal(Modal::HowItWorks),
        (_, KeyCode::F(2)) => app.toggle_modal(Modal::About),
        (_, KeyCode::F(3)) => app.toggle_modal(Modal::Support),
        (_, KeyCode::F(10)) => app.toggle_admin(),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => app.start_over(),

        // Any other key closes an open modal
        _ if app.modal.is_some() => app.modal = None,

        // Nothing else while a diagnosis is running
        _ if app.is_loading() => {}

        // ── Navigation ──────────────────────────────────────────
        (_, KeyCode::Enter) => app.next(),
        (_, KeyCode::BackTab) | (KeyModifiers::CONTROL, KeyCode::Char('b')) => app.back(),
        (_, KeyCode::Up) => app.cursor_up(),
        (_, KeyCode::Down) | (_, KeyCode::Tab) => app.cursor_down(),
        (_, KeyCode::Left) => app.adjust(-1),
        (_, KeyCode::Right) => app.adjust(1),

        // ── Text entry ──────────────────────────────────────────
        (_, KeyCode::Backspace) => app.backspace(),
        (m, KeyCode::Char(c)) if app.accepts_text() && !m.contains(KeyModifiers::CONTROL) => {
            app.input_char(c)
        }

        // ── Single-key shortcuts outside text fields ────────────
        (_, KeyCode::Char(' ')) => app.activate(),
        (_, KeyCode::Char('p')) if app.step() == Step::Summary => app.export_report(),
        (_, KeyCode::Char('q')) => app.should_quit = true,

        _ => {}
    }
}
