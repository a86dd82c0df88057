//! Terminal wizard for SmartDevice Rx
//!
//! Full-screen ratatui + crossterm front end over the core wizard machine.
//! Diagnoses run on background tasks; the draw loop never waits on the model.

pub mod app;
pub mod event;
pub mod ui;
mod views;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::settings::AppConfig;
use app::App;

/// Run the wizard until the user quits.
pub async fn run(config: AppConfig) -> Result<()> {
    let gateway = super::build_gateway(&config);
    let mut app = App::new(gateway, config.report_dir());
    info!(provider = %app.provider_label, "Starting wizard");

    // ── Terminal setup ──────────────────────────────────────────────

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // ── Main loop ───────────────────────────────────────────────────

    let tick_rate = config.tick_rate();

    let run_result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        if let Err(e) = event::handle_events(&mut app, tick_rate) {
            break Err(e);
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // ── Restore terminal ────────────────────────────────────────────

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Wizard closed");
    run_result
}
