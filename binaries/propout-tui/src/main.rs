//! PropOut terminal client.
//!
//! Browse the apartment catalog, view details and send booking requests to
//! the PropOut backend without leaving the terminal.

mod app;
mod booking;
mod events;
mod form;
mod input;
mod theme;
mod ui;
mod worker;

use anyhow::Result;
use app::{App, TICK_RATE_MS};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use events::EventHandler;
use propout_api::ApiClient;
use ratatui::prelude::*;
use std::io::stdout;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worker::ApiWorker;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = ApiClient::from_env();
    info!(base_url = client.base_url(), "starting PropOut client");

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(ApiWorker::spawn(client));
    let event_handler = EventHandler::new(TICK_RATE_MS);

    let result = run_app(&mut terminal, &mut app, event_handler).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        eprintln!("Application error: {e}");
    }
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut event_handler: EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event_handler.next().await? {
            events::Event::Tick => app.on_tick(),
            events::Event::Key(key) => {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
            events::Event::Mouse(mouse) => app.handle_mouse(mouse),
            events::Event::Resize(_, _) => {}
        }
    }
}
