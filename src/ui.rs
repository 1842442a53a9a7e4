// src/ui.rs

use crate::api::send_chat;
use crate::app::App;
use crate::chat_view::draw_chat;
use crate::config::get_config;
use crate::errors::ChatResult;
use crate::key_handlers::handle_key;
use crate::models::ChatReply;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

/// Runs the terminal UI, restoring the terminal on the way out even when
/// the loop errors.
pub async fn run_ui() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// The event loop. Keyboard events arrive over one channel, API outcomes
/// over another; the network call runs on its own task so the UI stays
/// responsive while a request is in flight.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let config = get_config();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let mut app = App::new(&config.default_persona);

    // Keyboard input comes from a blocking poll loop.
    let (key_tx, mut key_rx) = mpsc::channel::<KeyEvent>(100);
    tokio::task::spawn_blocking(move || loop {
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            if let Ok(CEvent::Key(key)) = event::read() {
                if key_tx.blocking_send(key).is_err() {
                    break;
                }
            }
        } else if key_tx.is_closed() {
            break;
        }
    });

    // API outcomes come back to the controller over this channel.
    let (reply_tx, mut reply_rx) = mpsc::channel::<ChatResult<ChatReply>>(16);

    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|f| draw_chat(f, &mut app))?;

        tokio::select! {
            Some(key) = key_rx.recv() => {
                if let Some(request) = handle_key(key, &mut app) {
                    log::info!("sending message ({} chars) as {}", request.message.len(), request.persona);
                    let client = client.clone();
                    let api_url = config.api_url.clone();
                    let reply_tx = reply_tx.clone();
                    tokio::spawn(async move {
                        let outcome = send_chat(&client, &api_url, &request).await;
                        let _ = reply_tx.send(outcome).await;
                    });
                }
            }
            Some(outcome) = reply_rx.recv() => {
                app.apply_outcome(outcome);
            }
            _ = tick.tick() => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
