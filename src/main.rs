//! Contacts Browser - actor-based terminal contacts browser
//!
//! Architecture:
//! - UI Layer - reads commands from stdin, prints render states
//! - App Layer - view models processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use contacts_browser::app::AppActor;
use contacts_browser::config::Config;
use contacts_browser::constants::{APP_NAME, APP_VERSION};
use contacts_browser::messages::ui_events::line_to_ui_event;
use contacts_browser::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use contacts_browser::network::{NetworkActor, NetworkClient, UserRepository};
use contacts_browser::ui::render_lines;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging to file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .context("log_file must name a file")?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(base_url = %config.base_url, "Starting {} {}", APP_NAME, APP_VERSION);

    let client = NetworkClient::new(&config.base_url, config.request_timeout())?;
    let repository = Arc::new(UserRepository::new(client));

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(repository, config.detail_settings(), net_resp_tx);
    let network = tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    println!("{} {} - type 'help' for commands", APP_NAME, APP_VERSION);
    run_ui_loop(BufReader::new(tokio::io::stdin()), ui_tx, &mut render_rx).await;

    let _ = network.await;
    Ok(())
}

/// Read commands and print each new render state. Every exit path sends `Quit`.
async fn run_ui_loop<R>(
    mut reader: R,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) where
    R: AsyncBufRead + Unpin,
{
    let mut current_state = RenderState::default();
    // Survives a cancelled read so a partial line is completed on the next pass
    let mut buf = Vec::new();

    loop {
        tokio::select! {
            read = reader.read_until(b'\n', &mut buf) => {
                match read {
                    // EOF quits like the quit command
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(error = %e, "Reading stdin failed");
                        break;
                    }
                }
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(|c: char| c == '\n' || c == '\r')
                    .to_string();
                buf.clear();

                match line_to_ui_event(&line, current_state.route, current_state.show_help) {
                    Some(UiEvent::Quit) => break,
                    Some(event) => {
                        let _ = ui_tx.send(event);
                    }
                    None => println!("Unknown command. Type 'help' for commands."),
                }
            }
            state = render_rx.recv() => {
                let Some(state) = state else { break };
                for line in render_lines(&state) {
                    println!("{}", line);
                }
                current_state = state;
            }
        }
    }

    let _ = ui_tx.send(UiEvent::Quit);
}
