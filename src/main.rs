//! Interactive terminal entry point.
//!
//! Reads one command per line from stdin and redraws the gallery after every
//! change. Worker responses are applied as they arrive, so a page can land
//! while the user is typing the next command.
//!
//! # Lifecycle
//!
//! 1. **Load**: Read configuration, initialize tracing, resolve the theme
//! 2. **Start**: Issue the initial fetch for the default term
//! 3. **Loop**: `select!` over stdin lines and worker responses
//! 4. **Render**: Clear the screen and print the current frame
//!
//! # Commands
//!
//! See `help` at the prompt, or [`pixgrid::ui::HELP_TEXT`].

#![allow(clippy::multiple_crate_versions)]

use pixgrid::api::UnsplashClient;
use pixgrid::observability::init_tracing;
use pixgrid::ui::{parse_command, render, Command, HELP_TEXT};
use pixgrid::{initialize, Config, Event, GallerySession, Result};
use std::io::Write;
use std::sync::Arc;
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader};

const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";
const FALLBACK_COLS: usize = 100;
const PROMPT: &str = "> ";

fn columns() -> usize {
    terminal_size().map_or(FALLBACK_COLS, |(Width(cols), _)| usize::from(cols))
}

fn draw(session: &GallerySession, notice: Option<&str>) {
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{CLEAR_SCREEN}{}", render(session.state(), columns()));
    if let Some(notice) = notice {
        let _ = writeln!(stdout, "{notice}");
    }
    let _ = write!(stdout, "{PROMPT}");
    let _ = stdout.flush();
}

/// Dispatches events in order; returns `true` once one of them asks to quit.
fn run_events(session: &mut GallerySession, events: &[Event]) -> Result<bool> {
    for event in events {
        if session.dispatch(event)?.quit {
            return Ok(true);
        }
    }
    Ok(false)
}

fn suggestions(session: &GallerySession, text: Option<String>) -> String {
    let state = session.state();
    let input = text.unwrap_or_else(|| state.query.draft().to_string());
    let hits = state.history.suggestions(&input);
    if hits.is_empty() {
        format!("no recent searches match '{input}'")
    } else {
        let numbered: Vec<String> = hits
            .iter()
            .map(|hit| {
                let position = state.history.entries().iter().position(|entry| entry == hit).unwrap_or(0);
                format!("{} {hit}", position + 1)
            })
            .collect();
        format!("recent searches: {}", numbered.join(", "))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config);

    let state = initialize(&config);
    let transport = Arc::new(UnsplashClient::new(&config));
    let mut session = GallerySession::new(state, transport);

    session.dispatch(&Event::Start)?;
    draw(&session, None);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };

                match parse_command(&line) {
                    None => draw(&session, None),
                    Some(Command::Events(events)) => {
                        if run_events(&mut session, &events)? {
                            break;
                        }
                        draw(&session, None);
                    }
                    Some(Command::Suggest(text)) => {
                        let notice = suggestions(&session, text);
                        draw(&session, Some(&notice));
                    }
                    Some(Command::Help) => draw(&session, Some(HELP_TEXT)),
                    Some(Command::Invalid(message)) => draw(&session, Some(&message)),
                }
            }
            Some(response) = session.next_response() => {
                if session.deliver(response)?.render {
                    draw(&session, None);
                }
            }
        }
    }

    tracing::debug!("exiting");
    Ok(())
}
