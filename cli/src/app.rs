//! Terminal host for the list component.
//!
//! Lines typed on stdin become store actions; request outcomes and notice
//! expiries arrive from the dispatcher. Both are handled on the one runtime
//! thread, and the view is reprinted whenever it changes.

use std::io::Write;

use anyhow::Result;
use tokio::sync::mpsc;
use todo_core::{render, Confirm, Config, Dispatcher, View};
use tracing::info;

use crate::input::{accepts, Input, HELP};
use crate::transport::UreqTransport;
use crate::view;

/// Stdin as a stream of lines, plus the blocking confirmation prompt.
pub struct Terminal {
    lines: mpsc::UnboundedReceiver<String>,
}

impl Terminal {
    /// Stdin is read on its own thread; the runtime thread only ever sees
    /// complete lines.
    pub fn stdin() -> Self {
        let (tx, lines) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines }
    }
}

impl Confirm for Terminal {
    /// Blocks the UI thread until the user answers. Responses that arrive in
    /// the meantime queue up and are applied afterwards.
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = std::io::stdout().flush();
        let answer = futures::executor::block_on(tokio::task::unconstrained(self.lines.recv()));
        accepts(answer.as_deref())
    }
}

enum Event {
    Line(Option<String>),
    Outcome(todo_core::Action),
}

pub async fn run(config: Config) -> Result<()> {
    info!(api_url = %config.api_url, "starting");
    let mut terminal = Terminal::stdin();
    let mut dispatcher = Dispatcher::new(&config, UreqTransport::new());
    dispatcher.mount();
    println!("type `help` for commands");

    let mut shown: Option<View> = None;
    loop {
        let current = render(dispatcher.state());
        if shown.as_ref() != Some(&current) {
            print!("{}", view::to_text(&current));
            let _ = std::io::stdout().flush();
            shown = Some(current);
        }

        let event = tokio::select! {
            line = terminal.lines.recv() => Event::Line(line),
            action = dispatcher.recv() => Event::Outcome(action),
        };

        match event {
            // stdin closed
            Event::Line(None) => break,
            Event::Line(Some(line)) => {
                let input = match Input::parse(&line) {
                    Ok(input) => input,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match input {
                    Input::Quit => break,
                    Input::Help => println!("{HELP}"),
                    input => {
                        let Some(view) = shown.as_ref() else { continue };
                        match input.into_actions(view) {
                            Ok(actions) => {
                                for action in actions {
                                    dispatcher.dispatch(action, &mut terminal);
                                }
                            }
                            Err(err) => println!("{err}"),
                        }
                    }
                }
            }
            Event::Outcome(action) => dispatcher.dispatch(action, &mut terminal),
        }
    }

    info!(
        requests_in_flight = dispatcher.requests_in_flight(),
        "shutting down"
    );
    Ok(())
}
