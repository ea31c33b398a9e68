//! Single update dispatcher.
//!
//! # Design
//! The dispatcher owns the [`Store`] and is the only place that calls
//! [`Store::reduce`]. Requests and notice timers run as independent tokio
//! tasks and report back over one channel; their outcomes are applied one at
//! a time, in arrival order, by whoever drives [`Dispatcher::recv`]. Nothing
//! orders or cancels requests: whichever response lands last wins.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::config::Config;
use crate::state::ViewState;
use crate::store::{Action, Command, Effect, Store};
use crate::sync::{SyncLayer, Transport};

/// Synchronous yes/no question asked before a destructive request.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A fixed answer.
impl Confirm for bool {
    fn confirm(&mut self, _prompt: &str) -> bool {
        *self
    }
}

enum Completion {
    Response(Action),
    Timer(Action),
}

/// Reports exactly one outcome for a spawned request. If the task unwinds
/// before [`InFlight::finish`], the command's failure outcome is sent from
/// `Drop` so the in-flight count still goes down.
struct InFlight {
    tx: mpsc::UnboundedSender<Completion>,
    failure: Option<Action>,
}

impl InFlight {
    fn finish(mut self, outcome: Action) {
        self.failure = None;
        // the receiver is gone once the component is unmounted
        let _ = self.tx.send(Completion::Response(outcome));
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(failure) = self.failure.take() {
            warn!(?failure, "request task ended without an outcome");
            let _ = self.tx.send(Completion::Response(failure));
        }
    }
}

pub struct Dispatcher<T> {
    store: Store,
    sync: Arc<SyncLayer<T>>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    requests_in_flight: usize,
    timers_pending: usize,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            store: Store::new(config.notice_ttl),
            sync: Arc::new(SyncLayer::new(TodoClient::new(&config.api_url), transport)),
            tx,
            rx,
            requests_in_flight: 0,
            timers_pending: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn requests_in_flight(&self) -> usize {
        self.requests_in_flight
    }

    pub fn timers_pending(&self) -> usize {
        self.timers_pending
    }

    /// Start the component: fetch the list immediately.
    ///
    /// Must be called from within a tokio runtime, like every method that can
    /// issue a request.
    pub fn mount(&mut self) {
        self.dispatch(Action::Mounted, &mut false);
    }

    /// Apply `action` and run the effects it produces.
    pub fn dispatch(&mut self, action: Action, confirm: &mut impl Confirm) {
        for effect in self.store.reduce(action) {
            match effect {
                Effect::Request(command) => self.spawn_request(command),
                Effect::Confirm { prompt, command } => {
                    if confirm.confirm(prompt) {
                        self.spawn_request(command);
                    } else {
                        debug!(?command, "declined");
                    }
                }
                Effect::ExpireNotice {
                    kind,
                    generation,
                    after,
                } => {
                    self.timers_pending += 1;
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(Completion::Timer(Action::ExpireNotice { kind, generation }));
                    });
                }
            }
        }
    }

    /// Wait for the next request outcome or notice expiry. The caller is
    /// expected to feed it back through [`Dispatcher::dispatch`].
    ///
    /// Pends forever when nothing is outstanding. Cancel safe.
    pub async fn recv(&mut self) -> Action {
        // `self` holds a sender, so the channel never closes
        let Some(completion) = self.rx.recv().await else {
            return std::future::pending().await;
        };
        match completion {
            Completion::Response(action) => {
                self.requests_in_flight -= 1;
                action
            }
            Completion::Timer(action) => {
                self.timers_pending -= 1;
                action
            }
        }
    }

    /// Apply outcomes until no request is in flight. Notice timers may still
    /// be pending afterwards.
    pub async fn settle(&mut self) {
        while self.requests_in_flight > 0 {
            let action = self.recv().await;
            self.dispatch(action, &mut false);
        }
    }

    /// Like [`Dispatcher::settle`], but also waits out every notice timer.
    pub async fn drain(&mut self) {
        while self.requests_in_flight + self.timers_pending > 0 {
            let action = self.recv().await;
            self.dispatch(action, &mut false);
        }
    }

    fn spawn_request(&mut self, command: Command) {
        debug!(?command, "request");
        self.requests_in_flight += 1;
        let sync = Arc::clone(&self.sync);
        let guard = InFlight {
            tx: self.tx.clone(),
            failure: Some(command.failure()),
        };
        tokio::spawn(async move {
            let outcome = sync.run(command).await;
            guard.finish(outcome);
        });
    }
}
