//! Client core for the todo list component.
//!
//! # Overview
//! Holds the list state for a single to-do list view and keeps it in step
//! with a remote REST backend. The core never touches the network itself:
//! requests are described as data and executed by a host [`Transport`].
//!
//! # Design
//! - [`TodoClient`] builds `HttpRequest`s and parses `HttpResponse`s.
//! - [`Store`] is the only mutator of [`ViewState`]; everything that
//!   changes the view is an [`Action`].
//! - [`SyncLayer`] runs a [`Command`] over a `Transport` and reports the
//!   outcome as an `Action`.
//! - [`Dispatcher`] wires the two together: it spawns requests and notice
//!   timers and applies their outcomes one at a time.
//! - [`render()`] turns a `ViewState` into rows, each in display or edit mode.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod store;
pub mod sync;
pub mod types;

pub use client::TodoClient;
pub use config::Config;
pub use dispatcher::{Confirm, Dispatcher};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render, Control, Row, RowMode, View};
pub use state::{Notice, NoticeKind, RowState, ViewState};
pub use store::{Action, Command, Effect, Store};
pub use sync::{SyncLayer, Transport};
pub use types::{Draft, Item, ItemId};
