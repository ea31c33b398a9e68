//! Sync layer: the four REST calls and their translation into store actions.
//!
//! # Design
//! `SyncLayer` pairs the I/O-free [`TodoClient`] with a host-supplied
//! [`Transport`]. The typed methods (`list`, `create`, ...) return API
//! results; [`SyncLayer::run`] collapses a result into the outcome
//! [`Action`] the store understands and logs the cause of any failure.

use std::future::Future;

use tracing::warn;

use crate::client::TodoClient;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::store::{Action, Command};
use crate::types::{Draft, Item, ItemId};

/// Executes one HTTP exchange. Implementations must not retry and must not
/// time out on their own.
pub trait Transport: Send + Sync + 'static {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

#[derive(Debug)]
pub struct SyncLayer<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> SyncLayer<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let response = self.transport.execute(self.client.build_list_items()).await?;
        self.client.parse_list_items(response)
    }

    pub async fn create(&self, draft: &Draft) -> Result<Option<ItemId>, ApiError> {
        let request = self.client.build_create_item(draft)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_item(response)
    }

    pub async fn update(&self, id: &ItemId, draft: &Draft) -> Result<(), ApiError> {
        let request = self.client.build_update_item(id, draft)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_item(response)
    }

    pub async fn delete(&self, id: &ItemId) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_item(id)).await?;
        self.client.parse_delete_item(response)
    }

    /// Perform `command` and report its outcome.
    pub async fn run(&self, command: Command) -> Action {
        match command {
            Command::List => match self.list().await {
                Ok(items) => Action::Listed(items),
                Err(err) => {
                    warn!(%err, "list failed");
                    Action::ListFailed
                }
            },
            Command::Create(draft) => match self.create(&draft).await {
                Ok(id) => Action::Created { draft, id },
                Err(err) => {
                    warn!(%err, "create failed");
                    Action::CreateFailed
                }
            },
            Command::Update(id, draft) => match self.update(&id, &draft).await {
                Ok(()) => Action::Updated { id, draft },
                Err(err) => {
                    warn!(%id, %err, "update failed");
                    Action::UpdateFailed
                }
            },
            Command::Delete(id) => match self.delete(&id).await {
                Ok(()) => Action::Deleted(id),
                Err(err) => {
                    warn!(%id, %err, "delete failed");
                    Action::DeleteFailed
                }
            },
        }
    }
}
