//! Full component lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the dispatcher over
//! real HTTP using ureq on tokio's blocking pool. Validates that request
//! building, response parsing and state reconciliation work end-to-end.

use todo_core::{
    Action, Config, Dispatcher, HttpMethod, HttpRequest, HttpResponse, ItemId, Transport,
    TransportError,
};

#[derive(Clone)]
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        // 4xx/5xx come back as data so the core can interpret them
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpResponse::new(status, body))
}

impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute(&agent, request))
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .map_err(|e| TransportError(e.to_string()))
    }
}

fn start_mock_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

fn set_compose(dispatcher: &mut Dispatcher<UreqTransport>, title: &str, description: &str) {
    dispatcher.dispatch(Action::SetComposeTitle(title.to_string()), &mut false);
    dispatcher.dispatch(Action::SetComposeDescription(description.to_string()), &mut false);
}

fn id_at(dispatcher: &Dispatcher<UreqTransport>, index: usize) -> ItemId {
    dispatcher.state().items[index].id.clone().expect("server id")
}

#[tokio::test]
async fn component_lifecycle() {
    let addr = start_mock_server();
    let config = Config {
        api_url: format!("http://{addr}/"),
        ..Config::default()
    };

    // Step 1: mount — list is empty.
    let mut dispatcher = Dispatcher::new(&config, UreqTransport::new());
    dispatcher.mount();
    dispatcher.settle().await;
    assert!(dispatcher.state().items.is_empty());
    assert!(dispatcher.state().error.is_none());

    // Step 2: create two items; ids come from the server echo.
    set_compose(&mut dispatcher, "Buy milk", "2%");
    dispatcher.dispatch(Action::Submit, &mut false);
    dispatcher.settle().await;
    set_compose(&mut dispatcher, "Walk dog", "Park");
    dispatcher.dispatch(Action::Submit, &mut false);
    dispatcher.settle().await;
    assert_eq!(dispatcher.state().items.len(), 2);
    let milk = id_at(&dispatcher, 0);

    // Step 3: a fresh list shows the same items in the same order.
    let local = dispatcher.state().items.clone();
    dispatcher.dispatch(Action::Refresh, &mut false);
    dispatcher.settle().await;
    assert_eq!(dispatcher.state().items, local);

    // Step 4: edit the first item straight after creating it.
    dispatcher.dispatch(Action::BeginEdit(milk.clone()), &mut false);
    dispatcher.dispatch(Action::SetEditDescription("Oat".to_string()), &mut false);
    dispatcher.dispatch(Action::SaveEdit, &mut false);
    dispatcher.settle().await;
    assert!(dispatcher.state().editing.is_none());
    assert!(dispatcher.state().error.is_none());

    dispatcher.dispatch(Action::Refresh, &mut false);
    dispatcher.settle().await;
    let item = dispatcher.state().item(&milk).unwrap();
    assert_eq!(item.title, "Buy milk");
    assert_eq!(item.description, "Oat");

    // Step 5: declined delete keeps the item.
    dispatcher.dispatch(Action::Delete(milk.clone()), &mut false);
    dispatcher.settle().await;
    assert!(dispatcher.state().item(&milk).is_some());

    // Step 6: confirmed delete removes it, on the server too.
    dispatcher.dispatch(Action::Delete(milk.clone()), &mut true);
    dispatcher.settle().await;
    assert!(dispatcher.state().item(&milk).is_none());
    dispatcher.dispatch(Action::Refresh, &mut false);
    dispatcher.settle().await;
    assert_eq!(dispatcher.state().items.len(), 1);
    assert_eq!(dispatcher.state().items[0].title, "Walk dog");

    // Step 7: deleting a stale id surfaces an error and changes nothing.
    let gone = milk;
    dispatcher.dispatch(Action::Delete(gone), &mut true);
    dispatcher.settle().await;
    assert!(dispatcher.state().error.is_some());
    assert_eq!(dispatcher.state().items.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_reports_error() {
    // bind then drop to get a port with nothing listening
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = Config {
        api_url: format!("http://{addr}"),
        ..Config::default()
    };

    let mut dispatcher = Dispatcher::new(&config, UreqTransport::new());
    dispatcher.mount();
    dispatcher.settle().await;

    assert!(dispatcher.state().items.is_empty());
    assert!(dispatcher.state().error.is_some());
}
