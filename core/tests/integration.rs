//! Full lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every facade
//! operation over real HTTP through `UreqTransport`. Validates that request
//! building, transport and interpretation work end-to-end.

use std::net::SocketAddr;

use todo_api_client::interpret::check_status;
use todo_api_client::{ApiError, HttpMethod, HttpRequest, Task, TodoApiClient, Transport};

/// Serve `tasks` from the mock server on a background thread.
fn start_server(tasks: Vec<mock_server::Task>) -> SocketAddr {
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
            mock_server::run_with_tasks(listener, tasks).await
        })
        .unwrap();
    });

    addr
}

fn seed() -> Vec<mock_server::Task> {
    vec![
        mock_server::Task {
            id: "1".to_string(),
            user_id: "1".to_string(),
            title: "delectus aut autem".to_string(),
            finished: false,
        },
        mock_server::Task {
            id: "2".to_string(),
            user_id: "1".to_string(),
            title: "quis ut nam facilis et officia qui".to_string(),
            finished: true,
        },
    ]
}

#[test]
fn crud_lifecycle() {
    let addr = start_server(seed());
    // Trailing slash exercises base/path joining over the wire.
    let client = TodoApiClient::new(&format!("http://{addr}/")).unwrap();

    // Step 1: list — seeded order.
    let tasks = client.list_tasks().unwrap();
    let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);

    // Step 2: get one.
    let task = client.get_task("1").unwrap();
    assert_eq!(task, Task::new("1", "1", "delectus aut autem", false));

    // Step 3: the same get again is structurally equal.
    assert_eq!(client.get_task("1").unwrap(), task);

    // Step 4: create with an empty id; the server assigns one.
    let created = client.add_task(&Task::new("", "2", "Finish this kata", false)).unwrap();
    assert_eq!(created.id, "3");
    assert_eq!(created.title, "Finish this kata");

    // Step 5: list — new task appended.
    let tasks = client.list_tasks().unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[2], created);

    // Step 6: delete.
    client.delete_task(&created.id).unwrap();

    // Step 7: get after delete — ItemNotFound.
    assert_eq!(client.get_task(&created.id), Err(ApiError::ItemNotFound));

    // Step 8: delete again — ItemNotFound.
    assert_eq!(client.delete_task(&created.id), Err(ApiError::ItemNotFound));

    // Step 9: list — back to the seed.
    assert_eq!(client.list_tasks().unwrap().len(), 2);
}

#[test]
fn accept_header_reaches_the_server() {
    let addr = start_server(seed());
    let client = TodoApiClient::new(&format!("http://{addr}")).unwrap();

    // The server answers 406 to anything that does not ask for JSON.
    assert!(client.list_tasks().is_ok());

    let without_accept = HttpRequest {
        method: HttpMethod::Get,
        url: format!("http://{addr}/todos"),
        headers: Vec::new(),
        body: None,
    };
    let response = client.transport().execute(&without_accept).unwrap();
    assert_eq!(check_status(&response), Err(ApiError::UnknownApiError(406)));
}

#[test]
fn unsupported_method_is_unknown_api_error() {
    let addr = start_server(Vec::new());
    let client = TodoApiClient::new(&format!("http://{addr}")).unwrap();

    // DELETE on the collection is routed but not allowed: 405.
    let request = HttpRequest {
        method: HttpMethod::Delete,
        url: format!("http://{addr}/todos"),
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        body: None,
    };
    let response = client.transport().execute(&request).unwrap();
    assert_eq!(check_status(&response), Err(ApiError::UnknownApiError(405)));
}

#[test]
fn ids_with_reserved_characters_round_trip() {
    let addr = start_server(seed());
    let client = TodoApiClient::new(&format!("http://{addr}")).unwrap();

    for id in ["a/b", "1?x=2", "with space", "/"] {
        let created = client.add_task(&Task::new(id, "1", "odd id", false)).unwrap();
        assert_eq!(created.id, id);
        assert_eq!(client.get_task(id).unwrap(), created, "{id:?}");
        client.delete_task(id).unwrap();
        assert_eq!(client.get_task(id), Err(ApiError::ItemNotFound), "{id:?}");
    }

    // The collection itself is untouched.
    assert_eq!(client.list_tasks().unwrap().len(), 2);
}

#[test]
fn duplicate_id_is_unknown_api_error() {
    let addr = start_server(seed());
    let client = TodoApiClient::new(&format!("http://{addr}")).unwrap();

    let result = client.add_task(&Task::new("1", "1", "again", false));
    assert_eq!(result, Err(ApiError::UnknownApiError(409)));
}

#[test]
fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TodoApiClient::new(&format!("http://{addr}")).unwrap();
    assert!(matches!(client.list_tasks(), Err(ApiError::Transport(_))));
}
