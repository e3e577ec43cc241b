//! Wire-contract test for the gateway entry point.
//!
//! Drives the seeded service through the synchronous request/response
//! surface, the same shape a platform gateway adapter uses: build a
//! request description, call `handle`, inspect the response description.

use todo_api_core::http::{HttpRequest, HttpResponse};
use todo_api_core::router::handle;
use todo_api_core::store::{default_todos, SharedStore, TodoStore};
use todo_api_core::types::Todo;

fn seeded() -> SharedStore {
    SharedStore::new(TodoStore::with_todos(default_todos()))
}

fn request(method: &str, path: &str, body: Option<&str>) -> HttpRequest {
    HttpRequest {
        method: method.to_string(),
        path: path.to_string(),
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.map(str::to_string),
    }
}

fn body_json(resp: &HttpResponse) -> serde_json::Value {
    serde_json::from_str(&resp.body).unwrap()
}

#[test]
fn seeded_lifecycle() {
    let store = seeded();

    // Step 1: create — the counter sits above the two seeds.
    let resp = handle(&store, &request("POST", "/todos", Some(r#"{"task":"Write tests"}"#)));
    assert_eq!(resp.status, 201);
    assert_eq!(
        body_json(&resp),
        serde_json::json!({
            "todo": {"id": 3, "task": "Write tests", "completed": false}
        })
    );

    // Step 2: partial update of a seed leaves its task untouched.
    let resp = handle(&store, &request("PUT", "/todos/1", Some(r#"{"completed":true}"#)));
    assert_eq!(resp.status, 200);
    assert_eq!(
        body_json(&resp),
        serde_json::json!({
            "todo": {"id": 1, "task": "Learn AWS Lambda", "completed": true}
        })
    );

    // Step 3: delete the other seed.
    let resp = handle(&store, &request("DELETE", "/todos/2", None));
    assert_eq!(resp.status, 200);
    assert_eq!(body_json(&resp), serde_json::json!({"message": "Todo deleted"}));

    // Step 4: two records remain, ids 1 and 3.
    let resp = handle(&store, &request("GET", "/todos", None));
    assert_eq!(resp.status, 200);
    let json = body_json(&resp);
    let ids: Vec<u64> = json["todos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn reads_are_idempotent() {
    let store = seeded();
    let first = handle(&store, &request("GET", "/todos", None));
    let second = handle(&store, &request("GET", "/todos", None));
    assert_eq!(first.status, 200);
    assert_eq!(first.body, second.body);
}

#[test]
fn created_ids_are_distinct_and_increasing() {
    let store = seeded();
    let mut ids = Vec::new();
    for i in 0..5 {
        let body = format!(r#"{{"task":"task {i}"}}"#);
        let resp = handle(&store, &request("POST", "/todos", Some(&body)));
        assert_eq!(resp.status, 201);
        ids.push(body_json(&resp)["todo"]["id"].as_u64().unwrap());
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    let seeds: Vec<u64> = default_todos().iter().map(|t| t.id).collect();
    assert!(ids.iter().all(|id| !seeds.contains(id)));
}

#[test]
fn failed_mutations_leave_the_collection_unchanged() {
    let store = seeded();
    let before: Vec<Todo> = store.list().unwrap();

    for req in [
        request("PUT", "/todos/99", Some(r#"{"completed":true}"#)),
        request("DELETE", "/todos/99", None),
        request("POST", "/todos", Some("{}")),
        request("POST", "/todos", Some("not json")),
    ] {
        let resp = handle(&store, &req);
        assert!(resp.status == 404 || resp.status == 400);
    }

    assert_eq!(store.list().unwrap(), before);
}
