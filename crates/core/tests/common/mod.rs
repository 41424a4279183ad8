#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};
use symscope_api::{ApiResult, GraphQlRequest, GraphQlResponse, GraphQlTransport};
use tokio::sync::Notify;

type Responder = dyn Fn(&GraphQlRequest) -> ApiResult<GraphQlResponse> + Send + Sync;

/// In-memory transport that answers every request with `responder` and
/// remembers what it was asked.
pub struct FakeTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<GraphQlRequest>>,
    /// Requests whose `commitID` equals this never complete.
    stall_commit: Option<String>,
    pub started: Arc<Notify>,
}

impl FakeTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&GraphQlRequest) -> ApiResult<GraphQlResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
            stall_commit: None,
            started: Arc::new(Notify::new()),
        }
    }

    pub fn with_data(data: Value) -> Self {
        Self::new(move |_| Ok(GraphQlResponse::from_data(data.clone())))
    }

    pub fn stalling_on(mut self, commit_id: &str) -> Self {
        self.stall_commit = Some(commit_id.to_string());
        self
    }

    pub fn requests(&self) -> Vec<GraphQlRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl GraphQlTransport for FakeTransport {
    async fn execute(&self, request: &GraphQlRequest) -> ApiResult<GraphQlResponse> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());
        self.started.notify_one();

        if let Some(stall) = &self.stall_commit {
            if request.variables["commitID"] == stall.as_str() {
                std::future::pending::<()>().await;
            }
        }
        (self.responder)(request)
    }
}

pub fn symbol(identifier: &str, children: Value) -> Value {
    json!({
        "text": identifier.rsplit('.').next().unwrap_or(identifier),
        "url": format!("/github.com/golang/go/-/symbols/go/{identifier}"),
        "moniker": { "kind": "export", "scheme": "go", "identifier": identifier },
        "hover": { "markdown": { "text": format!("```go\nfunc {identifier}()\n```\n---\nDocs for {identifier}.") } },
        "references": { "nodes": [
            reference("src/def.go", 10),
            reference("src/use1.go", 20),
            reference("src/use2.go", 30),
            reference("src/use3.go", 40),
            reference("src/use4.go", 50)
        ]},
        "children": children
    })
}

pub fn reference(path: &str, line: u32) -> Value {
    json!({
        "range": {
            "start": { "line": line, "character": 5 },
            "end": { "line": line, "character": 8 }
        },
        "resource": {
            "path": path,
            "commit": { "oid": "0123456789abcdef" },
            "repository": { "name": "github.com/golang/go" }
        }
    })
}

pub fn tree_data(nodes: Value) -> Value {
    json!({
        "node": {
            "commit": {
                "tree": {
                    "expSymbols": { "nodes": nodes }
                }
            }
        }
    })
}
