// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting GraphQL responses.

use crate::constants::endpoints::CONTROL_PLANE_PATH;
use crate::error::{ArgoSyncError, Result};
use crate::graphql::{GraphqlRequest, GraphqlTransport, Operation};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// A call recorded by [`ScriptedTransport`]
#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub operation: Operation,
    pub variables: Value,
}

#[derive(Debug, Clone)]
enum Scripted {
    Data(Value),
    Error(String),
}

/// An in-memory transport answering each operation with a fixed reply.
/// Clones share the recorded calls.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<HashMap<Operation, Scripted>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `data`
    pub fn on_ok(self, operation: Operation, data: Value) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(operation, Scripted::Data(data));
        self
    }

    /// Fail `operation` with a GraphQL error carrying `message`
    pub fn on_error(self, operation: Operation, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(operation, Scripted::Error(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.calls().into_iter().map(|c| c.operation).collect()
    }
}

#[async_trait]
impl GraphqlTransport for ScriptedTransport {
    async fn execute(&self, endpoint: &str, request: &GraphqlRequest) -> Result<Value> {
        self.calls.lock().unwrap().push(Call {
            endpoint: endpoint.to_string(),
            operation: request.operation,
            variables: request.variables.clone(),
        });

        let reply = self.replies.lock().unwrap().get(&request.operation).cloned();
        match reply {
            Some(Scripted::Data(data)) => Ok(data),
            Some(Scripted::Error(message)) => Err(ArgoSyncError::Graphql(message)),
            None => Err(ArgoSyncError::Graphql(format!(
                "no scripted reply for {}",
                request.operation
            ))),
        }
    }
}

/// An HTTP reply served by [`GraphqlServer`]
#[derive(Debug, Clone)]
pub struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A request received by [`GraphqlServer`]
#[derive(Debug, Clone)]
pub struct Received {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct ServerState {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    received: Arc<Mutex<Vec<Received>>>,
}

/// A local GraphQL endpoint serving replies in order, repeating the last one
pub struct GraphqlServer {
    addr: SocketAddr,
    state: ServerState,
}

impl GraphqlServer {
    pub async fn start(replies: Vec<Reply>) -> Self {
        let state = ServerState {
            replies: Arc::new(Mutex::new(replies.into())),
            received: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route(CONTROL_PLANE_PATH, post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, CONTROL_PLANE_PATH)
    }

    pub fn received(&self) -> Vec<Received> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn handle(State(state): State<ServerState>, headers: HeaderMap, body: String) -> Response {
    state.received.lock().unwrap().push(Received {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let reply = {
        let mut replies = state.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        }
    };

    match reply {
        Some(reply) => (
            StatusCode::from_u16(reply.status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            reply.body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
