//! In-process fake replica for agent tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use onchain_social_core::{CallRequest, CallResponse, HealthStatus, ReplicaStatus, RootKey};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const CANISTER: &str = "bkyz2-fmaaa-aaaaa-qaaaq-cai";
pub const ROOT_KEY_HEX: &str = "308182301d060d2b0601040182dc7c0503010201";

/// A call as seen by the replica.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: &'static str,
    pub canister_id: String,
    pub request: CallRequest,
}

pub struct ReplicaState {
    pub health: HealthStatus,
    pub root_key: String,
    pub reply: CallResponse,
    pub status_checks: AtomicUsize,
    pub root_key_fetches: AtomicUsize,
    pub calls: Mutex<Vec<RecordedCall>>,
}

impl ReplicaState {
    pub fn replying(reply: serde_json::Value) -> Self {
        Self {
            health: HealthStatus::Healthy,
            root_key: ROOT_KEY_HEX.to_string(),
            reply: CallResponse::Replied { reply },
            status_checks: AtomicUsize::new(0),
            root_key_fetches: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn alice() -> Self {
        Self::replying(json!({
            "username": "alice",
            "email": "a@example.com",
            "bio": "hi"
        }))
    }

    pub fn root_key_fetches(&self) -> usize {
        self.root_key_fetches.load(Ordering::SeqCst)
    }

    pub fn status_checks(&self) -> usize {
        self.status_checks.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

pub struct FakeReplica {
    pub addr: SocketAddr,
    pub state: Arc<ReplicaState>,
}

impl FakeReplica {
    pub async fn start(state: ReplicaState) -> Self {
        let state = Arc::new(state);
        let app = Router::new()
            .route("/api/v2/status", get(status))
            .route("/api/v2/root_key", get(root_key))
            .route("/api/v2/canister/{canister_id}/query", post(query))
            .route("/api/v2/canister/{canister_id}/call", post(update))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }
}

type AppState = Arc<ReplicaState>;

async fn status(State(state): State<AppState>) -> Json<ReplicaStatus> {
    state.status_checks.fetch_add(1, Ordering::SeqCst);
    Json(ReplicaStatus {
        replica_health_status: state.health,
        impl_version: Some("fake-0.1".to_string()),
    })
}

async fn root_key(State(state): State<AppState>) -> Json<RootKey> {
    state.root_key_fetches.fetch_add(1, Ordering::SeqCst);
    Json(RootKey {
        root_key: state.root_key.clone(),
    })
}

async fn query(
    State(state): State<AppState>,
    Path(canister_id): Path<String>,
    Json(request): Json<CallRequest>,
) -> Result<Json<CallResponse>, StatusCode> {
    record(&state, "query", canister_id, request)
}

async fn update(
    State(state): State<AppState>,
    Path(canister_id): Path<String>,
    Json(request): Json<CallRequest>,
) -> Result<Json<CallResponse>, StatusCode> {
    record(&state, "call", canister_id, request)
}

fn record(
    state: &ReplicaState,
    endpoint: &'static str,
    canister_id: String,
    request: CallRequest,
) -> Result<Json<CallResponse>, StatusCode> {
    let known = canister_id == CANISTER;
    state.calls.lock().unwrap().push(RecordedCall {
        endpoint,
        canister_id,
        request,
    });
    if !known {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(state.reply.clone()))
}
