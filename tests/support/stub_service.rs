use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the search and persistence service
pub struct StubService {
    pub base_url: String,
    state: Arc<StubState>,
}

struct StubState {
    search_status: Mutex<StatusCode>,
    search_body: Mutex<Value>,
    save_status: Mutex<StatusCode>,
    search_requests: Mutex<Vec<Value>>,
    save_requests: Mutex<Vec<Value>>,
    saved: Mutex<Vec<Value>>,
}

impl StubService {
    pub async fn start() -> Self {
        let state = Arc::new(StubState {
            search_status: Mutex::new(StatusCode::OK),
            search_body: Mutex::new(json!([])),
            save_status: Mutex::new(StatusCode::OK),
            search_requests: Mutex::new(Vec::new()),
            save_requests: Mutex::new(Vec::new()),
            saved: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/search", post(search))
            .route("/suppliers", post(save).get(list_saved))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubService {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn respond_to_search(&self, status: StatusCode, body: Value) {
        *self.state.search_status.lock().unwrap() = status;
        *self.state.search_body.lock().unwrap() = body;
    }

    pub fn respond_to_save(&self, status: StatusCode) {
        *self.state.save_status.lock().unwrap() = status;
    }

    pub fn search_requests(&self) -> Vec<Value> {
        self.state.search_requests.lock().unwrap().clone()
    }

    pub fn save_requests(&self) -> Vec<Value> {
        self.state.save_requests.lock().unwrap().clone()
    }
}

async fn search(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.search_requests.lock().unwrap().push(body);
    let status = *state.search_status.lock().unwrap();
    let response = state.search_body.lock().unwrap().clone();
    (status, Json(response))
}

async fn save(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.save_requests.lock().unwrap().push(body.clone());
    let status = *state.save_status.lock().unwrap();

    if !status.is_success() {
        return (status, Json(json!({ "detail": "rejected" })));
    }

    let mut saved = state.saved.lock().unwrap();
    let mut stored = body;
    stored["id"] = json!(saved.len() + 1);
    saved.push(stored.clone());
    (status, Json(stored))
}

async fn list_saved(State(state): State<Arc<StubState>>) -> Json<Value> {
    Json(Value::Array(state.saved.lock().unwrap().clone()))
}
