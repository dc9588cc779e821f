#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use club_site::clients::lichess::LichessClient;
use club_site::config::Config;
use reqwest::Client;
use serde_json::{json, Value};

pub const TOURNAMENT_ID: &str = "GGjvzgTh";

/// What the stub broadcast API currently serves.
#[derive(Default)]
pub struct StubState {
    /// Round id -> `games` array for that round.
    pub games: HashMap<String, Value>,
    pub rounds_status: Option<StatusCode>,
    pub requests: Vec<String>,
}

pub type SharedStub = Arc<Mutex<StubState>>;

pub struct StubApi {
    pub base_url: String,
    pub state: SharedStub,
}

impl StubApi {
    pub fn set_games(&self, round_id: &str, games: Value) {
        self.state.lock().unwrap().games.insert(round_id.to_string(), games);
    }

    pub fn fail_rounds(&self, status: StatusCode) {
        self.state.lock().unwrap().rounds_status = Some(status);
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn client(&self) -> LichessClient {
        LichessClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }
}

pub fn round_json(n: u32) -> Value {
    json!({
        "id": format!("r{n}"),
        "slug": format!("round-{n}"),
        "url": format!("https://lichess.org/broadcast/open/round-{n}/r{n}"),
        "createdAt": 1700000000000u64,
    })
}

async fn stub_rounds(
    State(state): State<SharedStub>,
    Path(tournament): Path<String>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.requests.push(format!("/broadcast/{tournament}"));
    if let Some(status) = state.rounds_status {
        return status.into_response();
    }
    if tournament != TOURNAMENT_ID {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "tour": { "id": TOURNAMENT_ID, "name": "Open Xadrez Pontevedra" },
        "rounds": [round_json(1), round_json(2)],
    }))
    .into_response()
}

async fn stub_round(
    State(state): State<SharedStub>,
    Path((tournament, slug, round)): Path<(String, String, String)>,
) -> Response {
    let mut state = state.lock().unwrap();
    state.requests.push(format!("/broadcast/{tournament}/{slug}/{round}"));
    if round == "broken" {
        return (StatusCode::OK, "{not json").into_response();
    }
    match state.games.get(&round) {
        Some(games) => {
            let n: u32 = round.trim_start_matches('r').parse().unwrap_or(0);
            Json(json!({ "round": round_json(n), "games": games })).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Starts a stand-in for the Lichess broadcast API on an ephemeral port.
pub async fn spawn_stub_api() -> StubApi {
    let state = SharedStub::default();
    let app = Router::new()
        .route("/api/broadcast/{tournament}", get(stub_rounds))
        .route("/api/broadcast/{tournament}/{slug}/{round}", get(stub_round))
        .with_state(state.clone());
    let base = serve(app).await;
    StubApi {
        base_url: format!("{base}/api"),
        state,
    }
}

pub fn config(stub: &StubApi) -> Config {
    Config {
        lichess_api_url: stub.base_url.clone(),
        tournament_id: TOURNAMENT_ID.to_string(),
        poll_interval: Duration::from_millis(25),
        ..Config::default()
    }
}

/// Starts the site against `stub`; returns its base URL.
pub async fn spawn_site(stub: &StubApi) -> String {
    let app = club_site::app(config(stub), Arc::new(stub.client()));
    serve(app).await
}

/// Build a reqwest client for tests. Redirects are not followed so
/// `mailto:` locations can be inspected.
pub fn client() -> Client {
    Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Build a URL for a site path.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
