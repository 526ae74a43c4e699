//! In-process stand-in for the PageSpeed Insights endpoint.
//!
//! The last path segment of the `url` query parameter picks the behaviour:
//! `broken` answers 500 with a PSI error body, `garbage` answers non-JSON,
//! `partial` omits the performance score, `slow` stalls for five seconds and
//! `slower` scores worse on the new host. Everything else scores 60 on the
//! old host and 90 on the new one.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const OLD_BASE: &str = "https://old.example.com";
pub const NEW_BASE: &str = "https://new.example.com";

#[derive(Clone, Default)]
pub struct FakePsi {
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakePsi {
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub async fn spawn_fake_psi() -> (String, FakePsi) {
    let state = FakePsi::default();
    let app = Router::new()
        .route("/runPagespeed", get(run_pagespeed))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/runPagespeed", addr), state)
}

pub fn psi_body(score: f64) -> Value {
    json!({
        "kind": "pagespeedonline#result",
        "lighthouseResult": {
            "categories": { "performance": { "id": "performance", "score": score } },
            "audits": {
                "first-contentful-paint": { "score": 0.9, "displayValue": "1.2 s" },
                "largest-contentful-paint": { "score": 0.7, "displayValue": "2.8 s" },
                "cumulative-layout-shift": { "score": 1.0, "displayValue": "0.002" },
                "total-blocking-time": { "score": 0.8, "displayValue": "150 ms" }
            }
        }
    })
}

async fn run_pagespeed(
    State(state): State<FakePsi>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(query.clone());

    let url = query.get("url").cloned().unwrap_or_default();
    let is_new = url.starts_with(NEW_BASE);
    let page = url.rsplit('/').next().unwrap_or_default().to_string();

    match page.as_str() {
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "code": 500, "message": "Lighthouse returned error: NO_FCP" } })),
        )
            .into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "partial" => Json(json!({ "lighthouseResult": { "categories": {}, "audits": {} } }))
            .into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(psi_body(0.5)).into_response()
        }
        "slower" if is_new => Json(psi_body(0.3)).into_response(),
        _ if is_new => Json(psi_body(0.9)).into_response(),
        _ => Json(psi_body(0.6)).into_response(),
    }
}
