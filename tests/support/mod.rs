#![allow(dead_code)]

pub mod stub_service;

pub use stub_service::StubService;

use serde_json::{json, Value};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// The single result the industrial components scenario expects
pub fn acme_json() -> Value {
    json!({
        "name": "Acme Co",
        "website": "https://acme.example",
        "relevance_score": 0.92,
        "notes": "ISO 9001"
    })
}
