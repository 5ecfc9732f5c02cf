//! Scripted photo transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use pixgrid::api::{Endpoint, PhotoTransport};
use pixgrid::FetchError;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
struct Scripted {
    delay: Duration,
    result: Result<String, FetchError>,
}

/// Answers requests from a table keyed by `(term, page)`; `""` is the feed.
#[derive(Clone, Default)]
pub struct MockPhotoClient {
    responses: Arc<Mutex<HashMap<(String, u32), Scripted>>>,
    calls: Arc<Mutex<Vec<Endpoint>>>,
}

impl MockPhotoClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_response(&self, term: &str, page: u32, body: String) {
        self.mock_delayed(term, page, Duration::ZERO, body);
    }

    pub fn mock_delayed(&self, term: &str, page: u32, delay: Duration, body: String) {
        self.responses.lock().unwrap().insert(
            (term.to_string(), page),
            Scripted {
                delay,
                result: Ok(body),
            },
        );
    }

    pub fn mock_error(&self, term: &str, page: u32, error: FetchError) {
        self.responses.lock().unwrap().insert(
            (term.to_string(), page),
            Scripted {
                delay: Duration::ZERO,
                result: Err(error),
            },
        );
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoTransport for MockPhotoClient {
    async fn get(&self, endpoint: &Endpoint) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(endpoint.clone());

        let term = match endpoint {
            Endpoint::Search { query, .. } => query.clone(),
            Endpoint::Feed { .. } => String::new(),
        };
        let scripted = self
            .responses
            .lock()
            .unwrap()
            .get(&(term.clone(), endpoint.page()))
            .cloned();

        match scripted {
            Some(scripted) => {
                tokio::time::sleep(scripted.delay).await;
                scripted.result
            }
            None => Err(FetchError::Upstream {
                status: 404,
                message: format!("Mock 404: {term} page {}", endpoint.page()),
            }),
        }
    }
}

/// Search envelope with `count` images named `{prefix}-{page}-{i}`.
pub fn search_body(prefix: &str, page: u32, count: usize, total_pages: u32) -> String {
    let results: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "id": format!("{prefix}-{page}-{i}"),
                "alt_description": format!("{prefix} photo {i}"),
                "urls": { "small": format!("https://images.example/{prefix}/{page}/{i}.jpg") }
            })
        })
        .collect();
    json!({
        "total": u64::from(total_pages) * count as u64,
        "total_pages": total_pages,
        "results": results
    })
    .to_string()
}

/// Feed array with `count` images, the odd ones without a thumbnail.
pub fn feed_body(page: u32, count: usize) -> String {
    let photos: Vec<_> = (0..count)
        .map(|i| {
            if i % 2 == 0 {
                json!({ "id": format!("feed-{page}-{i}"), "urls": { "small": "https://images.example/f.jpg" } })
            } else {
                json!({ "id": format!("feed-{page}-{i}"), "alt_description": null })
            }
        })
        .collect();
    serde_json::Value::Array(photos).to_string()
}
