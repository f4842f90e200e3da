use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ArcStr;

/// Mock implementation of the Net actor for testing purposes.
///
/// Holds canned response bodies keyed by URL and records every request made.
#[derive(Debug, Clone)]
pub struct Mock {
    responses: Arc<HashMap<ArcStr, ArcStr>>,
    requests: Arc<Mutex<Vec<ArcStr>>>,
}

impl Mock {
    pub fn new(responses: HashMap<ArcStr, ArcStr>) -> Self {
        Self {
            responses: Arc::new(responses),
            requests: Arc::default(),
        }
    }

    pub async fn get(&self, url: ArcStr) -> anyhow::Result<ArcStr> {
        self.requests.lock().await.push(url.clone());
        self.responses
            .get(&url)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("GET request not found in mock responses: {}", url))
    }

    pub async fn requests(&self) -> Vec<ArcStr> {
        self.requests.lock().await.clone()
    }
}
