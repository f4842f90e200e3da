use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::data::{ItemDetail, ListRequest, Outcome, ResultPage};
use crate::ArcStr;

type Answer<T> = Result<Outcome<T>, ArcStr>;

#[derive(Debug, Default)]
struct MockData {
    lists: HashMap<ListRequest, Answer<ResultPage>>,
    details: HashMap<ArcStr, Answer<ItemDetail>>,
    requests: Vec<ArcStr>,
}

/// Mock implementation of the OMDb actor for testing purposes.
///
/// Answers are registered per request; anything unregistered fails like an
/// unreachable server.
#[derive(Debug, Clone, Default)]
pub struct Mock {
    data: Arc<Mutex<MockData>>,
}

impl Mock {
    pub fn new() -> Self {
        Default::default()
    }

    pub async fn set_list(&self, request: ListRequest, answer: Answer<ResultPage>) {
        self.data.lock().await.lists.insert(request, answer);
    }

    pub async fn set_detail(&self, id: ArcStr, answer: Answer<ItemDetail>) {
        self.data.lock().await.details.insert(id, answer);
    }

    pub async fn requests(&self) -> Vec<ArcStr> {
        self.data.lock().await.requests.clone()
    }

    pub async fn list(&self, request: ListRequest) -> anyhow::Result<Outcome<ResultPage>> {
        let mut data = self.data.lock().await;
        data.requests
            .push(ArcStr::from(format!("list:{}:{}", request.term, request.page)));
        match data.lists.get(&request) {
            Some(Ok(outcome)) => Ok(outcome.clone()),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Err(anyhow::anyhow!("List request not found in mock: {:?}", request)),
        }
    }

    pub async fn detail(&self, id: ArcStr) -> anyhow::Result<Outcome<ItemDetail>> {
        let mut data = self.data.lock().await;
        data.requests.push(ArcStr::from(format!("detail:{}", id)));
        match data.details.get(&id) {
            Some(Ok(outcome)) => Ok(outcome.clone()),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            None => Err(anyhow::anyhow!("Detail request not found in mock: {}", id)),
        }
    }
}
