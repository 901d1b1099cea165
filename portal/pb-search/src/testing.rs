//! Test transport that records requests and replays canned responses

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::backends::SearchTransport;
use crate::error::{SearchError, SearchResult};
use crate::types::SearchResponse;

/// A request as seen by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub servlet: String,
    pub params: Vec<(String, String)>,
}

/// Records every request; answers with queued responses, then the fallback
pub struct RecordingTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    queued: Mutex<VecDeque<SearchResponse>>,
    fallback: SearchResponse,
    fail: bool,
}

impl RecordingTransport {
    pub fn new(fallback: SearchResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            queued: Mutex::new(VecDeque::new()),
            fallback,
            fail: false,
        }
    }

    /// A transport that answers every request with a 503
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(SearchResponse::default())
        }
    }

    pub fn queue(&self, response: SearchResponse) {
        self.queued.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn execute(
        &self,
        servlet: &str,
        params: &[(String, String)],
    ) -> SearchResult<SearchResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            servlet: servlet.to_string(),
            params: params.to_vec(),
        });

        if self.fail {
            return Err(SearchError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }

        let queued = self.queued.lock().unwrap().pop_front();
        Ok(queued.unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Build a response of `total` affiliates with documents for one page
///
/// Like Solr, nothing is echoed for parameters the request did not send.
pub fn affiliates(rows: u64, start: u64, total: u64) -> SearchResponse {
    let end = total.min(start + rows);
    let docs: Vec<Value> = (start..end)
        .map(|i| {
            json!({
                "identifier": format!("person-{}", i + 1),
                "person_sort_name": format!("Affiliate {:02}", i + 1),
                "person_email": format!("affiliate{}@example.org", i + 1),
                "data_class": "PDS_Affiliate"
            })
        })
        .collect();

    serde_json::from_value(json!({
        "responseHeader": {
            "status": 0,
            "QTime": 1,
            "params": {}
        },
        "response": { "numFound": total, "start": start, "docs": docs }
    }))
    .unwrap()
}
