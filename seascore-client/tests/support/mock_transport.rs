use async_trait::async_trait;
use seascore_client::{ProofTransport, TransportError};
use seascore_core::{Detection, DetectionResponse, ValidationRequest};
use std::collections::VecDeque;
use std::sync::Mutex;

/// What one submission looked like when it reached the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub challenge_id: String,
    pub queries: Vec<String>,
    pub image_len: usize,
}

/// Transport double that replays scripted outcomes in order and records
/// every request it sees
pub struct MockTransport {
    script: Mutex<VecDeque<Result<DetectionResponse, TransportError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response carrying these detections
    pub fn with_response(self, detections: Vec<Detection>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(DetectionResponse { detections }));
        self
    }

    /// Queue a transport failure
    pub fn with_failure(self, error: TransportError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Requests submitted so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProofTransport for MockTransport {
    async fn submit(
        &self,
        request: &ValidationRequest,
    ) -> Result<DetectionResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            challenge_id: request.challenge_id.clone(),
            queries: request.queries.clone(),
            image_len: request.image.len(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockTransport script exhausted")
    }
}
