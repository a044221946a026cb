use async_trait::async_trait;
use bytes::Bytes;
use form3::{Error, HttpSend, Result};
use http::StatusCode;
use std::collections::VecDeque;
use std::mem;
use std::sync::{Arc, Mutex};

/// Records every request and replies with queued responses.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

impl MockHttpSend {
    pub fn respond(self, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .expect("lock poisoned")
            .push_back((status, body.into()));
        self
    }

    pub fn take_requests(&self) -> Vec<http::Request<Bytes>> {
        mem::take(&mut *self.requests.lock().expect("lock poisoned"))
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().expect("lock poisoned").push(req);

        let Some((status, body)) = self.responses.lock().expect("lock poisoned").pop_front() else {
            return Err(Error::unexpected("connection refused"));
        };
        Ok(http::Response::builder()
            .status(status)
            .body(Bytes::from(body))?)
    }
}
