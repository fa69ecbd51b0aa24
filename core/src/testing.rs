//! Scripted transport for driving views without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Replays queued outcomes in order and records every request it saw.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(ok(status, body)));
        self
    }

    pub fn refuse(self) -> Self {
        self.outcomes
            .borrow_mut()
            .push_back(Err(ApiError::Network("Connection refused".to_string())));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted outcome left"))
    }
}

pub fn ok(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}
