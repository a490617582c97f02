// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use kantingo::completion::{ChatMessage, CompletionService};
use kantingo::error::ServiceError;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Scripted completion backend. Replies are consumed in order; every request
/// is recorded. An exhausted script answers with a 503.
#[derive(Default)]
pub struct MockCompletion {
    replies: RefCell<VecDeque<Result<String, ServiceError>>>,
    pub requests: RefCell<Vec<(String, Vec<ChatMessage>)>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self, err: ServiceError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> (String, Vec<ChatMessage>) {
        self.requests.borrow().last().cloned().expect("no requests made")
    }
}

impl CompletionService for MockCompletion {
    fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ServiceError> {
        self.requests
            .borrow_mut()
            .push((model.to_string(), messages.to_vec()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ServiceError::Status {
                    status: 503,
                    body: "script exhausted".into(),
                })
            })
    }
}

pub fn rate_limited() -> ServiceError {
    ServiceError::Status {
        status: 429,
        body: r#"{"error":{"message":"Rate limit reached"}}"#.into(),
    }
}
