// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::completion::{ChatMessage, CompletionService};
use crate::error::ChatError;
use tracing::{debug, warn};

pub const CHAT_PERSONA: &str = "You are Kantingo AI. Answer questions about budgeting, \
cashflow, spending, and saving strategies.";

/// One user's chat conversation. History only grows through successful turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationSession {
    history: Vec<ChatMessage>,
}

impl ConversationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Sends `user_message` along with the whole history and records the
    /// exchange. On error the history is left exactly as it was.
    pub fn send<S: CompletionService + ?Sized>(
        &mut self,
        service: &S,
        model: &str,
        user_message: &str,
    ) -> Result<&str, ChatError> {
        if user_message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        let messages = self.request_messages(user_message);
        debug!(turns = self.history.len(), "sending chat turn");
        let answer = service
            .complete(model, &messages)
            .inspect_err(|e| warn!(error = %e, "chat turn failed"))?;

        self.history.push(ChatMessage::user(user_message));
        self.history.push(ChatMessage::assistant(answer));
        Ok(self
            .history
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default())
    }

    fn request_messages(&self, user_message: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.history.len() + 2);
        messages.push(ChatMessage::system(CHAT_PERSONA));
        messages.extend(self.history.iter().cloned());
        messages.push(ChatMessage::user(user_message));
        messages
    }
}
