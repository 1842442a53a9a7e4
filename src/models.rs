// src/models.rs

use serde::{Deserialize, Serialize};

/// Request body for the chat endpoint. The persona key is opaque here;
/// the server decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub persona: String,
}

/// Success body from the chat endpoint. Every field is optional from the
/// client's point of view; the controller picks the fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    pub reply: Option<String>,
    pub sentiment: Option<String>,
    pub sentiment_label: Option<String>,
    pub sentiment_emoji: Option<String>,
    pub persona: Option<String>,
}

impl ChatReply {
    /// Both halves of the sentiment indicator, but only when the server
    /// sent both and neither is empty.
    pub fn sentiment_pair(&self) -> Option<(&str, &str)> {
        match (
            self.sentiment_emoji.as_deref(),
            self.sentiment_label.as_deref(),
        ) {
            (Some(emoji), Some(label)) if !emoji.is_empty() && !label.is_empty() => {
                Some((emoji, label))
            }
            _ => None,
        }
    }
}
