use crate::chat_message::{ChatMessage, Sender};
use crate::errors::{ChatError, ChatResult};
use crate::models::{ChatReply, ChatRequest};
use crate::persona::PersonaSelector;
use crate::sentiment::SentimentIndicator;

pub const NETWORK_ERROR_TEXT: &str = "A network error occurred. 😢";
pub const EMPTY_REPLY_TEXT: &str = "The reply was empty.";
pub const MALFORMED_REPLY_TEXT: &str = "The reply could not be read. 😢";

pub fn server_error_text(status: u16) -> String {
    format!(
        "A server error occurred. ({}) Please try again later. 😢",
        status
    )
}

/// The chat screen state: input buffer, persona selection, the message
/// list (the `Vec` is the store, nothing is persisted), the sentiment
/// slot and the in-flight flag.
///
/// Sends are serialized: while a request is pending, `submit` refuses to
/// start another one, so at most one reply is ever outstanding.
pub struct App {
    pub input: String,
    pub messages: Vec<ChatMessage>,
    pub persona: PersonaSelector,
    pub sentiment: SentimentIndicator,
    pub chat_scroll: u16,
    pub should_quit: bool,
    sending: bool,
}

impl App {
    pub fn new(default_persona: &str) -> Self {
        Self {
            input: String::new(),
            messages: Vec::new(),
            persona: PersonaSelector::new(default_persona),
            sentiment: SentimentIndicator::new(),
            chat_scroll: 0,
            should_quit: false,
            sending: false,
        }
    }

    pub fn sending(&self) -> bool {
        self.sending
    }

    /// Appends a bubble and pins the view to the newest entry. No
    /// validation happens here; the empty-input guard lives in `submit`.
    pub fn push_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.messages.push(ChatMessage::new(text, sender));
        // Clamped down to the real bottom at draw time.
        self.chat_scroll = u16::MAX;
    }

    /// The send half of the cycle. Whitespace-only input aborts with no
    /// side effects at all. Otherwise the trimmed text goes up as an
    /// optimistic user bubble (never rolled back), the input is cleared,
    /// and the request is handed back for the event loop to dispatch.
    pub fn submit(&mut self) -> Option<ChatRequest> {
        if self.sending {
            return None;
        }

        let message = self.input.trim().to_string();
        if message.is_empty() {
            return None;
        }

        let persona = self.persona.current().key.to_string();
        self.push_message(message.clone(), Sender::User);
        self.input.clear();
        self.sending = true;
        self.sentiment.set_sending(true);

        Some(ChatRequest { message, persona })
    }

    /// The receive half: exactly one bot bubble per outcome, and the send
    /// control is re-enabled no matter which branch ran.
    pub fn apply_outcome(&mut self, outcome: ChatResult<ChatReply>) {
        self.sending = false;
        self.sentiment.set_sending(false);

        match outcome {
            Ok(reply) => {
                self.sentiment.update(&reply);
                let text = reply
                    .reply
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| EMPTY_REPLY_TEXT.to_string());
                self.push_message(text, Sender::Bot);
            }
            Err(ChatError::Server { status }) => {
                self.push_message(server_error_text(status), Sender::Bot);
            }
            Err(ChatError::MalformedReply(detail)) => {
                log::warn!("malformed reply body: {}", detail);
                self.push_message(MALFORMED_REPLY_TEXT, Sender::Bot);
            }
            Err(err) => {
                log::warn!("chat request failed: {}", err);
                self.push_message(NETWORK_ERROR_TEXT, Sender::Bot);
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }
}
