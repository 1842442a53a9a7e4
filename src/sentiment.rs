use crate::models::ChatReply;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The one-slot mood display under the message list. Last write wins; a
/// reply without both sentiment fields leaves the slot untouched.
#[derive(Debug, Default)]
pub struct SentimentIndicator {
    emoji: String,
    label: String,
    sending: bool,
    spinner_idx: usize,
}

impl SentimentIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_sending(&mut self, sending: bool) {
        self.sending = sending;
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    /// Overwrites the slot only when the reply carries both halves.
    pub fn update(&mut self, reply: &ChatReply) {
        if let Some((emoji, label)) = reply.sentiment_pair() {
            self.emoji = emoji.to_string();
            self.label = label.to_string();
        }
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let busy = if self.sending {
            spinner_frames[self.spinner_idx % spinner_frames.len()]
        } else {
            " "
        };

        let mood = if self.label.is_empty() {
            Span::styled("No mood detected yet", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                format!("{} Current mood: {}", self.emoji, self.label),
                Style::default().fg(Color::Yellow),
            )
        };

        let status = Line::from(vec![
            Span::styled(busy, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            mood,
        ]);

        frame.render_widget(
            Paragraph::new(status),
            Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: 1,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(emoji: Option<&str>, label: Option<&str>) -> ChatReply {
        ChatReply {
            sentiment_emoji: emoji.map(str::to_string),
            sentiment_label: label.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn update_overwrites_when_both_fields_present() {
        let mut indicator = SentimentIndicator::new();
        indicator.update(&reply(Some("😊"), Some("happy")));
        assert_eq!(indicator.emoji(), "😊");
        assert_eq!(indicator.label(), "happy");
    }

    #[test]
    fn update_keeps_previous_value_when_a_field_is_missing() {
        let mut indicator = SentimentIndicator::new();
        indicator.update(&reply(Some("😊"), Some("happy")));

        indicator.update(&reply(Some("😢"), None));
        assert_eq!(indicator.emoji(), "😊");
        assert_eq!(indicator.label(), "happy");

        indicator.update(&reply(None, Some("sad")));
        assert_eq!(indicator.label(), "happy");
    }

    #[test]
    fn update_is_last_write_wins() {
        let mut indicator = SentimentIndicator::new();
        indicator.update(&reply(Some("😊"), Some("happy")));
        indicator.update(&reply(Some("😡"), Some("angry")));
        assert_eq!(indicator.emoji(), "😡");
        assert_eq!(indicator.label(), "angry");
    }
}
