use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One bubble in the message list. Messages are append-only and never
/// mutated after creation.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    text: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let style = self.base_style();
        let indent = self.indent();
        let mut lines = Vec::new();

        let timestamp = self.timestamp.format("%H:%M").to_string();
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]));

        let wrap_width = (area.width as usize).saturating_sub(4).max(1);
        for wrapped_line in wrap(&self.text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));

        lines
    }

    fn base_style(&self) -> Style {
        Style::default().fg(match self.sender {
            Sender::User => Color::Rgb(255, 223, 128),
            Sender::Bot => Color::Rgb(144, 238, 144),
        })
    }

    fn indent(&self) -> &'static str {
        match self.sender {
            Sender::User => "  ",
            Sender::Bot => "",
        }
    }
}
