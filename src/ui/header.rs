use crate::config::Profile;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::time::Duration;

const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Hero section: greeting, name and the typed phrase.
pub struct Header<'a> {
    profile: &'a Profile,
    typed: &'a str,
    now: Duration,
}

impl<'a> Header<'a> {
    pub fn new(profile: &'a Profile, typed: &'a str, now: Duration) -> Self {
        Self {
            profile,
            typed,
            now,
        }
    }

    fn cursor_visible(&self) -> bool {
        (self.now.as_millis() / CURSOR_BLINK.as_millis()) % 2 == 0
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let cursor = if self.cursor_visible() { "▌" } else { " " };
        let lines = vec![
            Line::from(Span::styled(
                self.profile.greeting.as_str(),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(Span::styled(
                self.profile.name.as_str(),
                text_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(self.typed, Style::default().fg(ACCENT)),
                Span::styled(cursor, Style::default().fg(ACCENT)),
            ]),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
