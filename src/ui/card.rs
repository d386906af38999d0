use crate::platform::FrameVideo;
use crate::ui::app::MountedCard;
use crate::ui::preview::{PreviewPhase, PreviewVisual};
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_BORDER_ACTIVE, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const IMAGE_PLACEHOLDER: &str = "[ image unavailable ]";

/// One project card: media area, status hint, description and link button.
pub struct CardView<'a> {
    card: &'a MountedCard,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a MountedCard) -> Self {
        Self { card }
    }

    /// Art currently on screen: the video frame while playing, the image
    /// otherwise.
    pub fn media_text(&self) -> &'a str {
        let preview = self.card.preview();
        let frame = match preview.visual() {
            PreviewVisual::Video => preview.media().and_then(FrameVideo::current_frame),
            PreviewVisual::Image => None,
        };
        frame
            .or_else(|| self.card.image())
            .unwrap_or(IMAGE_PLACEHOLDER)
    }

    /// Short status under the media, if any.
    pub fn status(&self) -> Option<&'static str> {
        let preview = self.card.preview();
        if preview.shows_play_affordance() {
            return Some("▶ Click to play");
        }
        match preview.state().phase {
            PreviewPhase::Buffering => Some("Loading preview…"),
            PreviewPhase::Blocked { .. } => Some("Preview blocked"),
            _ => None,
        }
    }

    /// Widget for a card with `top` rows scrolled off above and `bottom`
    /// rows below. The content is scrolled so the rows left on screen are
    /// the card's own rows, and a clipped edge loses its border.
    pub fn widget(&self, top: u16, bottom: u16) -> Paragraph<'a> {
        let project = self.card.preview().project();
        let active = self.card.preview().is_active();

        let mut lines: Vec<Line<'a>> = self
            .media_text()
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(HEADER_TEXT))))
            .collect();

        if let Some(status) = self.status() {
            let color = if matches!(
                self.card.preview().state().phase,
                PreviewPhase::Blocked { .. }
            ) {
                STATUS_ERROR
            } else {
                ACCENT
            };
            lines.push(Line::from(Span::styled(status, Style::default().fg(color))));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            project.description.as_str(),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", project.button_label()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));

        let border = if active { CARD_BORDER_ACTIVE } else { CARD_BORDER };
        let mut block = Block::default()
            .borders(card_borders(top, bottom))
            .border_style(Style::default().fg(border));
        // The title lives on the top border
        if top == 0 {
            block = block.title(Span::styled(
                format!(" {} ", project.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .scroll((content_scroll(top), 0))
            .block(block)
    }
}

/// Borders left on a card clipped by `top` / `bottom` rows.
pub fn card_borders(top: u16, bottom: u16) -> Borders {
    let mut borders = Borders::ALL;
    if top > 0 {
        borders.remove(Borders::TOP);
    }
    if bottom > 0 {
        borders.remove(Borders::BOTTOM);
    }
    borders
}

/// Content lines to skip when `top` card rows are off screen. The first
/// hidden row is the top border.
pub fn content_scroll(top: u16) -> u16 {
    top.saturating_sub(1)
}
