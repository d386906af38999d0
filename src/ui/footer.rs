use crate::ui::gallery::GalleryView;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    view: GalleryView,
    is_touch_device: bool,
}

impl Footer {
    pub fn new(view: GalleryView, is_touch_device: bool) -> Self {
        Self {
            view,
            is_touch_device,
        }
    }

    pub fn hints(&self) -> String {
        let preview = if self.is_touch_device {
            "Click: Play/Stop"
        } else {
            "Hover: Preview"
        };
        format!(
            " ↑↓/Wheel: Scroll │ v: {} │ {} │ q: Quit",
            self.view.toggle_label(),
            preview
        )
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing characters
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_view_and_input_mode() {
        let pointer = Footer::new(GalleryView::Mobile, false).hints();
        assert!(pointer.contains("Switch to Desktop"));
        assert!(pointer.contains("Hover"));

        let touch = Footer::new(GalleryView::Desktop, true).hints();
        assert!(touch.contains("Switch to Mobile"));
        assert!(touch.contains("Click"));
    }
}
