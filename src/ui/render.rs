use crate::platform::Area;
use crate::ui::app::App;
use crate::ui::card::CardView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{hidden_rows, layout_regions, page_to_screen, SECTION_TITLE_HEIGHT};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (hero, body, footer) = layout_regions(area);

    let header = Header::new(app.profile(), app.display_text(), app.now());
    frame.render_widget(header.widget(), hero);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);

    let footer_widget = Footer::new(app.gallery_view(), app.is_touch_device());
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn draw_body(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let scroll = app.scroll();
    let layout = app.layout();

    let projects_title = Area::new(0, 0, u32::from(body.width), SECTION_TITLE_HEIGHT);
    if let Some(rect) = page_to_screen(body, scroll, projects_title) {
        frame.render_widget(section_title("Projects", app.gallery_view().toggle_label()), rect);
    }

    for (card, area) in app.cards().iter().zip(&layout.cards) {
        if let Some(rect) = page_to_screen(body, scroll, *area) {
            let (top, bottom) = hidden_rows(body, scroll, *area);
            frame.render_widget(CardView::new(card).widget(top, bottom), rect);
        }
    }

    let experience_title = Area::new(
        0,
        layout.experience_title,
        u32::from(body.width),
        SECTION_TITLE_HEIGHT,
    );
    if let Some(rect) = page_to_screen(body, scroll, experience_title) {
        frame.render_widget(section_title("Experience", ""), rect);
    }

    for (experience, area) in app.experiences().iter().zip(&layout.experiences) {
        let Some(rect) = page_to_screen(body, scroll, *area) else {
            continue;
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    experience.role.as_str(),
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" @ ", Style::default().fg(MUTED_TEXT)),
                Span::styled(experience.company.as_str(), Style::default().fg(ACCENT)),
            ]),
            Line::from(Span::styled(
                experience.period.as_str(),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(Span::styled(
                experience.description.as_str(),
                Style::default().fg(HEADER_TEXT),
            )),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(widget, rect);
    }
}

fn section_title<'a>(title: &'a str, hint: &'a str) -> Paragraph<'a> {
    let mut spans = vec![Span::styled(
        title,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if !hint.is_empty() {
        spans.push(Span::styled(
            format!("  (v: {hint})"),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
