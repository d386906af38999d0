mod common;

use common::{app, app_with, config, ms, project};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::config::ProjectKind;
use folio::platform::{FrameVideo, InputMode};
use folio::ui::app::App;
use folio::ui::card::CardView;
use folio::ui::gallery::{GalleryIntent, GalleryView};
use folio::ui::preview::PreviewVisual;

/// Screen cells inside the first and second card of the mobile gallery.
const FIRST_CARD: (u16, u16) = (5, 10);
const SECOND_CARD: (u16, u16) = (30, 10);

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn active_titles(app: &App) -> Vec<String> {
    app.cards()
        .iter()
        .filter(|card| card.preview().is_active())
        .map(|card| card.preview().project().title.clone())
        .collect()
}

#[test]
fn startup_mounts_mobile_gallery_and_types() {
    let mut app = app(InputMode::Pointer);
    assert_eq!(app.gallery_view(), GalleryView::Mobile);
    let titles: Vec<_> = app
        .cards()
        .iter()
        .map(|card| card.preview().project().title.as_str())
        .collect();
    assert_eq!(titles, vec!["FlyBy AI", "Dlicio", "Campus Navigator"]);

    app.advance_clock(ms(100));
    assert_eq!(app.display_text(), "S");
}

#[test]
fn videos_become_ready_after_buffering() {
    let mut app = app(InputMode::Pointer);
    assert!(app.cards().iter().all(|card| !card.preview().is_video_ready()));

    app.advance_clock(ms(400));
    let ready: Vec<bool> = app
        .cards()
        .iter()
        .map(|card| card.preview().is_video_ready())
        .collect();
    assert_eq!(ready, vec![true, true, false]);
}

#[test]
fn hover_moves_between_cards() {
    let mut app = app(InputMode::Pointer);
    app.advance_clock(ms(400));

    app.on_mouse(mouse(MouseEventKind::Moved, FIRST_CARD));
    assert_eq!(active_titles(&app), vec!["FlyBy AI"]);
    assert_eq!(app.cards()[0].preview().visual(), PreviewVisual::Video);

    app.on_mouse(mouse(MouseEventKind::Moved, SECOND_CARD));
    assert_eq!(active_titles(&app), vec!["Dlicio"]);

    // Into the hero: nothing hovered
    app.on_mouse(mouse(MouseEventKind::Moved, (5, 1)));
    assert!(active_titles(&app).is_empty());
    assert_eq!(app.hovered(), None);
}

#[test]
fn clicks_toggle_on_touch_devices() {
    let mut app = app(InputMode::Touch);
    assert!(app.is_touch_device());

    app.on_mouse(mouse(MouseEventKind::Moved, FIRST_CARD));
    assert!(active_titles(&app).is_empty());

    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), FIRST_CARD));
    assert_eq!(active_titles(&app), vec!["FlyBy AI"]);
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), SECOND_CARD));
    assert_eq!(active_titles(&app), vec!["FlyBy AI", "Dlicio"]);

    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), FIRST_CARD));
    assert_eq!(active_titles(&app), vec!["Dlicio"]);
}

#[test]
fn scrolling_a_card_out_of_view_stops_it() {
    let mut app = app(InputMode::Touch);
    app.tap_at(FIRST_CARD.0, FIRST_CARD.1);
    assert_eq!(active_titles(&app), vec!["FlyBy AI"]);

    app.scroll_to(u32::MAX);
    assert!(app.scroll() > 0);
    assert!(active_titles(&app).is_empty());

    // Back in view, still stopped
    app.scroll_to(0);
    assert!(active_titles(&app).is_empty());
}

#[test]
fn frames_advance_only_while_playing() {
    let mut app = app(InputMode::Pointer);
    app.advance_clock(ms(400));
    app.hover_at(FIRST_CARD.0, FIRST_CARD.1);

    app.advance_clock(ms(480));
    let position = |app: &App, index: usize| {
        app.cards()[index]
            .preview()
            .media()
            .map(FrameVideo::position)
    };
    assert_eq!(position(&app, 0), Some(1));
    assert_eq!(position(&app, 1), Some(0));

    let view = CardView::new(&app.cards()[0]);
    let frame = app.cards()[0].preview().media().and_then(FrameVideo::current_frame);
    assert_eq!(Some(view.media_text()), frame);
}

#[test]
fn toggling_view_unmounts_previous_cards() {
    let mut app = app(InputMode::Pointer);
    app.advance_clock(ms(200));
    let old_ids: Vec<_> = app.cards().iter().map(|card| card.id()).collect();

    app.dispatch_gallery(GalleryIntent::ToggleView);
    assert_eq!(app.gallery_view(), GalleryView::Desktop);
    let titles: Vec<_> = app
        .cards()
        .iter()
        .map(|card| card.preview().project().title.as_str())
        .collect();
    assert_eq!(titles, vec!["Web Project 1", "Web Project 2"]);
    assert!(old_ids.iter().all(|id| app.card(*id).is_none()));

    // The old cards' buffering timers were due at 400 and must not land on
    // the new cards, whose own timers are due at 600
    app.advance_clock(ms(400));
    assert!(!app.cards()[0].preview().is_video_ready());
    app.advance_clock(ms(600));
    assert!(app.cards()[0].preview().is_video_ready());
}

#[test]
fn showing_current_view_keeps_cards_mounted() {
    let mut app = app(InputMode::Pointer);
    let ids: Vec<_> = app.cards().iter().map(|card| card.id()).collect();
    app.dispatch_gallery(GalleryIntent::Show(GalleryView::Mobile));
    let after: Vec<_> = app.cards().iter().map(|card| card.id()).collect();
    assert_eq!(ids, after);
}

#[test]
fn touch_cards_show_play_hint() {
    let app = app(InputMode::Touch);
    let hints: Vec<_> = app
        .cards()
        .iter()
        .map(|card| CardView::new(card).status())
        .collect();
    assert_eq!(hints, vec![Some("▶ Click to play"), Some("▶ Click to play"), None]);
}

#[test]
fn dispose_cancels_every_timer() {
    let mut app = app(InputMode::Pointer);
    app.advance_clock(ms(100));
    assert!(app.time_until_next_timer().is_some());

    app.dispose();
    assert!(app.cards().is_empty());
    assert!(app.typewriter().is_disposed());
    assert_eq!(app.time_until_next_timer(), None);

    let typed = app.display_text().to_string();
    app.advance_clock(ms(60_000));
    assert_eq!(app.display_text(), typed);
}

#[test]
fn project_without_video_never_plays() {
    let mut config = config(InputMode::Pointer);
    config.projects = vec![project("Still", ProjectKind::Phone, false)];
    let mut app = app_with(config);

    app.advance_clock(ms(1000));
    app.hover_at(FIRST_CARD.0, FIRST_CARD.1);
    let card = &app.cards()[0];
    assert!(card.preview().is_active());
    assert_eq!(card.preview().visual(), PreviewVisual::Image);
    assert_eq!(CardView::new(card).media_text(), "[Still]");
}

#[test]
fn empty_phrases_leave_hero_blank() {
    let mut config = config(InputMode::Pointer);
    config.typewriter.phrases.clear();
    let mut app = app_with(config);
    app.advance_clock(ms(10_000));
    assert_eq!(app.display_text(), "");
}

#[test]
fn blank_phrase_with_zero_pause_does_not_stall_the_clock() {
    let mut config = config(InputMode::Pointer);
    config.typewriter.phrases = vec![String::new()];
    config.typewriter.pause_ms = 0;
    let mut app = app_with(config);
    app.advance_clock(ms(10));
    assert_eq!(app.now(), ms(10));
    assert_eq!(app.display_text(), "");
}

#[test]
fn resize_rechecks_card_under_stationary_pointer() {
    let mut app = app(InputMode::Pointer);
    app.advance_clock(ms(400));
    app.on_mouse(mouse(MouseEventKind::Moved, FIRST_CARD));
    assert_eq!(active_titles(&app), vec!["FlyBy AI"]);

    // Row 10 now lands in the footer
    app.on_resize(80, 12);
    assert_eq!(app.hovered(), None);
    assert!(active_titles(&app).is_empty());

    app.on_resize(80, 24);
    assert_eq!(active_titles(&app), vec!["FlyBy AI"]);
}
