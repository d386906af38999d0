use crate::config::{Config, Experience, PreviewConfig, Profile, Project};
use crate::platform::media::{load_frames, load_image};
use crate::platform::{Fired, FrameVideo, TimerGuard, TimerQueue, VisibilityObserver};
use crate::ui::gallery::{GalleryIntent, GalleryReducer, GalleryState, GalleryView};
use crate::ui::layout::{body_rect, page_layout, screen_to_page, viewport, PageLayout};
use crate::ui::mvi::Reducer;
use crate::ui::preview::PreviewCard;
use crate::ui::typewriter::{TypewriterEngine, TypewriterTiming};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Duration;

/// Terminal size assumed until the first resize event.
const DEFAULT_SIZE: (u16, u16) = (80, 24);
const SCROLL_STEP: i64 = 3;

/// Identifies one mounted card. Never reused, so timers scheduled for a card
/// that has since been unmounted cannot reach its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(u64);

/// Payload of every timer the app schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Typewriter,
    /// The card's video has buffered enough to play through.
    CanPlayThrough { card: CardId },
    /// Advance playing frame videos.
    Frame,
}

pub struct MountedCard {
    id: CardId,
    preview: PreviewCard<FrameVideo>,
    /// Loaded image art; `None` renders a placeholder.
    image: Option<String>,
}

impl MountedCard {
    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn preview(&self) -> &PreviewCard<FrameVideo> {
        &self.preview
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

pub struct App {
    should_quit: bool,
    profile: Profile,
    projects: Vec<Project>,
    experiences: Vec<Experience>,
    preview_config: PreviewConfig,
    media_base: PathBuf,
    is_touch_device: bool,
    timers: TimerQueue<TimerEvent>,
    visibility: VisibilityObserver<CardId>,
    typewriter: TypewriterEngine<TimerEvent>,
    frame_timer: Option<TimerGuard>,
    /// Gallery filter (MVI pattern).
    gallery: GalleryState,
    cards: Vec<MountedCard>,
    next_card_id: u64,
    hovered: Option<CardId>,
    /// Last pointer position, replayed after scrolling, view switches and resizes.
    pointer: Option<(u16, u16)>,
    body: Rect,
    layout: PageLayout,
    scroll: u32,
}

impl App {
    /// Build the page and mount the typewriter and the initial gallery.
    ///
    /// The input mode is resolved here, once, for the whole session.
    pub fn new(config: Config, media_base: PathBuf) -> Self {
        let Config {
            profile,
            typewriter,
            preview,
            projects,
            experiences,
        } = config;

        let is_touch_device = preview.input.is_touch();
        tracing::info!(is_touch_device, projects = projects.len(), "Starting portfolio");

        let (cols, rows) = DEFAULT_SIZE;
        let timing = TypewriterTiming::from(&typewriter);
        let mut app = Self {
            should_quit: false,
            profile,
            projects,
            experiences,
            preview_config: preview,
            media_base,
            is_touch_device,
            timers: TimerQueue::new(),
            visibility: VisibilityObserver::new(),
            typewriter: TypewriterEngine::new(typewriter.phrases, timing, TimerEvent::Typewriter),
            frame_timer: None,
            gallery: GalleryState::default(),
            cards: Vec::new(),
            next_card_id: 0,
            hovered: None,
            pointer: None,
            body: body_rect(Rect::new(0, 0, cols, rows)),
            layout: PageLayout::default(),
            scroll: 0,
        };

        app.typewriter.mount(&mut app.timers);
        app.frame_timer = Some(
            app.timers
                .schedule_once(app.preview_config.frame_interval(), TimerEvent::Frame),
        );
        app.mount_cards();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn display_text(&self) -> &str {
        self.typewriter.display_text()
    }

    pub fn typewriter(&self) -> &TypewriterEngine<TimerEvent> {
        &self.typewriter
    }

    pub fn gallery_view(&self) -> GalleryView {
        self.gallery.view
    }

    pub fn cards(&self) -> &[MountedCard] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&MountedCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn is_touch_device(&self) -> bool {
        self.is_touch_device
    }

    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Time until the next timer is due, if any.
    pub fn time_until_next_timer(&self) -> Option<Duration> {
        self.timers
            .next_deadline()
            .map(|deadline| deadline.saturating_sub(self.timers.now()))
    }

    /// Fire every timer due by `now`, in order, then move the clock to `now`.
    pub fn advance_clock(&mut self, now: Duration) {
        while let Some(fired) = self.timers.pop_due(now) {
            self.on_timer(fired);
        }
        self.timers.advance_to(now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
        self.relayout();
        self.measure_visibility();
        if let Some((column, row)) = self.pointer {
            self.hover_at(column, row);
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let page = i64::from(self.body.height.max(1));
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to(self.max_scroll()),
            KeyCode::Char('v') => self.dispatch_gallery(GalleryIntent::ToggleView),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.hover_at(mouse.column, mouse.row)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover_at(mouse.column, mouse.row);
                self.tap_at(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            _ => {}
        }
    }

    /// Move the pointer to a screen cell, firing leave/enter on the cards
    /// it exits and enters.
    pub fn hover_at(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        let target = self.card_at(column, row);
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            if let Some(card) = self.card_mut(previous) {
                card.preview.pointer_leave();
            }
        }
        if let Some(next) = target {
            if let Some(card) = self.card_mut(next) {
                card.preview.pointer_enter();
            }
        }
        self.hovered = target;
    }

    pub fn tap_at(&mut self, column: u16, row: u16) {
        if let Some(id) = self.card_at(column, row) {
            if let Some(card) = self.card_mut(id) {
                card.preview.tap();
            }
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let target = (i64::from(self.scroll) + delta).clamp(0, i64::from(self.max_scroll()));
        self.scroll_to(target as u32);
    }

    pub fn scroll_to(&mut self, offset: u32) {
        let offset = offset.min(self.max_scroll());
        if offset == self.scroll {
            return;
        }
        self.scroll = offset;
        self.measure_visibility();
        if let Some((column, row)) = self.pointer {
            self.hover_at(column, row);
        }
    }

    pub fn dispatch_gallery(&mut self, intent: GalleryIntent) {
        if !GalleryReducer::dispatch(&mut self.gallery, intent) {
            return;
        }
        tracing::debug!(view = ?self.gallery.view, "Gallery view changed");
        self.unmount_cards();
        self.scroll = 0;
        self.mount_cards();
        self.measure_visibility();
        if let Some((column, row)) = self.pointer {
            self.hover_at(column, row);
        }
    }

    /// Report threshold crossings of every mounted card to its controller.
    pub fn measure_visibility(&mut self) {
        let viewport = viewport(self.body, self.scroll);
        let cards = &self.cards;
        let areas = &self.layout.cards;
        let changes = self.visibility.measure(viewport, |id| {
            cards
                .iter()
                .position(|card| card.id == *id)
                .and_then(|index| areas.get(index).copied())
        });

        for (id, visible) in changes {
            if let Some(card) = self.card_mut(id) {
                card.preview.visibility_changed(visible);
            }
        }
    }

    /// Unmount everything and cancel every timer. Called on every exit path.
    pub fn dispose(&mut self) {
        self.unmount_cards();
        self.typewriter.dispose();
        self.frame_timer = None;
        tracing::debug!("Portfolio disposed");
    }

    fn on_timer(&mut self, fired: Fired<TimerEvent>) {
        match fired.event {
            TimerEvent::Typewriter => {
                self.typewriter.on_timer(fired.token, &mut self.timers);
            }
            TimerEvent::CanPlayThrough { card } => {
                match self.cards.iter_mut().find(|mounted| mounted.id == card) {
                    Some(mounted) if mounted.preview.buffering_token() == Some(fired.token) => {
                        mounted.preview.video_ready();
                    }
                    _ => tracing::trace!(?card, "Ignoring buffering timer for unmounted card"),
                }
            }
            TimerEvent::Frame => {
                if self.frame_timer.as_ref().map(TimerGuard::token) != Some(fired.token) {
                    return;
                }
                for card in &mut self.cards {
                    if let Some(video) = card.preview.media_mut() {
                        video.advance();
                    }
                }
                self.frame_timer = Some(
                    self.timers
                        .schedule_once(self.preview_config.frame_interval(), TimerEvent::Frame),
                );
            }
        }
    }

    fn mount_cards(&mut self) {
        let kind = self.gallery.view.kind();
        let projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|project| project.kind == kind)
            .cloned()
            .collect();

        for project in projects {
            let id = CardId(self.next_card_id);
            self.next_card_id += 1;

            let image = match load_image(&project.image, &self.media_base) {
                Ok(art) => Some(art),
                Err(err) => {
                    tracing::warn!(title = %project.title, error = %err, "Image unavailable, showing placeholder");
                    None
                }
            };
            let media = project
                .video_source()
                .and_then(|video| match load_frames(video, &self.media_base) {
                    Ok(frames) => Some(FrameVideo::new(frames)),
                    Err(err) => {
                        tracing::warn!(title = %project.title, error = %err, "Video unavailable, keeping image");
                        None
                    }
                });

            let buffers = media.is_some();
            let mut preview = PreviewCard::mount(project, media, self.is_touch_device);
            preview.attach_observation(
                self.visibility
                    .observe(id, self.preview_config.visibility_threshold),
            );
            if buffers {
                preview.attach_buffering(self.timers.schedule_once(
                    self.preview_config.buffer_delay(),
                    TimerEvent::CanPlayThrough { card: id },
                ));
            }
            self.cards.push(MountedCard { id, preview, image });
        }

        self.relayout();
    }

    fn unmount_cards(&mut self) {
        for card in &mut self.cards {
            card.preview.dispose();
        }
        self.cards.clear();
        self.hovered = None;
    }

    fn relayout(&mut self) {
        self.layout = page_layout(
            self.body.width,
            self.gallery.view,
            self.cards.len(),
            self.experiences.len(),
        );
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u32 {
        self.layout.height.saturating_sub(u32::from(self.body.height))
    }

    fn card_at(&self, column: u16, row: u16) -> Option<CardId> {
        let (x, y) = screen_to_page(self.body, self.scroll, column, row)?;
        self.layout
            .cards
            .iter()
            .position(|area| area.contains(x, y))
            .and_then(|index| self.cards.get(index))
            .map(|card| card.id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut MountedCard> {
        self.cards.iter_mut().find(|card| card.id == id)
    }
}
