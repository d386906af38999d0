use ratatui::layout::Rect;

use crate::platform::Area;
use crate::ui::gallery::GalleryView;

pub const HERO_HEIGHT: u16 = 5;
pub const FOOTER_HEIGHT: u16 = 3;
/// Section heading plus one spacer line.
pub const SECTION_TITLE_HEIGHT: u32 = 3;
pub const CARD_GAP: u32 = 1;
pub const PHONE_CARD_HEIGHT: u32 = 14;
pub const WIDE_CARD_HEIGHT: u32 = 11;
pub const EXPERIENCE_HEIGHT: u32 = 5;
/// Below this width the gallery collapses to one column.
pub const NARROW_WIDTH: u32 = 60;

/// Split the terminal into hero, scrollable body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let hero_height = area.height.min(HERO_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(hero_height));
    let hero = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: hero_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + hero_height,
        width: area.width,
        height: area.height.saturating_sub(hero_height + footer_height),
    };
    (hero, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Positions of everything on the scrollable page, in page coordinates
/// (row 0 is the top of the page, not of the screen).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub cards: Vec<Area>,
    /// Row of the "Experience" heading.
    pub experience_title: i32,
    pub experiences: Vec<Area>,
    /// Total page height in rows.
    pub height: u32,
}

pub fn page_layout(
    width: u16,
    view: GalleryView,
    card_count: usize,
    experience_count: usize,
) -> PageLayout {
    let width = u32::from(width);
    let columns = if width < NARROW_WIDTH {
        1
    } else {
        u32::from(view.columns())
    };
    let card_height = match view {
        GalleryView::Mobile => PHONE_CARD_HEIGHT,
        GalleryView::Desktop => WIDE_CARD_HEIGHT,
    };
    let card_width = width.saturating_sub(CARD_GAP * (columns - 1)) / columns;
    let gallery_top = SECTION_TITLE_HEIGHT as i32;

    let cards = (0..card_count as u32)
        .map(|index| {
            let (row, column) = (index / columns, index % columns);
            Area::new(
                (column * (card_width + CARD_GAP)) as i32,
                gallery_top + (row * (card_height + CARD_GAP)) as i32,
                card_width,
                card_height,
            )
        })
        .collect();

    let rows = (card_count as u32).div_ceil(columns);
    let experience_title = gallery_top + (rows * (card_height + CARD_GAP)) as i32 + 1;
    let experiences_top = experience_title + SECTION_TITLE_HEIGHT as i32;
    let experiences = (0..experience_count as u32)
        .map(|index| {
            Area::new(
                0,
                experiences_top + (index * (EXPERIENCE_HEIGHT + CARD_GAP)) as i32,
                width,
                EXPERIENCE_HEIGHT,
            )
        })
        .collect();

    let height = experiences_top as u32 + experience_count as u32 * (EXPERIENCE_HEIGHT + CARD_GAP);
    PageLayout {
        cards,
        experience_title,
        experiences,
        height,
    }
}

/// The part of the page the body region currently shows.
pub fn viewport(body: Rect, scroll: u32) -> Area {
    Area::new(0, scroll as i32, u32::from(body.width), u32::from(body.height))
}

/// Map a screen cell to page coordinates. `None` outside the body.
pub fn screen_to_page(body: Rect, scroll: u32, column: u16, row: u16) -> Option<(i32, i32)> {
    let inside = column >= body.x
        && column < body.x.saturating_add(body.width)
        && row >= body.y
        && row < body.y.saturating_add(body.height);
    if !inside {
        return None;
    }
    Some((
        i32::from(column - body.x),
        i32::from(row - body.y) + scroll as i32,
    ))
}

/// Screen rectangle of a page area, clipped to the body. `None` when fully
/// scrolled out.
pub fn page_to_screen(body: Rect, scroll: u32, area: Area) -> Option<Rect> {
    let top = i64::from(area.y) - i64::from(scroll);
    let bottom = top + i64::from(area.height);
    let left = i64::from(area.x);
    let right = left + i64::from(area.width);

    let clip_top = top.max(0);
    let clip_bottom = bottom.min(i64::from(body.height));
    let clip_left = left.max(0);
    let clip_right = right.min(i64::from(body.width));
    if clip_bottom <= clip_top || clip_right <= clip_left {
        return None;
    }

    Some(Rect {
        x: body.x + clip_left as u16,
        y: body.y + clip_top as u16,
        width: (clip_right - clip_left) as u16,
        height: (clip_bottom - clip_top) as u16,
    })
}

/// Rows of a page area cut off above and below the body at this scroll.
pub fn hidden_rows(body: Rect, scroll: u32, area: Area) -> (u16, u16) {
    let top = i64::from(scroll) - i64::from(area.y);
    let bottom = i64::from(area.y) + i64::from(area.height)
        - (i64::from(scroll) + i64::from(body.height));
    let clamp = |rows: i64| rows.clamp(0, i64::from(u16::MAX)) as u16;
    (clamp(top), clamp(bottom))
}
