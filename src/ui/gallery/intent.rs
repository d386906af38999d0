use crate::ui::mvi::Intent;

use super::state::GalleryView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryIntent {
    ToggleView,
    Show(GalleryView),
}

impl Intent for GalleryIntent {}
