use crate::config::ProjectKind;
use crate::ui::mvi::UiState;

/// Which project list the gallery shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryView {
    /// Phone-shaped projects, three per row.
    #[default]
    Mobile,
    /// Wide projects, two per row.
    Desktop,
}

impl GalleryView {
    pub fn kind(self) -> ProjectKind {
        match self {
            Self::Mobile => ProjectKind::Phone,
            Self::Desktop => ProjectKind::Wide,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Mobile => Self::Desktop,
            Self::Desktop => Self::Mobile,
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Mobile => "Switch to Desktop",
            Self::Desktop => "Switch to Mobile",
        }
    }

    /// Cards per row when the terminal is wide enough.
    pub fn columns(self) -> u16 {
        match self {
            Self::Mobile => 3,
            Self::Desktop => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    pub view: GalleryView,
}

impl UiState for GalleryState {}
