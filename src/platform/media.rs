//! Media elements and media reference loading.
//!
//! A project's "video" is a looping list of text frames and its "image" is a
//! block of text art. Both come either inline from the config or from files
//! next to it.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{ImageRef, VideoRef};

/// Line that separates frames inside a frame file.
pub const FRAME_SEPARATOR: &str = "---";

/// Handle to a playable element owned by exactly one preview card.
pub trait MediaElement {
    /// Request playback. May be refused (the equivalent of an autoplay
    /// policy rejection); callers treat that as best-effort.
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    fn seek_to_start(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Playback rejected: {reason}")]
    Rejected { reason: String },
}

/// Errors that can occur when loading a media reference.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Failed to read media file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Media '{reference}' is empty")]
    Empty { reference: String },
}

/// Looping frame animation standing in for a muted video.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameVideo {
    frames: Vec<String>,
    position: usize,
    playing: bool,
}

impl FrameVideo {
    pub fn new(frames: Vec<String>) -> Self {
        Self {
            frames,
            position: 0,
            playing: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn current_frame(&self) -> Option<&str> {
        self.frames.get(self.position).map(String::as_str)
    }

    /// Step to the next frame, wrapping at the end. No-op while paused.
    pub fn advance(&mut self) {
        if self.playing && !self.frames.is_empty() {
            self.position = (self.position + 1) % self.frames.len();
        }
    }
}

impl MediaElement for FrameVideo {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.frames.is_empty() {
            return Err(PlaybackError::Rejected {
                reason: "no frames loaded".to_string(),
            });
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek_to_start(&mut self) {
        self.position = 0;
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

pub fn load_image(reference: &ImageRef, base: &Path) -> Result<String, MediaError> {
    let art = match reference {
        ImageRef::Inline { art } => art.clone(),
        ImageRef::Path(path) => read_media_file(path, base)?,
    };

    if art.trim().is_empty() {
        return Err(MediaError::Empty {
            reference: reference.describe(),
        });
    }
    Ok(art)
}

pub fn load_frames(reference: &VideoRef, base: &Path) -> Result<Vec<String>, MediaError> {
    let frames = match reference {
        VideoRef::Inline { frames } => frames.clone(),
        VideoRef::Path(path) => split_frames(&read_media_file(path, base)?),
    };

    if frames.iter().all(|frame| frame.trim().is_empty()) {
        return Err(MediaError::Empty {
            reference: reference.describe(),
        });
    }
    Ok(frames)
}

/// Split frame file content on [`FRAME_SEPARATOR`] lines, dropping blank
/// frames.
pub fn split_frames(content: &str) -> Vec<String> {
    let mut frames = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim_end() == FRAME_SEPARATOR {
            frames.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    frames.push(current.join("\n"));

    frames.retain(|frame| !frame.trim().is_empty());
    frames
}

fn read_media_file(path: &Path, base: &Path) -> Result<String, MediaError> {
    let path = resolve_path(path, base);
    fs::read_to_string(&path).map_err(|e| MediaError::ReadError { path, source: e })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_without_frames_is_rejected() {
        let mut video = FrameVideo::default();
        assert!(matches!(video.play(), Err(PlaybackError::Rejected { .. })));
        assert!(!video.is_playing());
    }

    #[test]
    fn advance_wraps_only_while_playing() {
        let mut video = FrameVideo::new(vec!["a".into(), "b".into()]);
        video.advance();
        assert_eq!(video.position(), 0);

        video.play().expect("frames loaded");
        video.advance();
        assert_eq!(video.current_frame(), Some("b"));
        video.advance();
        assert_eq!(video.current_frame(), Some("a"));
    }

    #[test]
    fn pause_keeps_position_seek_resets_it() {
        let mut video = FrameVideo::new(vec!["a".into(), "b".into(), "c".into()]);
        video.play().expect("frames loaded");
        video.advance();
        video.pause();
        assert_eq!(video.position(), 1);
        video.seek_to_start();
        assert_eq!(video.position(), 0);
    }

    #[test]
    fn split_frames_on_separator_lines() {
        let frames = split_frames("one\n---\ntwo\nlines\n---\n\n---\nthree\n");
        assert_eq!(frames, vec!["one", "two\nlines", "three"]);
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let resolved = resolve_path(Path::new("clips/a.txt"), Path::new("/srv/folio"));
        assert_eq!(resolved, PathBuf::from("/srv/folio/clips/a.txt"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let reference = VideoRef::Path(PathBuf::from("definitely/not/here.txt"));
        let result = load_frames(&reference, Path::new("/nonexistent"));
        assert!(matches!(result, Err(MediaError::ReadError { .. })));
    }

    #[test]
    fn inline_blank_frames_are_empty() {
        let reference = VideoRef::Inline {
            frames: vec!["  ".into()],
        };
        let result = load_frames(&reference, Path::new("."));
        assert!(matches!(result, Err(MediaError::Empty { .. })));
    }
}
