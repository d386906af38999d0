//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use folio::config::{Config, ImageRef, Project, ProjectKind, VideoRef};
use folio::platform::{InputMode, MediaElement, PlaybackError};
use folio::ui::app::App;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Terminal size used by app-level tests: 80x24 leaves a 16-row body.
pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;

/// Media requests issued by a preview controller, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCall {
    Play,
    Pause,
    SeekToStart,
}

/// Media element that records every request and can refuse playback.
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub calls: Vec<MediaCall>,
    pub reject_play: bool,
}

impl RecordingMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            calls: Vec::new(),
            reject_play: true,
        }
    }

    pub fn count(&self, call: MediaCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl MediaElement for RecordingMedia {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.calls.push(MediaCall::Play);
        if self.reject_play {
            return Err(PlaybackError::Rejected {
                reason: "autoplay blocked".to_string(),
            });
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(MediaCall::Pause);
    }

    fn seek_to_start(&mut self) {
        self.calls.push(MediaCall::SeekToStart);
    }
}

pub fn project(title: &str, kind: ProjectKind, with_video: bool) -> Project {
    Project {
        title: title.to_string(),
        kind,
        image: ImageRef::Inline {
            art: format!("[{title}]"),
        },
        video: with_video.then(|| VideoRef::Inline {
            frames: vec!["frame-1".to_string(), "frame-2".to_string()],
        }),
        description: format!("{title} description"),
        link_url: String::new(),
        button_label: None,
    }
}

/// Sample config with the input mode pinned, so tests never consult the
/// environment.
pub fn config(input: InputMode) -> Config {
    let mut config = Config::default();
    config.preview.input = input;
    config
}

/// App sized to the standard test terminal.
pub fn app(input: InputMode) -> App {
    app_with(config(input))
}

pub fn app_with(config: Config) -> App {
    let mut app = App::new(config, PathBuf::from("."));
    app.on_resize(COLS, ROWS);
    app
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write file");
    path
}
