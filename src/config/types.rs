use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::platform::InputMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
}

/// Hero section text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Printed before the name (e.g., "Hello, I'm").
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

/// Phrase cycling settings for the hero subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Phrases typed in order, forever. May be empty (blank subtitle).
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Delay between typed characters (default: 100).
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u64,
    /// Delay between deleted characters (default: 50).
    #[serde(default = "default_deleting_speed_ms")]
    pub deleting_speed_ms: u64,
    /// Hold time once a phrase is fully typed (default: 2000).
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

/// Project card preview settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Hover-driven, tap-driven, or detected.
    #[serde(default)]
    pub input: InputMode,
    /// Fraction of a card that must be on screen for it to keep playing
    /// (default: 0.5).
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f32,
    /// Time a video needs before it can play through (default: 400).
    #[serde(default = "default_buffer_ms")]
    pub buffer_ms: u64,
    /// Frame interval of preview videos (default: 120).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

/// Which gallery view a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Phone-shaped card, listed in the mobile view.
    #[default]
    Phone,
    /// Wide card, listed in the desktop view.
    Wide,
}

/// Static image of a project card: a file path or inline text art.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Path(PathBuf),
    Inline { art: String },
}

/// Preview video of a project card: a frame file path or inline frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VideoRef {
    Path(PathBuf),
    Inline { frames: Vec<String> },
}

/// One entry of the project gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub kind: ProjectKind,
    pub image: ImageRef,
    #[serde(default)]
    pub video: Option<VideoRef>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link_url: String,
    /// Call-to-action label (default: "Learn More").
    #[serde(default)]
    pub button_label: Option<String>,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
}

fn default_greeting() -> String {
    "Hello, I'm".to_string()
}

fn default_typing_speed_ms() -> u64 {
    100
}

fn default_deleting_speed_ms() -> u64 {
    50
}

fn default_pause_ms() -> u64 {
    2000
}

fn default_visibility_threshold() -> f32 {
    0.5
}

fn default_buffer_ms() -> u64 {
    400
}

fn default_frame_ms() -> u64 {
    120
}

impl TypewriterConfig {
    pub fn typing_speed(&self) -> Duration {
        Duration::from_millis(self.typing_speed_ms)
    }

    pub fn deleting_speed(&self) -> Duration {
        Duration::from_millis(self.deleting_speed_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl PreviewConfig {
    pub fn buffer_delay(&self) -> Duration {
        Duration::from_millis(self.buffer_ms)
    }

    /// Never zero, even for an unvalidated config.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }
}

impl ImageRef {
    /// Short human-readable form for logs and errors.
    pub fn describe(&self) -> String {
        match self {
            ImageRef::Path(path) => path.display().to_string(),
            ImageRef::Inline { .. } => "inline art".to_string(),
        }
    }
}

impl VideoRef {
    /// A reference that cannot point at anything (an empty path or no
    /// frames). Such a project is treated as having no video.
    pub fn is_blank(&self) -> bool {
        match self {
            VideoRef::Path(path) => path.as_os_str().is_empty(),
            VideoRef::Inline { frames } => frames.is_empty(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            VideoRef::Path(path) => path.display().to_string(),
            VideoRef::Inline { frames } => format!("{} inline frames", frames.len()),
        }
    }
}

impl Project {
    /// The video reference, unless missing or blank.
    pub fn video_source(&self) -> Option<&VideoRef> {
        self.video.as_ref().filter(|video| !video.is_blank())
    }

    pub fn button_label(&self) -> &str {
        self.button_label.as_deref().unwrap_or("Learn More")
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Mikhai".to_string(),
            greeting: default_greeting(),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "Software Engineer".to_string(),
                "Data Scientist".to_string(),
                "University Student".to_string(),
            ],
            typing_speed_ms: default_typing_speed_ms(),
            deleting_speed_ms: default_deleting_speed_ms(),
            pause_ms: default_pause_ms(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            input: InputMode::default(),
            visibility_threshold: default_visibility_threshold(),
            buffer_ms: default_buffer_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            typewriter: TypewriterConfig::default(),
            preview: PreviewConfig::default(),
            projects: sample_projects(),
            experiences: sample_experiences(),
        }
    }
}

fn spinner_frames(glyphs: &[&str]) -> Vec<String> {
    glyphs
        .iter()
        .map(|glyph| format!("\n\n      {glyph}\n"))
        .collect()
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            title: "FlyBy AI".to_string(),
            kind: ProjectKind::Phone,
            image: ImageRef::Inline {
                art: "  .-.\n (o o)\n | O \\\n  \\   \\\n   `~~~'".to_string(),
            },
            video: Some(VideoRef::Inline {
                frames: spinner_frames(&["✈   ", " ✈  ", "  ✈ ", "   ✈"]),
            }),
            description: "Flight companion app with on-device trip summaries.".to_string(),
            link_url: "https://example.com/flyby".to_string(),
            button_label: None,
        },
        Project {
            title: "Dlicio".to_string(),
            kind: ProjectKind::Phone,
            image: ImageRef::Inline {
                art: "  ___\n |   |\n |___|\n  \\_/".to_string(),
            },
            video: Some(VideoRef::Inline {
                frames: spinner_frames(&["◐", "◓", "◑", "◒"]),
            }),
            description: "Recipe discovery with step-by-step cooking mode.".to_string(),
            link_url: "https://example.com/dlicio".to_string(),
            button_label: Some("View Demo".to_string()),
        },
        Project {
            title: "Campus Navigator".to_string(),
            kind: ProjectKind::Phone,
            image: ImageRef::Inline {
                art: " [=====]\n |  +  |\n [=====]".to_string(),
            },
            video: None,
            description: "Indoor maps for the university campus.".to_string(),
            link_url: "https://example.com/campus".to_string(),
            button_label: None,
        },
        Project {
            title: "Web Project 1".to_string(),
            kind: ProjectKind::Wide,
            image: ImageRef::Inline {
                art: " _______________\n|  ___________  |\n| |           | |\n| |___________| |\n|_______________|".to_string(),
            },
            video: Some(VideoRef::Inline {
                frames: spinner_frames(&["▁▃▅▇", "▃▅▇▅", "▅▇▅▃", "▇▅▃▁"]),
            }),
            description: "Dashboard for course scheduling.".to_string(),
            link_url: "https://example.com/web-1".to_string(),
            button_label: None,
        },
        Project {
            title: "Web Project 2".to_string(),
            kind: ProjectKind::Wide,
            image: ImageRef::Inline {
                art: " ______________\n| <>  ~~~~~~~  |\n|______________|".to_string(),
            },
            video: None,
            description: "Static site generator for lab notes.".to_string(),
            link_url: "https://example.com/web-2".to_string(),
            button_label: None,
        },
    ]
}

fn sample_experiences() -> Vec<Experience> {
    vec![
        Experience {
            company: "Tech Company A".to_string(),
            role: "Software Engineer Intern".to_string(),
            period: "May 2024 - Present".to_string(),
            description: "Developed full-stack applications and shipped features that improved user engagement.".to_string(),
        },
        Experience {
            company: "StartUp B".to_string(),
            role: "Data Science Intern".to_string(),
            period: "Jan 2024 - April 2024".to_string(),
            description: "Built models for predictive analytics and cut processing time through optimization.".to_string(),
        },
        Experience {
            company: "University Research Lab".to_string(),
            role: "Research Assistant".to_string(),
            period: "Sept 2023 - Dec 2023".to_string(),
            description: "Conducted research in artificial intelligence.".to_string(),
        },
    ]
}
