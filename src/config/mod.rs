pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{
    Config, Experience, ImageRef, PreviewConfig, Profile, Project, ProjectKind,
    TypewriterConfig, VideoRef,
};
