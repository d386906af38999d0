pub mod app;
pub mod card;
pub mod events;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod preview;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod typewriter;
