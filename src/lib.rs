pub mod config;
pub mod logging;
pub mod platform;
pub mod shutdown;
pub mod ui;
