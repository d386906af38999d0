use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use folio::config::Config;
use folio::logging::init_tracing;
use folio::platform::InputMode;
use folio::shutdown::ShutdownHandle;
use folio::ui::runtime;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version,
    about = "Terminal portfolio with a typing hero and live project previews"
)]
struct Cli {
    /// Config file (default: ~/.config/folio/config.toml)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Override how project previews are driven
    #[arg(long, value_enum)]
    input: Option<InputArg>,

    /// Validate the config and exit
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputArg {
    /// Detect from FOLIO_INPUT
    Auto,
    /// Click toggles playback
    Touch,
    /// Hover plays, leaving stops
    Pointer,
}

impl From<InputArg> for InputMode {
    fn from(arg: InputArg) -> Self {
        match arg {
            InputArg::Auto => InputMode::Auto,
            InputArg::Touch => InputMode::Touch,
            InputArg::Pointer => InputMode::Pointer,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config =
        loaded.with_context(|| format!("Failed to load {}", config_path.display()))?;
    if let Some(input) = cli.input {
        config.preview.input = input.into();
    }

    if cli.check {
        println!(
            "Config OK: {} phrases, {} projects, {} experiences",
            config.typewriter.phrases.len(),
            config.projects.len(),
            config.experiences.len()
        );
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    runtime::run(config, Config::media_base(&config_path), shutdown)
        .context("Terminal UI failed")?;
    Ok(())
}
