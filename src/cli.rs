use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

mod check;
mod render;
mod terminal;

use check::Check;
use clap::ArgAction;
use render::Render;
use saninv::Config;

/// Command-line interface for rendering inventory element trees.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a classification config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Runs the selected subcommand.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;
        self.command.run(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// The available subcommands.
#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Render an element tree description as API text
    Render(Render),
    /// Build an element tree and report per-kind record counts
    Check(Check),
}

impl Command {
    fn run(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Render(render) => render.run(config),
            Self::Check(check) => check.run(config),
        }
    }
}

/// Loads the classification config, falling back to the built-in tag
/// spellings when no path is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(
        || {
            tracing::debug!("no config file given; using built-in tag spellings");
            Ok(Config::default())
        },
        |path| Config::load(path).map_err(|e| anyhow::anyhow!(e)),
    )
}

/// Reads the input document from a file, or from stdin when the path is `-`.
fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
