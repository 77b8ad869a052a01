use std::path::PathBuf;

use clap::Parser;
use saninv::{Builder, Config, Element};
use tracing::instrument;

/// Render an element tree description as API text.
#[derive(Debug, Parser)]
#[command(about = "Render an element tree description as API text")]
pub struct Render {
    /// Path to the JSON element tree, or '-' for stdin
    input: PathBuf,
}

impl Render {
    #[instrument(level = "debug", skip(config))]
    pub fn run(self, config: Config) -> anyhow::Result<()> {
        let raw = super::read_input(&self.input)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let builder = Builder::with_config(config);

        // A top-level list is a result set; anything else is a single record.
        let rendered = if value.is_array() {
            builder.collection_from_value(&value)?.to_string()
        } else {
            let element: Element = serde_json::from_value(value)?;
            builder.record(&element)?.to_string()
        };

        println!("{rendered}");
        Ok(())
    }
}
