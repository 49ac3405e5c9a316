use crate::document;
use crate::openapi;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct FixSortValues {
    /// OpenAPI document to patch (YAML, or JSON if it ends in `.json`)
    #[arg(value_name = "openapi.yaml", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Write here instead of `<input>-fix-sortvals.<ext>`. Existing files are overwritten.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FixSortValues {
    pub fn run(self) -> Result<()> {
        let (mut doc, format) = document::load(&self.input)?;

        let patched = openapi::fix_document(&mut doc);
        info!(input = %self.input.display(), patched, "Patched sortValues items");

        let output = self
            .output
            .unwrap_or_else(|| document::output_path(&self.input));
        document::write(&output, &doc, format)?;
        println!("Wrote: {}", output.display());
        Ok(())
    }
}
