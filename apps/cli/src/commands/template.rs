use crate::ui;
use anyhow::{Context, Result};
use clap::Parser;
use itrm::model::template::input_template_csv;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct TemplateCommand {
    /// Where to write the template (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TemplateCommand {
    pub fn execute(self) -> Result<()> {
        let csv = input_template_csv();

        match self.output {
            Some(path) => {
                std::fs::write(&path, csv)
                    .with_context(|| format!("Failed to write template to {}", path.display()))?;
                ui::info(format!("Input template written to {}", path.display()));
            }
            None => print!("{csv}"),
        }

        Ok(())
    }
}
