use anyhow::Result;
use clap::Parser;
use itrm::model::SessionDocument;
use schemars::schema_for;

#[derive(Parser, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    /// Print the JSON Schema of the session document, for editor tooling
    /// and upstream form validation.
    pub fn execute(self) -> Result<()> {
        let schema = schema_for!(SessionDocument);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
