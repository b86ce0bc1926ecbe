use std::path::PathBuf;

use clap::Args;
use entigen_manifest::EntigenToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = "entigen.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let entigen_toml = EntigenToml::open(&self.config).unwrap_or_exit();
        let manifest = entigen_toml.manifest();

        if manifest.entities.is_empty() {
            println!("No entities defined");
            return Ok(());
        }

        println!("Entities:");
        for entity in &manifest.entities {
            println!(
                "  {}.{} ({} properties, {} relationships)",
                manifest.namespace_of(entity),
                entity.class.get_ref(),
                entity.properties.len(),
                entity.relationships.len()
            );
        }

        Ok(())
    }
}
