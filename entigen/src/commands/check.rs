use std::path::PathBuf;

use clap::Args;
use entigen_codegen::LanguageCodegen;
use entigen_codegen_csharp::Generator;
use entigen_manifest::EntigenToml;
use eyre::{Result, WrapErr};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = "entigen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let entigen_toml = EntigenToml::open(&self.config).unwrap_or_exit();
        let manifest = entigen_toml.manifest();

        let entities = manifest.entities();
        let count = entities.len();
        let generator = Generator::new(entities, manifest.options());
        generator.preview().wrap_err("Validation failed")?;

        println!("✓ {} is valid\n", self.config.display());
        println!(
            "  {} entit{} in {}",
            count,
            if count == 1 { "y" } else { "ies" },
            manifest.project.namespace.get_ref()
        );

        let options = manifest.options();
        println!("  language:      {}", generator.language());
        println!("  documentation: {}", on_off(options.document));
        println!("  nullable:      {}", on_off(options.nullable));
        println!("  file-scoped:   {}", on_off(options.file_scoped_namespace));

        Ok(())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
