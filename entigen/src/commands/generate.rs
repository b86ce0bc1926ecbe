use std::path::PathBuf;

use clap::Args;
use entigen_codegen::LanguageCodegen;
use entigen_codegen_csharp::Generator;
use entigen_core::Overwrite;
use entigen_manifest::EntigenToml;
use eyre::{Result, WrapErr};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to entigen.toml (defaults to ./entigen.toml)
    #[arg(short, long, default_value = "entigen.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let entigen_toml = EntigenToml::open(&self.config).unwrap_or_exit();
        let manifest = entigen_toml.manifest();

        let mut generator = Generator::new(manifest.entities(), manifest.options());
        if let Some(directory) = manifest.directory() {
            generator = generator.directory(directory);
        }
        if self.keep_existing {
            generator = generator.overwrite(Overwrite::IfMissing);
        }

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate code")?;

        tracing::info!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            output = %self.output.display(),
            "generation finished"
        );

        println!("Generated {} entities:", result.written.len());
        for path in &result.written {
            println!("  + {}", path);
        }
        if !result.skipped.is_empty() {
            println!();
            println!("Kept existing:");
            for path in &result.skipped {
                println!("  = {}", path);
            }
        }

        Ok(())
    }

    fn run_preview<G: LanguageCodegen>(&self, generator: &G) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
