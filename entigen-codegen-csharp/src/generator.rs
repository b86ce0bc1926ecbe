//! C# entity class generator.

use std::{collections::HashMap, path::Path};

use entigen_codegen::{
    GenerateResult, LanguageCodegen, PreviewFile, SynthesisError, validate_entities,
};
use entigen_core::{File, Overwrite, WriteResult};
use entigen_ir::{Entity, GeneratorOptions};
use eyre::{Result, WrapErr};

use crate::{CSHARP_NAMING, synthesize};

/// Generates one `<Class>.cs` file per entity.
pub struct Generator {
    entities: Vec<Entity>,
    options: GeneratorOptions,
    directory: Option<String>,
    overwrite: Overwrite,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        validate_entities(&self.entities, &CSHARP_NAMING)?;
        self.check_output_paths()?;

        self.entities
            .iter()
            .map(|entity| -> Result<PreviewFile> {
                let content = synthesize(entity, &self.options)
                    .wrap_err_with(|| format!("failed to generate entity '{}'", entity.class_name))?;
                Ok(PreviewFile {
                    path: self.file_path(entity),
                    content,
                })
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Synthesize everything up front so one bad entity writes nothing.
        let files = self.preview()?;
        let mut result = GenerateResult::default();

        for preview in files {
            let file = File::new(output_dir.join(&preview.path), preview.content)
                .overwrite(self.overwrite);
            match file.write()? {
                WriteResult::Written => result.written.push(preview.path),
                WriteResult::Skipped => result.skipped.push(preview.path),
            }
        }

        tracing::debug!(
            language = self.language(),
            written = result.written.len(),
            skipped = result.skipped.len(),
            "generated entity classes"
        );

        Ok(result)
    }
}

impl Generator {
    pub fn new(entities: Vec<Entity>, options: GeneratorOptions) -> Self {
        Self {
            entities,
            options,
            directory: None,
            overwrite: Overwrite::Always,
        }
    }

    /// Place generated files under this subdirectory of the output directory.
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        let directory = directory.into();
        let directory = directory.trim_matches('/');
        self.directory = (!directory.is_empty()).then(|| directory.to_string());
        self
    }

    /// Set how existing files are treated.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Reject entities that would be written to the same file.
    ///
    /// Paths compare case-insensitively so output stays intact on
    /// case-insensitive file systems.
    fn check_output_paths(&self) -> std::result::Result<(), SynthesisError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for entity in &self.entities {
            let path = self.file_path(entity);
            let key = path.to_lowercase();
            if let Some(first) = seen.get(&key) {
                return Err(SynthesisError::DuplicateOutputPath {
                    path,
                    first: first.to_string(),
                    second: entity.class_name.clone(),
                });
            }
            seen.insert(key, &entity.class_name);
        }
        Ok(())
    }

    /// Relative output path of an entity's file.
    fn file_path(&self, entity: &Entity) -> String {
        let file_name = format!(
            "{}.{}",
            CSHARP_NAMING.sanitize(&entity.class_name),
            self.file_extension()
        );
        match &self.directory {
            Some(directory) => format!("{}/{}", directory, file_name),
            None => file_name,
        }
    }
}
