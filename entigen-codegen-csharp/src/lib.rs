mod entity_class;
mod generator;
mod naming;
mod type_mapper;

pub use entigen_codegen::{GenerateResult, LanguageCodegen, PreviewFile, SynthesisError};
pub use entity_class::{EntityClassRenderer, synthesize};
pub use generator::Generator;
pub use naming::CSHARP_NAMING;
pub use type_mapper::CSharpTypeMapper;
