pub mod registry;
pub mod static_catalog;

pub use registry::{SaveOutcome, TypeDraft, TypeEntry, TypeRegistry};
pub use static_catalog::{question_type_info, CatalogSource, StaticCatalog, TypeGroup, QUESTION_TYPES};
