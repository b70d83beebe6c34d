// Skill extraction core: taxonomy, normalization, NLP capabilities,
// extraction and corpus frequency aggregation.
// Everything here is synchronous and read-only once built.

pub mod extractor;
pub mod frequency;
pub mod handlers;
pub mod models;
pub mod nlp;
pub mod normalize;
pub mod taxonomy;

pub use extractor::SkillExtractor;
pub use frequency::SkillFrequency;
pub use models::{CategorizedSkills, SkillCategory};
pub use taxonomy::SkillTaxonomy;
