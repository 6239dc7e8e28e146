pub mod condolence;
pub mod language;
pub mod translation;

pub use condolence::CondolenceEntry;
pub use language::Lang;
pub use translation::TranslationDocument;
