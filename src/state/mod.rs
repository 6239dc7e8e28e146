pub mod language_state;

pub use language_state::LanguageState;
