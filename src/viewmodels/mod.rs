pub mod condolence_viewmodel;
pub mod language_switcher;

pub use condolence_viewmodel::{CondolenceViewModel, MessageDisplay};
pub use language_switcher::LanguageSwitcher;
