pub mod condolence_card;
pub mod condolence_list;
pub mod image_viewer;

pub use condolence_list::{render_condolences, render_load_error};
