// ============================================================================
// CONDOLENCE LIST VIEW - Contenedor de tarjetas de condolencia
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use std::rc::Rc;

use crate::dom::{append_child, set_inner_html};
use crate::models::CondolenceEntry;
use crate::viewmodels::CondolenceViewModel;
use crate::views::condolence_card::render_condolence_card;
use crate::views::image_viewer;

/// Mensaje inerte mostrado cuando la carga falla
const LOAD_ERROR_HTML: &str = "<p>Unable to load messages. Please try again later.</p>";

/// Renderizar todas las condolencias dentro del contenedor.
/// Ordena (estable, más recientes primero) y agrega una tarjeta por entrada.
pub fn render_condolences(
    container: &Element,
    mut entries: Vec<CondolenceEntry>,
) -> Result<(), JsValue> {
    CondolenceViewModel::sort_newest_first(&mut entries);

    let on_image_click: Rc<dyn Fn(String, String)> = Rc::new(|src, alt| {
        if let Err(e) = image_viewer::show_image(&src, &alt) {
            log::error!("❌ Error abriendo visor de imagen: {:?}", e);
        }
    });

    for entry in &entries {
        let card = render_condolence_card(entry, on_image_click.clone())?;
        append_child(container, &card)?;
    }

    Ok(())
}

/// Reemplazar el contenido del contenedor con el mensaje de error.
/// Sin reintentos, sin lista parcial.
pub fn render_load_error(container: &Element) {
    set_inner_html(container, LOAD_ERROR_HTML);
}
