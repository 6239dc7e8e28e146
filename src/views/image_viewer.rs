// ============================================================================
// IMAGE VIEWER - Visor de imagen a tamaño completo (<dialog>)
// ============================================================================
// El visor es un <dialog id="condolence-image-modal"> ya presente en el
// markup, con un <img> dentro. Se cierra al hacer click en el backdrop
// (fuera del contenido de la imagen).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlDialogElement};

use crate::dom::events::on_click;
use crate::dom::{get_element_by_id, set_attribute};

const VIEWER_ID: &str = "condolence-image-modal";

fn viewer_dialog() -> Option<HtmlDialogElement> {
    get_element_by_id(VIEWER_ID)?.dyn_into::<HtmlDialogElement>().ok()
}

/// Abrir el visor con la imagen indicada
pub fn show_image(src: &str, alt: &str) -> Result<(), JsValue> {
    let Some(dialog) = viewer_dialog() else {
        log::warn!("⚠️ No existe el elemento #{}", VIEWER_ID);
        return Ok(());
    };

    if let Some(img) = dialog.query_selector("img")? {
        set_attribute(&img, "src", src)?;
        set_attribute(&img, "alt", alt)?;
    }

    dialog.show_modal()
}

/// Vincular el cierre por click en el backdrop (una sola vez, al inicializar).
/// Si el dialog no existe en la página actual, no hace nada.
pub fn bind_backdrop_close() -> Result<(), JsValue> {
    let Some(dialog) = viewer_dialog() else {
        return Ok(());
    };

    let dialog_target: EventTarget = dialog.clone().into();
    let dialog_el = dialog.clone();
    on_click(&dialog, move |e| {
        // Solo cerrar si el click cayó sobre el propio dialog (el backdrop),
        // no sobre la imagen u otro contenido interno
        if e.target().as_ref() == Some(&dialog_target) {
            dialog_el.close();
        }
    })?;

    Ok(())
}
