// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye (p.ej.
//   con set_inner_html("")), el navegador automáticamente limpia los listeners
//   asociados. Por lo tanto, closure.forget() es seguro para listeners locales.
// - Para listeners globales (window/document): solo deben registrarse UNA VEZ
//   al inicio de la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
/// Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
