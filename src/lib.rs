// ============================================================================
// MEMORIAL SITE - FRONTEND (RUST PURO, SIN FRAMEWORK)
// ============================================================================
// Dos subsistemas independientes sobre la misma página:
// - LanguageSwitcher: idioma activo + caché de traducciones + preferencia
// - Condolence renderer: fetch, orden y tarjetas de mensajes
// Sin servidor propio: solo recursos JSON estáticos y localStorage.
// ============================================================================

mod app;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use wasm_logger::Config;

use std::cell::RefCell;

use crate::app::App;
use crate::models::Lang;

// Instancia global de la app, inicializada una vez al cargar la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

fn start_app() {
    let app = App::new();
    if let Err(e) = app.run() {
        log::error!("❌ Error inicializando la página: {:?}", e);
    }
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::default());
    log::info!("🕯️ Memorial site frontend starting...");

    // Esperar DOMContentLoaded si el documento todavía se está parseando.
    // Listener global registrado UNA SOLA VEZ, por lo que forget() es seguro.
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            start_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        start_app();
    }

    Ok(())
}

/// Cambiar al idioma indicado, para uso externo desde JS.
/// Códigos no soportados se ignoran.
#[wasm_bindgen]
pub fn switch_language(code: String) {
    let Some(lang) = Lang::parse(&code) else {
        log::warn!("⚠️ Código de idioma no soportado: {}", code);
        return;
    };
    with_switcher(move |switcher| {
        spawn_local(async move {
            if let Err(e) = switcher.switch_language(lang).await {
                log::error!("❌ Error cambiando idioma: {:?}", e);
            }
        });
    });
}

/// Alternar entre los dos idiomas soportados, para uso externo desde JS
#[wasm_bindgen]
pub fn toggle_language() {
    with_switcher(|switcher| {
        spawn_local(async move {
            if let Err(e) = switcher.toggle_language().await {
                log::error!("❌ Error alternando idioma: {:?}", e);
            }
        });
    });
}

/// Idioma activo ("en" | "tr"), para uso externo desde JS
#[wasm_bindgen]
pub fn current_language() -> String {
    let mut current = Lang::En.to_string();
    with_switcher(|switcher| {
        current = switcher.current().to_string();
    });
    current
}

fn with_switcher<F>(f: F)
where
    F: FnOnce(crate::viewmodels::LanguageSwitcher),
{
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            f(app.switcher().clone());
        } else {
            log::warn!("⚠️ App todavía no inicializada");
        }
    });
}
