// ============================================================================
// LANGUAGE SWITCHER - Cambio de idioma de la página
// ============================================================================
// Contexto explícito de la sesión de página: idioma activo + caché de
// documentos + fuente de traducciones. Contrato de fallo: si la carga de un
// documento falla, NADA cambia (ni idioma activo, ni preferencia persistida,
// ni DOM). El commit de estado ocurre solo después de que el await terminó
// con éxito.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use std::rc::Rc;

use crate::dom::events::on_click;
use crate::dom::{
    add_class, document, get_attribute, query_selector_all, remove_attribute, remove_class,
    set_attribute, set_text_content,
};
use crate::models::{Lang, TranslationDocument};
use crate::services::{ContentClient, TranslationSource};
use crate::state::LanguageState;
use crate::utils::storage;

/// Atributo que marca un elemento con su clave de traducción (ruta con puntos)
const LANG_KEY_ATTR: &str = "data-lang-key";

/// Selector de los controles de idioma del header
const LANG_LINK_SELECTOR: &str = ".lang-link";

/// Resolver el idioma inicial a partir de la preferencia almacenada y el
/// locale del navegador. Total: siempre devuelve un código válido.
pub fn resolve_language(stored: Option<&str>, locale: Option<&str>) -> Lang {
    if let Some(lang) = stored.and_then(Lang::parse) {
        return lang;
    }
    Lang::detect_from_locale(locale)
}

/// Switcher de idioma de la página
#[derive(Clone)]
pub struct LanguageSwitcher<C = ContentClient> {
    state: LanguageState,
    client: C,
}

impl LanguageSwitcher<ContentClient> {
    pub fn new() -> Self {
        let initial = Self::resolve_initial_language();
        log::info!("🌐 Idioma inicial: {}", initial);
        Self {
            state: LanguageState::new(initial),
            client: ContentClient::new(),
        }
    }

    /// Preferencia almacenada si es válida; si no, detección del navegador
    pub fn resolve_initial_language() -> Lang {
        let stored = storage::load_language_preference();
        let locale = web_sys::window().and_then(|w| w.navigator().language());
        resolve_language(stored.as_deref(), locale.as_deref())
    }
}

impl<C: TranslationSource + Clone + 'static> LanguageSwitcher<C> {
    #[cfg(test)]
    fn with_client(initial: Lang, client: C) -> Self {
        Self {
            state: LanguageState::new(initial),
            client,
        }
    }

    /// Idioma activo
    pub fn current(&self) -> Lang {
        self.state.current()
    }

    /// Cargar el documento de un idioma, usando la caché si ya se cargó.
    /// None señala fallo de carga; el caller debe dejar su estado intacto.
    pub async fn load_document(&self, lang: Lang) -> Option<Rc<TranslationDocument>> {
        if let Some(doc) = self.state.cached(lang) {
            return Some(doc);
        }

        match self.client.fetch_translations(lang).await {
            Ok(doc) => Some(self.state.insert_cache(lang, doc)),
            Err(e) => {
                log::error!("❌ Error cargando traducciones de '{}': {}", lang, e);
                None
            }
        }
    }

    /// Aplicar un documento a todos los elementos marcados con clave de
    /// traducción. Si una ruta no resuelve a un string, ese elemento queda
    /// sin modificar (se conserva su texto estático).
    pub fn apply_language(&self, doc: &TranslationDocument) -> Result<(), JsValue> {
        for element in query_selector_all(&format!("[{}]", LANG_KEY_ATTR))? {
            let Some(key) = get_attribute(&element, LANG_KEY_ATTR) else {
                continue;
            };
            if let Some(value) = doc.lookup(&key) {
                set_text_content(&element, value);
            }
        }

        // Actualizar el atributo lang del <html>
        let lang_attr = doc
            .lang_tag()
            .map(str::to_string)
            .unwrap_or_else(|| self.current().to_string());
        if let Some(root) = document().and_then(|d| d.document_element()) {
            set_attribute(&root, "lang", &lang_attr)?;
        }

        Ok(())
    }

    /// Cambiar al idioma indicado.
    /// Idempotente: cambiar al idioma ya activo no hace fetch, ni escribe
    /// storage, ni toca el DOM.
    pub async fn switch_language(&self, lang: Lang) -> Result<(), JsValue> {
        if lang == self.current() {
            return Ok(());
        }

        // Si la carga falla, todo el estado previo queda exactamente igual
        let Some(doc) = self.load_document(lang).await else {
            return Ok(());
        };

        self.state.set_current(lang);
        if let Err(e) = storage::save_language_preference(lang) {
            log::warn!("⚠️ No se pudo persistir la preferencia de idioma: {}", e);
        }
        self.apply_language(&doc)?;
        self.update_language_links()?;

        log::info!("✅ Idioma cambiado a: {}", lang);
        Ok(())
    }

    /// Alternar entre los dos idiomas soportados
    pub async fn toggle_language(&self) -> Result<(), JsValue> {
        self.switch_language(self.current().opposite()).await
    }

    /// Refrescar el indicador activo/inactivo de los controles de idioma
    pub fn update_language_links(&self) -> Result<(), JsValue> {
        let current = self.current();
        for link in query_selector_all(LANG_LINK_SELECTOR)? {
            let is_active = get_attribute(&link, "data-lang")
                .and_then(|code| Lang::parse(&code))
                .map(|lang| lang == current)
                .unwrap_or(false);

            if is_active {
                add_class(&link, "active")?;
                set_attribute(&link, "aria-current", "true")?;
            } else {
                remove_class(&link, "active")?;
                remove_attribute(&link, "aria-current")?;
            }
        }
        Ok(())
    }

    /// Vincular los click handlers de los controles de idioma (una sola vez,
    /// durante la inicialización)
    fn bind_language_links(&self) -> Result<(), JsValue> {
        for link in query_selector_all(LANG_LINK_SELECTOR)? {
            let switcher = self.clone();
            let link_el = link.clone();
            on_click(&link, move |e| {
                e.prevent_default();
                let Some(lang) = get_attribute(&link_el, "data-lang").and_then(|c| Lang::parse(&c))
                else {
                    return;
                };
                let switcher = switcher.clone();
                spawn_local(async move {
                    if let Err(e) = switcher.switch_language(lang).await {
                        log::error!("❌ Error cambiando idioma: {:?}", e);
                    }
                });
            })?;
        }
        Ok(())
    }

    /// Secuencia de inicialización: vincular controles → cargar el documento
    /// inicial → aplicarlo. Si la carga inicial falla, la página se queda con
    /// el texto estático del markup (degradación silenciosa).
    pub async fn init(&self) -> Result<(), JsValue> {
        self.bind_language_links()?;
        self.update_language_links()?;

        if let Some(doc) = self.load_document(self.current()).await {
            self.apply_language(&doc)?;
        }
        Ok(())
    }
}

impl Default for LanguageSwitcher<ContentClient> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;

    /// Fuente de traducciones de prueba que cuenta los fetch realizados
    #[derive(Clone)]
    struct StubSource {
        fetches: Rc<Cell<usize>>,
        fail: bool,
    }

    impl StubSource {
        fn ok() -> Self {
            Self {
                fetches: Rc::new(Cell::new(0)),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fetches: Rc::new(Cell::new(0)),
                fail: true,
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.get()
        }
    }

    impl TranslationSource for StubSource {
        async fn fetch_translations(&self, lang: Lang) -> Result<TranslationDocument, String> {
            self.fetches.set(self.fetches.get() + 1);
            if self.fail {
                Err("HTTP 404: Not Found".to_string())
            } else {
                Ok(TranslationDocument::new(json!({ "lang": lang.as_str() })))
            }
        }
    }

    #[test]
    fn test_resolve_language_prefiere_preferencia_valida() {
        assert_eq!(resolve_language(Some("tr"), Some("en-US")), Lang::Tr);
        assert_eq!(resolve_language(Some("en"), Some("tr-TR")), Lang::En);
    }

    #[test]
    fn test_resolve_language_ignora_preferencia_invalida() {
        // "fr" no es un código soportado: cae a la detección del navegador
        assert_eq!(resolve_language(Some("fr"), Some("tr-TR")), Lang::Tr);
        assert_eq!(resolve_language(Some("fr"), Some("en-US")), Lang::En);
        assert_eq!(resolve_language(Some("fr"), None), Lang::En);
    }

    #[test]
    fn test_resolve_language_sin_preferencia() {
        assert_eq!(resolve_language(None, Some("tr")), Lang::Tr);
        assert_eq!(resolve_language(None, Some("en-GB")), Lang::En);
        assert_eq!(resolve_language(None, None), Lang::En);
    }

    #[test]
    fn test_cambiar_al_idioma_activo_no_hace_nada() {
        let source = StubSource::ok();
        let switcher = LanguageSwitcher::with_client(Lang::En, source.clone());

        block_on(switcher.switch_language(Lang::En)).unwrap();

        // Ni fetch, ni cambio de estado
        assert_eq!(switcher.current(), Lang::En);
        assert_eq!(source.fetch_count(), 0);
    }

    #[test]
    fn test_carga_fallida_deja_el_estado_como_estaba() {
        let source = StubSource::failing();
        let switcher = LanguageSwitcher::with_client(Lang::En, source.clone());

        block_on(switcher.switch_language(Lang::Tr)).unwrap();

        // El fetch ocurrió pero falló: el idioma activo queda intacto
        assert_eq!(source.fetch_count(), 1);
        assert_eq!(switcher.current(), Lang::En);
    }

    #[test]
    fn test_load_document_no_repite_fetch_en_cache_hit() {
        let source = StubSource::ok();
        let switcher = LanguageSwitcher::with_client(Lang::En, source.clone());

        let first = block_on(switcher.load_document(Lang::Tr)).unwrap();
        let second = block_on(switcher.load_document(Lang::Tr)).unwrap();

        // La segunda carga sale de la caché: misma instancia, un solo fetch
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(source.fetch_count(), 1);
    }
}
