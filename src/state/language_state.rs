// ============================================================================
// LANGUAGE STATE - Estado del sistema de idioma
// ============================================================================
// Idioma activo + caché de documentos de traducción. Estado compartido solo
// desde el hilo principal (Rc<RefCell>), sin locking. La caché crece de forma
// monotónica y está acotada por los dos idiomas soportados; nunca se desaloja.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::models::{Lang, TranslationDocument};

/// Estado de idioma de la sesión de página
#[derive(Clone)]
pub struct LanguageState {
    current: Rc<RefCell<Lang>>,
    cache: Rc<RefCell<HashMap<Lang, Rc<TranslationDocument>>>>,
}

impl LanguageState {
    pub fn new(initial: Lang) -> Self {
        Self {
            current: Rc::new(RefCell::new(initial)),
            cache: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Idioma activo
    pub fn current(&self) -> Lang {
        *self.current.borrow()
    }

    /// Actualizar el idioma activo (solo tras un cambio exitoso)
    pub fn set_current(&self, lang: Lang) {
        *self.current.borrow_mut() = lang;
    }

    /// Documento cacheado para un idioma, si ya se cargó
    pub fn cached(&self, lang: Lang) -> Option<Rc<TranslationDocument>> {
        self.cache.borrow().get(&lang).cloned()
    }

    /// Guardar un documento en la caché y devolver la instancia compartida
    pub fn insert_cache(&self, lang: Lang, doc: TranslationDocument) -> Rc<TranslationDocument> {
        let doc = Rc::new(doc);
        self.cache.borrow_mut().insert(lang, doc.clone());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_devuelve_la_misma_instancia() {
        let state = LanguageState::new(Lang::En);
        assert!(state.cached(Lang::Tr).is_none());

        let doc = TranslationDocument::new(json!({ "lang": "tr" }));
        let inserted = state.insert_cache(Lang::Tr, doc);
        let cached = state.cached(Lang::Tr).unwrap();

        // La segunda lectura devuelve exactamente la misma instancia
        assert!(Rc::ptr_eq(&inserted, &cached));
    }

    #[test]
    fn test_instancias_independientes() {
        let a = LanguageState::new(Lang::En);
        let b = LanguageState::new(Lang::Tr);

        a.set_current(Lang::Tr);
        assert_eq!(a.current(), Lang::Tr);
        assert_eq!(b.current(), Lang::Tr);

        b.set_current(Lang::En);
        assert_eq!(a.current(), Lang::Tr);
        assert_eq!(b.current(), Lang::En);
    }
}
