// ============================================================================
// TRANSLATION DOCUMENT - Diccionario de traducciones de un idioma
// ============================================================================
// Documento JSON anidado cargado desde content/{code}.json. Inmutable una vez
// cargado; las claves de traducción son rutas con puntos ("hero.name").
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

/// Documento de traducciones de un idioma
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct TranslationDocument(Value);

impl TranslationDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Etiqueta "lang" declarada por el propio documento, si existe
    pub fn lang_tag(&self) -> Option<&str> {
        self.0.get("lang").and_then(Value::as_str)
    }

    /// Resolver una ruta con puntos ("hero.name" → doc["hero"]["name"]).
    /// Devuelve None si falta algún segmento o si la hoja no es un string.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        let mut current = &self.0;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }
        current.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> TranslationDocument {
        TranslationDocument::new(json!({
            "lang": "tr",
            "hero": {
                "name": "Anısına",
                "dates": "1950 – 2024"
            },
            "nav": { "home": "Ana Sayfa" }
        }))
    }

    #[test]
    fn test_lookup_ruta_anidada() {
        assert_eq!(doc().lookup("hero.name"), Some("Anısına"));
        assert_eq!(doc().lookup("nav.home"), Some("Ana Sayfa"));
    }

    #[test]
    fn test_lookup_ruta_inexistente_devuelve_none() {
        let d = doc();
        assert_eq!(d.lookup("hero.missing"), None);
        assert_eq!(d.lookup("a.b.c"), None);
        assert_eq!(d.lookup(""), None);
    }

    #[test]
    fn test_lookup_hoja_no_string_devuelve_none() {
        // "hero" resuelve a un objeto, no a un string
        assert_eq!(doc().lookup("hero"), None);
    }

    #[test]
    fn test_lang_tag() {
        assert_eq!(doc().lang_tag(), Some("tr"));
        let sin_tag = TranslationDocument::new(json!({ "x": "y" }));
        assert_eq!(sin_tag.lang_tag(), None);
    }
}
