// ============================================================================
// LANGUAGE - Códigos de idioma soportados
// ============================================================================
// El sitio es bilingüe: inglés y turco. Cualquier otro valor (almacenado o
// detectado) se rechaza y se reemplaza por la detección del navegador.
// ============================================================================

use std::fmt;

/// Idioma de visualización soportado
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Tr,
}

impl Lang {
    /// Código de dos letras ("en" / "tr")
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Tr => "tr",
        }
    }

    /// Parsear un código almacenado. Solo "en" y "tr" son válidos.
    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "tr" => Some(Lang::Tr),
            _ => None,
        }
    }

    /// El otro idioma (con exactamente dos soportados no hace falta más)
    pub fn opposite(&self) -> Lang {
        match self {
            Lang::En => Lang::Tr,
            Lang::Tr => Lang::En,
        }
    }

    /// Detectar idioma desde el locale reportado por el navegador.
    /// "tr", "tr-TR", "TR" → turco; todo lo demás → inglés.
    pub fn detect_from_locale(locale: Option<&str>) -> Lang {
        match locale {
            Some(l) if l.to_ascii_lowercase().starts_with("tr") => Lang::Tr,
            _ => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solo_acepta_codigos_soportados() {
        assert_eq!(Lang::parse("en"), Some(Lang::En));
        assert_eq!(Lang::parse("tr"), Some(Lang::Tr));
        assert_eq!(Lang::parse("fr"), None);
        assert_eq!(Lang::parse("EN"), None);
        assert_eq!(Lang::parse(""), None);
    }

    #[test]
    fn test_opposite_alterna_entre_los_dos() {
        assert_eq!(Lang::En.opposite(), Lang::Tr);
        assert_eq!(Lang::Tr.opposite(), Lang::En);
        assert_eq!(Lang::En.opposite().opposite(), Lang::En);
    }

    #[test]
    fn test_detect_from_locale() {
        assert_eq!(Lang::detect_from_locale(Some("tr-TR")), Lang::Tr);
        assert_eq!(Lang::detect_from_locale(Some("TR")), Lang::Tr);
        assert_eq!(Lang::detect_from_locale(Some("en-US")), Lang::En);
        assert_eq!(Lang::detect_from_locale(Some("de")), Lang::En);
        assert_eq!(Lang::detect_from_locale(Some("t")), Lang::En);
        assert_eq!(Lang::detect_from_locale(None), Lang::En);
    }
}
