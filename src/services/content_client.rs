// ============================================================================
// CONTENT CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests GET a los recursos estáticos
// del sitio (documentos de traducción y lista de condolencias).
// ============================================================================

use gloo_net::http::Request;

use crate::models::{CondolenceEntry, Lang, TranslationDocument};
use crate::utils::constants::CONTENT_BASE;

/// Fuente de documentos de traducción. Seam de testeo: en producción la
/// implementa ContentClient contra los recursos estáticos del sitio.
pub trait TranslationSource {
    async fn fetch_translations(&self, lang: Lang) -> Result<TranslationDocument, String>;
}

/// Cliente de contenido estático - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ContentClient {
    base_url: String,
}

impl ContentClient {
    pub fn new() -> Self {
        Self {
            base_url: CONTENT_BASE.to_string(),
        }
    }

    /// Cargar la lista de condolencias
    pub async fn fetch_condolences(&self) -> Result<Vec<CondolenceEntry>, String> {
        let url = format!("{}content/condolences.json", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let entries = response
            .json::<Vec<CondolenceEntry>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("💬 Condolencias cargadas: {} entradas", entries.len());

        Ok(entries)
    }
}

impl TranslationSource for ContentClient {
    /// Cargar el documento de traducciones de un idioma
    async fn fetch_translations(&self, lang: Lang) -> Result<TranslationDocument, String> {
        let url = format!("{}content/{}.json", self.base_url, lang.as_str());

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<TranslationDocument>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ContentClient {
    fn default() -> Self {
        Self::new()
    }
}
