// ============================================================================
// APP - Arranque de los dos subsistemas de la página
// ============================================================================
// Los dos subsistemas son independientes: el switcher de idioma y el
// renderer de condolencias. Ambos corren una vez al cargar la página y
// después solo reaccionan a eventos del usuario.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::query_selector;
use crate::services::ContentClient;
use crate::viewmodels::LanguageSwitcher;
use crate::views::image_viewer;
use crate::views::{render_condolences, render_load_error};

/// Selector del contenedor de condolencias
const CONDOLENCES_CONTAINER: &str = ".condolences-container";

/// Aplicación principal
pub struct App {
    switcher: LanguageSwitcher,
    client: ContentClient,
}

impl App {
    pub fn new() -> Self {
        Self {
            switcher: LanguageSwitcher::new(),
            client: ContentClient::new(),
        }
    }

    /// Switcher de idioma de la sesión (para los exports JS)
    pub fn switcher(&self) -> &LanguageSwitcher {
        &self.switcher
    }

    /// Inicializar ambos subsistemas
    pub fn run(&self) -> Result<(), JsValue> {
        self.start_language_switcher();
        image_viewer::bind_backdrop_close()?;
        self.start_condolence_renderer();
        Ok(())
    }

    /// Sistema de idioma: resolver inicial → vincular controles → cargar y
    /// aplicar el documento. Si la carga inicial falla, la página conserva
    /// el texto estático del markup.
    fn start_language_switcher(&self) {
        let switcher = self.switcher.clone();
        spawn_local(async move {
            if let Err(e) = switcher.init().await {
                log::error!("❌ Error inicializando sistema de idioma: {:?}", e);
            }
        });
    }

    /// Condolencias: fetch → ordenar → renderizar tarjetas.
    /// Cualquier fallo reemplaza el contenedor con un mensaje inerte.
    fn start_condolence_renderer(&self) {
        let client = self.client.clone();
        spawn_local(async move {
            let container = match query_selector(CONDOLENCES_CONTAINER) {
                Ok(Some(el)) => el,
                // Página sin sección de condolencias: nada que hacer
                _ => return,
            };

            match client.fetch_condolences().await {
                Ok(entries) => {
                    if let Err(e) = render_condolences(&container, entries) {
                        log::error!("❌ Error renderizando condolencias: {:?}", e);
                        render_load_error(&container);
                    }
                }
                Err(e) => {
                    log::error!("❌ Error cargando condolencias: {}", e);
                    render_load_error(&container);
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
