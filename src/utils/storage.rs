use web_sys::{window, Storage};

use crate::models::Lang;
use crate::utils::constants::PREFERRED_LANGUAGE_KEY;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Leer la preferencia de idioma persistida, tal cual está almacenada.
/// La validación del valor es responsabilidad del caller.
pub fn load_language_preference() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(PREFERRED_LANGUAGE_KEY).ok()?
}

/// Persistir la preferencia de idioma
pub fn save_language_preference(lang: Lang) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(PREFERRED_LANGUAGE_KEY, lang.as_str())
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}
