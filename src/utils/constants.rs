/// Ruta base de los recursos de contenido
/// Configurada en tiempo de compilación:
/// - Por defecto: rutas relativas a la página (sitio estático)
/// - Otra base via CONTENT_BASE env var (p.ej. un CDN)
pub const CONTENT_BASE: &str = match option_env!("CONTENT_BASE") {
    Some(base) => base,
    None => "",
};

/// Clave de localStorage con la preferencia de idioma ("en" | "tr")
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Directorio de imágenes adjuntas a las condolencias
pub const CONDOLENCE_IMAGE_DIR: &str = "images/condolences";

/// Umbral de truncado de mensajes, en caracteres.
/// Aproximación de ~4 líneas de texto; heurística fija, independiente del
/// ancho del contenedor.
pub const MESSAGE_TRUNCATE_CHARS: usize = 300;
