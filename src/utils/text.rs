// ============================================================================
// TEXT HELPERS - Escapado y formato de texto de usuario
// ============================================================================
// Todo texto enviado por visitantes pasa por escape_html antes de insertarse
// con inner_html. El escapado ocurre SIEMPRE antes de nl2br, para que ningún
// markup inyectado sobreviva la conversión de saltos de línea.
// ============================================================================

/// Escapar texto para que nunca se interprete como markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapar y convertir saltos de línea (\r\n, \n, \r) en <br>
pub fn nl2br(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
        .replace('\r', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutraliza_script() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_ampersand_primero() {
        // El & se escapa sin re-escapar las entidades generadas
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
    }

    #[test]
    fn test_nl2br_convierte_todos_los_saltos() {
        assert_eq!(nl2br("a\r\nb\nc\rd"), "a<br>b<br>c<br>d");
    }

    #[test]
    fn test_nl2br_escapa_antes_de_convertir() {
        // Un <br> literal en el mensaje no debe sobrevivir como markup
        assert_eq!(nl2br("hola<br>\nmundo"), "hola&lt;br&gt;<br>mundo");
    }
}
