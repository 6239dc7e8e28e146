// ============================================================================
// CONDOLENCE VIEWMODEL - Lógica de presentación de condolencias
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use chrono::NaiveDate;

use crate::models::CondolenceEntry;
use crate::utils::constants::MESSAGE_TRUNCATE_CHARS;

/// Estado de presentación de un mensaje largo (sin persistencia entre recargas)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageDisplay {
    Truncated,
    Expanded,
}

impl MessageDisplay {
    pub fn toggled(&self) -> MessageDisplay {
        match self {
            MessageDisplay::Truncated => MessageDisplay::Expanded,
            MessageDisplay::Expanded => MessageDisplay::Truncated,
        }
    }

    /// Clase CSS del párrafo del mensaje
    pub fn message_class(&self) -> &'static str {
        match self {
            MessageDisplay::Truncated => "condolence-message truncated",
            MessageDisplay::Expanded => "condolence-message expanded",
        }
    }

    /// Etiqueta del control de expandir/colapsar
    pub fn control_label(&self) -> &'static str {
        match self {
            MessageDisplay::Truncated => "Read more",
            MessageDisplay::Expanded => "Read less",
        }
    }
}

/// ViewModel de condolencias - SOLO lógica de negocio
pub struct CondolenceViewModel;

impl CondolenceViewModel {
    /// Ordenar por fecha descendente (más recientes primero).
    /// sort_by es estable: entradas con la misma fecha conservan el orden
    /// relativo del recurso.
    pub fn sort_newest_first(entries: &mut [CondolenceEntry]) {
        entries.sort_by(|a, b| b.created_date.cmp(&a.created_date));
    }

    /// ¿El mensaje arranca truncado?
    pub fn needs_truncation(message: &str) -> bool {
        message.chars().count() > MESSAGE_TRUNCATE_CHARS
    }

    /// Formatear fecha para mostrar ("March 1, 2024")
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, date: &str) -> CondolenceEntry {
        CondolenceEntry {
            name: name.to_string(),
            message: "mensaje".to_string(),
            created_date: date.parse().unwrap(),
            image: None,
        }
    }

    #[test]
    fn test_orden_descendente_por_fecha() {
        let mut entries = vec![entry("a", "2024-01-01"), entry("b", "2024-03-01")];
        CondolenceViewModel::sort_newest_first(&mut entries);
        assert_eq!(entries[0].name, "b");
        assert_eq!(entries[1].name, "a");
    }

    #[test]
    fn test_orden_estable_con_fechas_iguales() {
        let mut entries = vec![
            entry("primera", "2024-02-01"),
            entry("segunda", "2024-02-01"),
            entry("vieja", "2023-12-31"),
        ];
        CondolenceViewModel::sort_newest_first(&mut entries);
        // Misma fecha: conservan el orden del recurso
        assert_eq!(entries[0].name, "primera");
        assert_eq!(entries[1].name, "segunda");
        assert_eq!(entries[2].name, "vieja");
    }

    #[test]
    fn test_umbral_de_truncado() {
        assert!(!CondolenceViewModel::needs_truncation(&"x".repeat(300)));
        assert!(CondolenceViewModel::needs_truncation(&"x".repeat(301)));
    }

    #[test]
    fn test_toggle_de_presentacion() {
        let display = MessageDisplay::Truncated;
        assert_eq!(display.control_label(), "Read more");
        assert_eq!(display.message_class(), "condolence-message truncated");

        let expanded = display.toggled();
        assert_eq!(expanded, MessageDisplay::Expanded);
        assert_eq!(expanded.control_label(), "Read less");
        assert_eq!(expanded.message_class(), "condolence-message expanded");

        // Dos toggles vuelven al estado inicial
        assert_eq!(expanded.toggled(), MessageDisplay::Truncated);
    }

    #[test]
    fn test_formato_de_fecha() {
        let date: NaiveDate = "2024-03-01".parse().unwrap();
        assert_eq!(CondolenceViewModel::format_date(date), "March 1, 2024");
    }
}
