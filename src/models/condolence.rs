// ============================================================================
// CONDOLENCE ENTRY - Mensaje de condolencia enviado por un visitante
// ============================================================================

use chrono::NaiveDate;
use serde::Deserialize;

/// Entrada de condolencia cargada desde content/condolences.json
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CondolenceEntry {
    pub name: String,
    pub message: String,
    pub created_date: NaiveDate,
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializar_entrada_completa() {
        let json = r#"{
            "name": "Ayşe",
            "message": "Başınız sağolsun.",
            "created_date": "2024-03-01",
            "image": "ayse.jpg"
        }"#;
        let entry: CondolenceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "Ayşe");
        assert_eq!(entry.created_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(entry.image.as_deref(), Some("ayse.jpg"));
    }

    #[test]
    fn test_imagen_es_opcional() {
        let json = r#"{
            "name": "John",
            "message": "Rest in peace.",
            "created_date": "2024-01-15"
        }"#;
        let entry: CondolenceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.image, None);
    }
}
