use crate::domain::common::{ApiResource, ResourceId};
use serde::{Deserialize, Serialize};

/// Cable operator leasing space on the pole infrastructure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CableOperator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Tax ID
    pub nit: String,

    #[serde(default)]
    pub email: String,

    #[serde(rename = "telefono", default)]
    pub phone: String,

    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl CableOperator {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre es obligatorio".into());
        }
        if self.nit.trim().is_empty() {
            return Err("El NIT es obligatorio".into());
        }
        // NIT: digits, optionally with a verification digit after '-'
        let valid_nit = self
            .nit
            .trim()
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '.');
        if !valid_nit {
            return Err("El NIT solo puede contener dígitos, '.' y '-'".into());
        }
        Ok(())
    }
}

impl ApiResource for CableOperator {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.nit.clone(), self.email.clone()]
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn resource_path() -> &'static str {
        "operadores"
    }

    fn element_name() -> &'static str {
        "Operador"
    }

    fn list_name() -> &'static str {
        "Operadores"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> CableOperator {
        CableOperator {
            id: Some(7),
            name: "Cablevisión del Norte".into(),
            nit: "900.123.456-7".into(),
            email: "contacto@cvnorte.co".into(),
            phone: String::new(),
            active: true,
        }
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(operator()).unwrap();
        assert_eq!(json["nombre"], "Cablevisión del Norte");
        assert_eq!(json["activo"], true);

        let parsed: CableOperator =
            serde_json::from_str(r#"{"id": 3, "nombre": "X", "nit": "1"}"#).unwrap();
        assert!(parsed.active);
        assert_eq!(parsed.id, Some(3));
    }

    #[test]
    fn test_validate() {
        assert!(operator().validate().is_ok());

        let mut op = operator();
        op.nit = "ABC".into();
        assert!(op.validate().is_err());

        op.name = " ".into();
        assert_eq!(op.validate().unwrap_err(), "El nombre es obligatorio");
    }

    #[test]
    fn test_matches_filter() {
        let op = operator();
        assert!(op.matches_filter("norte"));
        assert!(op.matches_filter("900.123"));
        assert!(op.matches_filter(""));
        assert!(!op.matches_filter("telecable"));
    }
}
