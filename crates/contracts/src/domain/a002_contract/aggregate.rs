use super::window::{self, ContractStatus, ContractWindow};
use crate::domain::common::{ApiResource, ResourceId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Usage of one element type on the leased poles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementUsage {
    /// Number of installed elements
    #[serde(default)]
    pub cantidad: u32,
    /// Monthly fee per element, in pesos
    #[serde(default)]
    pub tarifa: u64,
}

impl ElementUsage {
    /// Saturates at `u64::MAX`
    pub fn monthly_total(&self) -> u64 {
        u64::from(self.cantidad).saturating_mul(self.tarifa)
    }
}

/// Pole attachment contract with a cable operator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(rename = "operador", default)]
    pub cable_operator: Option<ResourceId>,

    #[serde(rename = "numero", default)]
    pub number: String,

    #[serde(rename = "fecha_inicio", default)]
    pub start_date: Option<NaiveDate>,

    #[serde(rename = "duracion_anos", default)]
    pub duration_years: u32,

    #[serde(rename = "fecha_fin", default)]
    pub end_date: Option<NaiveDate>,

    /// Status label as stored by the backend ("Vigente" / "Vencido")
    #[serde(rename = "estado", default)]
    pub status: String,

    #[serde(default)]
    pub nap: ElementUsage,
    #[serde(default)]
    pub cable: ElementUsage,
    #[serde(default)]
    pub caja_empalme: ElementUsage,
    #[serde(default)]
    pub reserva: ElementUsage,
}

impl Contract {
    pub fn window(&self) -> Option<ContractWindow> {
        self.start_date
            .map(|start| ContractWindow::new(start, self.duration_years))
    }

    /// End date implied by start date and duration
    pub fn derived_end_date(&self) -> Option<NaiveDate> {
        self.window().and_then(|w| w.end_date())
    }

    /// Status on `today` from the stored start and end dates
    pub fn status_at(&self, today: NaiveDate) -> Option<ContractStatus> {
        window::status_at(today, self.start_date, self.end_date)
    }

    /// Sum of all usage blocks
    pub fn monthly_total(&self) -> u64 {
        [self.nap, self.cable, self.caja_empalme, self.reserva]
            .iter()
            .map(ElementUsage::monthly_total)
            .fold(0, u64::saturating_add)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cable_operator.is_none() {
            return Err("Seleccione un operador".into());
        }
        if self.start_date.is_none() {
            return Err("La fecha de inicio es obligatoria".into());
        }
        if self.duration_years == 0 {
            return Err("La duración debe ser de al menos un año".into());
        }
        if self.end_date.is_some() && self.end_date != self.derived_end_date() {
            return Err("La fecha de fin no corresponde a la duración".into());
        }
        Ok(())
    }
}

impl ApiResource for Contract {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn display_name(&self) -> String {
        if self.number.is_empty() {
            format!("Contrato #{}", self.id.unwrap_or_default())
        } else {
            self.number.clone()
        }
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.number.clone(), self.status.clone()]
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn resource_path() -> &'static str {
        "contratos"
    }

    fn element_name() -> &'static str {
        "Contrato"
    }

    fn list_name() -> &'static str {
        "Contratos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let raw = r#"{
            "id": 12,
            "operador": 3,
            "numero": "CT-2024-012",
            "fecha_inicio": "2024-02-29",
            "duracion_anos": 1,
            "fecha_fin": "2025-03-01",
            "estado": "Vigente",
            "nap": {"cantidad": 10, "tarifa": 3500},
            "cable": {"cantidad": 120, "tarifa": 1200}
        }"#;
        let c: Contract = serde_json::from_str(raw).unwrap();
        assert_eq!(c.start_date, Some(d("2024-02-29")));
        assert_eq!(c.derived_end_date(), Some(d("2025-03-01")));
        assert_eq!(c.caja_empalme, ElementUsage::default());
        assert_eq!(c.monthly_total(), 10 * 3500 + 120 * 1200);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_monthly_total_saturates() {
        let huge = ElementUsage {
            cantidad: u32::MAX,
            tarifa: u64::MAX / 2,
        };
        assert_eq!(huge.monthly_total(), u64::MAX);

        let c = Contract {
            nap: ElementUsage {
                cantidad: 1,
                tarifa: u64::MAX - 10,
            },
            cable: ElementUsage {
                cantidad: 1,
                tarifa: 20,
            },
            ..Default::default()
        };
        assert_eq!(c.monthly_total(), u64::MAX);
    }

    #[test]
    fn test_serializes_dates_as_backend_strings() {
        let c = Contract {
            start_date: Some(d("2023-03-15")),
            end_date: Some(d("2025-03-15")),
            duration_years: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["fecha_inicio"], "2023-03-15");
        assert_eq!(json["fecha_fin"], "2025-03-15");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_validate_rejects_inconsistent_end() {
        let c = Contract {
            cable_operator: Some(1),
            start_date: Some(d("2023-03-15")),
            duration_years: 2,
            end_date: Some(d("2024-03-15")),
            ..Default::default()
        };
        assert_eq!(
            c.validate().unwrap_err(),
            "La fecha de fin no corresponde a la duración"
        );
    }

    #[test]
    fn test_status_uses_stored_dates() {
        let c = Contract {
            start_date: Some(d("2025-01-01")),
            end_date: Some(d("2025-06-15")),
            ..Default::default()
        };
        assert_eq!(c.status_at(d("2025-06-15")), Some(ContractStatus::Expired));
        assert_eq!(Contract::default().status_at(d("2025-06-15")), None);
    }
}
