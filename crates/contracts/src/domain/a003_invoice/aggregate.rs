use crate::domain::common::{ApiResource, ResourceId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Invoice for one payment period of a contract
///
/// Period bounds travel as backend dates pinned to the first of the month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(rename = "contrato", default)]
    pub contract: Option<ResourceId>,

    #[serde(rename = "numero", default)]
    pub number: String,

    #[serde(rename = "periodo_inicio", default)]
    pub period_start: Option<NaiveDate>,

    #[serde(rename = "periodo_fin", default)]
    pub period_end: Option<NaiveDate>,

    /// Amount in pesos
    #[serde(rename = "valor", default)]
    pub amount: u64,

    #[serde(rename = "pagada", default)]
    pub paid: bool,
}

impl Invoice {
    pub fn validate(&self) -> Result<(), String> {
        if self.contract.is_none() {
            return Err("Seleccione un contrato".into());
        }
        let (Some(start), Some(end)) = (self.period_start, self.period_end) else {
            return Err("El periodo de pago es obligatorio".into());
        };
        if end <= start {
            return Err("El fin del periodo debe ser posterior al inicio".into());
        }
        if self.amount == 0 {
            return Err("El valor debe ser mayor que cero".into());
        }
        Ok(())
    }
}

impl ApiResource for Invoice {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn display_name(&self) -> String {
        self.number.clone()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.number.clone()]
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn resource_path() -> &'static str {
        "facturas"
    }

    fn element_name() -> &'static str {
        "Factura"
    }

    fn list_name() -> &'static str {
        "Facturas"
    }
}
