use crate::domain::common::{ApiResource, ResourceId};
use serde::{Deserialize, Serialize};

/// Utility pole with its map position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "latitud")]
    pub latitude: f64,

    #[serde(rename = "longitud")]
    pub longitude: f64,

    #[serde(rename = "altura_m", default)]
    pub height_m: u32,

    /// Owning utility
    #[serde(rename = "propietario", default)]
    pub owner: String,
}

impl Pole {
    /// `(lat, lng)` pair for the map layer
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("El código del poste es obligatorio".into());
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err("La latitud debe estar entre -90 y 90".into());
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err("La longitud debe estar entre -180 y 180".into());
        }
        Ok(())
    }
}

impl ApiResource for Pole {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn display_name(&self) -> String {
        self.code.clone()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.code.clone(), self.owner.clone()]
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn resource_path() -> &'static str {
        "postes"
    }

    fn element_name() -> &'static str {
        "Poste"
    }

    fn list_name() -> &'static str {
        "Postes"
    }
}
