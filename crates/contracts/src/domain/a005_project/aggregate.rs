use crate::domain::common::{ApiResource, ResourceId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intake state of a network deployment project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Radicado,
    EnRevision,
    Aprobado,
    Rechazado,
}

impl ProjectStatus {
    pub fn all() -> [ProjectStatus; 4] {
        [
            ProjectStatus::Radicado,
            ProjectStatus::EnRevision,
            ProjectStatus::Aprobado,
            ProjectStatus::Rechazado,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Radicado => "Radicado",
            ProjectStatus::EnRevision => "En revisión",
            ProjectStatus::Aprobado => "Aprobado",
            ProjectStatus::Rechazado => "Rechazado",
        }
    }

    /// No further changes once decided
    pub fn is_final(&self) -> bool {
        matches!(self, ProjectStatus::Aprobado | ProjectStatus::Rechazado)
    }
}

/// Project submitted by a cable operator to deploy on the poles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectIntake {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "operador", default)]
    pub cable_operator: Option<ResourceId>,

    #[serde(rename = "fecha_radicacion", default)]
    pub filed_on: Option<NaiveDate>,

    #[serde(rename = "estado", default)]
    pub status: ProjectStatus,

    #[serde(rename = "cantidad_postes", default)]
    pub pole_count: u32,
}

impl ProjectIntake {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("El nombre del proyecto es obligatorio".into());
        }
        if self.cable_operator.is_none() {
            return Err("Seleccione un operador".into());
        }
        if self.filed_on.is_none() {
            return Err("La fecha de radicación es obligatoria".into());
        }
        Ok(())
    }
}

impl ApiResource for ProjectIntake {
    fn id(&self) -> Option<ResourceId> {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.status.label().to_string()]
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn resource_path() -> &'static str {
        "proyectos"
    }

    fn element_name() -> &'static str {
        "Proyecto"
    }

    fn list_name() -> &'static str {
        "Proyectos"
    }
}
