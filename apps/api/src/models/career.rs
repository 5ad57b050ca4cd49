use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::resolver::LevelSchedule;

/// Row from `carrera` joined with `perfil_profesional`. Cost columns are
/// selected as text so the prompt relays them verbatim.
#[derive(Debug, Clone, FromRow)]
pub struct CareerRow {
    pub id_carrera: i32,
    pub nombre: String,
    pub modalidad: Option<String>,
    pub semestres: Option<i32>,
    pub inscripcion: Option<String>,
    pub pre: Option<String>,
    pub matricula: Option<String>,
    pub cuotas_mensuales: Option<String>,
    pub descripcion: Option<String>,
}

/// Document metadata relayed in chat responses and listed in prompts. The
/// bytes themselves are only streamed by the documents endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DocumentSummary {
    pub id: i32,
    pub nombre: Option<String>,
    pub fecha_upload: DateTime<Utc>,
}

/// Everything the prompt builder needs about one program.
#[derive(Debug, Clone)]
pub struct CareerInfo {
    pub row: CareerRow,
    pub documentos: Vec<DocumentSummary>,
    pub horarios: Vec<LevelSchedule>,
}
