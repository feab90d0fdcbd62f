// src/models/remitos.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- 1. Remitos en tránsito (REMITOSHISTORICOS) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoRemito {
    Activo,
    Aceptado,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Remito {
    #[serde(rename = "ID")]
    pub id: i64,
    // El origen guarda esta fecha en epoch ms.
    #[serde(rename = "FECHAINICIO", with = "chrono::naive::serde::ts_milliseconds")]
    #[schema(value_type = i64)]
    pub fecha_inicio: NaiveDateTime,
    #[serde(rename = "ORIGEN")]
    pub origen: String,
    #[serde(rename = "DESTINO")]
    pub destino: String,
    #[serde(rename = "ESTADO")]
    pub estado: EstadoRemito,
    #[serde(rename = "BOLSON_ID")]
    pub bolson_id: String,
    #[serde(rename = "STORE")]
    pub planta: String,
    #[serde(rename = "PUESTO")]
    pub puesto: String,
}

// --- 2. Agregado ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenTransito {
    pub activos: u64,
    pub total_kg: Decimal,
    pub registros: Vec<Remito>,
}
