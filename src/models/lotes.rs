// src/models/lotes.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use rust_decimal::Decimal;

// --- 1. Lotes abiertos (LOTESABIERTOS) ---
// El estado lo maneja el sistema de trazabilidad aguas arriba; acá solo
// contamos la foto actual, sin validar transiciones.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum EstadoLote {
    #[serde(rename = "ABIERTO")]
    Abierto,
    #[serde(rename = "EN PROCESO")]
    EnProceso,
    #[serde(rename = "FINALIZADO")]
    Finalizado,
    #[serde(rename = "OBSERVACIÓN")]
    Observacion,
    #[serde(rename = "DESPACHADO")]
    Despachado,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Lote {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "LOTE")]
    pub lote: String,
    #[serde(rename = "ESTADO")]
    pub estado: EstadoLote,
    #[serde(rename = "PRODUCTO")]
    pub producto: String,
    #[serde(rename = "NPALLETS")]
    pub pallets: u32,
    #[serde(rename = "NBOLSAS")]
    pub bolsas: u32,
    #[serde(rename = "KGBOLSAS")]
    pub kg_bolsas: Decimal,
    #[serde(rename = "TOTALKG")]
    pub total_kg: Decimal,
    #[serde(rename = "LABORATORIO")]
    pub laboratorio: String,
    #[serde(rename = "ETIQUETAS")]
    pub etiquetas: String,
    #[serde(rename = "ESTIBADO")]
    pub estibado: String,
    #[serde(rename = "DESPACHADO")]
    pub despachado: String,
    #[serde(rename = "NEXPORT")]
    pub n_export: String,
    #[serde(rename = "CLIENTE")]
    pub cliente: String,
    #[serde(rename = "STORE")]
    pub planta: String,
}

impl Lote {
    /// Un lote cuenta como estibado si el campo trae algo más que espacios.
    pub fn esta_estibado(&self) -> bool {
        !self.estibado.trim().is_empty()
    }
}

// --- 2. Resumen por estado ---
// Se desglosan los cinco estados para que la suma de los contadores
// siempre dé `total`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenLotes {
    pub abiertos: u64,
    pub en_proceso: u64,
    pub finalizados: u64,
    pub en_observacion: u64,
    pub despachados: u64,
    pub total: u64,
}
