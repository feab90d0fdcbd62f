// src/models/produccion.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- 1. Movimientos de producción ---
// Los campos conservan los nombres del sistema de planta (PRODUCCION):
// así los registros viajan al front tal cual salen del origen.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Movimiento {
    Alta,
    Descarga,
    Baja,
    Traslado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Objeto {
    Bolsones,
    Silo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovimientoProduccion {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "MOVIMIENTO")]
    pub movimiento: Movimiento,
    #[serde(rename = "ORIGEN")]
    pub origen: String,
    #[serde(rename = "DESTINO")]
    pub destino: String,
    #[serde(rename = "TIPO")]
    pub tipo: String,
    // Invariante del origen de datos: PESO >= 0.
    #[serde(rename = "PESO")]
    pub peso: Decimal,
    #[serde(rename = "DATE_TIME")]
    pub fecha: NaiveDateTime,
    #[serde(rename = "OBJETO")]
    pub objeto: Objeto,
    #[serde(rename = "STORE")]
    pub planta: String,
    #[serde(rename = "IDPROD", default, skip_serializing_if = "Option::is_none")]
    pub id_prod: Option<String>,
    #[serde(rename = "LOTE", default, skip_serializing_if = "Option::is_none")]
    pub lote: Option<String>,
}

// --- 2. Agregados ---

/// Producción de bolsones partida en interno/externo.
/// Invariante: interno + externo = total, para cualquier colección de entrada.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProduccionBolsones {
    pub interno: Decimal,
    pub externo: Decimal,
    pub total: Decimal,
}

/// Balance del silo en la ventana consultada.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatosSilo {
    pub saldo: Decimal,
    pub ingresos: Decimal,
    pub egresos: Decimal,
}
