// src/models/tablero.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    filtros::{Comparativa, RangoFechas},
    lotes::ResumenLotes,
    produccion::ProduccionBolsones,
};

/// La vista combinada que alimenta la página principal del tablero.
/// La hoja verde viaja solo como totales: los registros completos se piden
/// por el endpoint de báscula.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenTablero {
    pub rango: RangoFechas,
    pub produccion: Comparativa<ProduccionBolsones>,
    pub hoja_verde: Comparativa<Decimal>,
    pub lotes: ResumenLotes,
    pub stock: BTreeMap<String, Decimal>,
}
