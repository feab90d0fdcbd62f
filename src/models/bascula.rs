// src/models/bascula.rs

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- 1. Tickets de báscula (REGISTROSBASCULA) ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegistroBascula {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "FECHA")]
    pub fecha: NaiveDateTime,
    #[serde(rename = "TICNUM")]
    pub ticket: String,
    #[serde(rename = "PROVEEDOR")]
    pub proveedor: String,
    #[serde(rename = "PRODUCTO")]
    pub producto: String,
    #[serde(rename = "NETO")]
    pub neto: Decimal,
    #[serde(rename = "DESTINO")]
    pub destino: String,
    #[serde(rename = "PATENTE")]
    pub patente: String,
    #[serde(rename = "CHOFER")]
    pub chofer: String,
}

// --- 2. Agregados ---

/// Ingreso de hoja verde por báscula en la ventana consultada.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenHojaVerde {
    pub total: Decimal,
    pub registros: Vec<RegistroBascula>,
}

/// Desglose de báscula por proveedor y por producto.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumenBascula {
    pub total: Decimal,
    pub por_proveedor: BTreeMap<String, Decimal>,
    pub por_producto: BTreeMap<String, Decimal>,
    pub registros: Vec<RegistroBascula>,
}

/// Una entrada del ranking de proveedores. Se devuelve como lista y no como
/// mapa para conservar el orden descendente del ranking.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RendimientoProveedor {
    pub proveedor: String,
    pub total: Decimal,
}
