// src/models/filtros.rs

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- 1. Período del tablero ---
// El período llega como parámetro de query y se deserializa a este enum
// cerrado: un valor desconocido es un 400, nunca un default silencioso.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Periodo {
    #[default]
    Hoy,
    Semana,
    Mes,
    Zafra,
}

// --- 2. Ventana de fechas ---
// Invariante: desde <= hasta. La etiqueta es la que muestra el front
// ("Hoy", "Semana anterior", etc.).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangoFechas {
    pub desde: NaiveDateTime,
    pub hasta: NaiveDateTime,
    pub etiqueta: String,
}

impl RangoFechas {
    pub fn nuevo(desde: NaiveDateTime, hasta: NaiveDateTime, etiqueta: &str) -> Self {
        Self {
            desde,
            hasta,
            etiqueta: etiqueta.to_string(),
        }
    }

    /// Pertenencia inclusiva en ambos extremos.
    pub fn contiene(&self, instante: NaiveDateTime) -> bool {
        self.desde <= instante && instante <= self.hasta
    }
}

// --- 3. Par de ventanas actual/anterior ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RangoComparativo {
    pub actual: RangoFechas,
    pub anterior: RangoFechas,
}

// --- 4. Resultado comparativo genérico ---
// Invariantes: variacion = total actual - total anterior;
// variacionPct = anterior > 0 ? variacion / anterior * 100 : 0.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comparativa<T> {
    pub actual: T,
    pub anterior: T,
    pub variacion: Decimal,
    pub variacion_pct: Decimal,
}

impl<T> Comparativa<T> {
    /// Arma la comparativa a partir de los dos resultados y sus totales.
    pub fn nueva(actual: T, anterior: T, total_actual: Decimal, total_anterior: Decimal) -> Self {
        let variacion = total_actual - total_anterior;
        let variacion_pct = if total_anterior > Decimal::ZERO {
            (variacion / total_anterior * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        Self {
            actual,
            anterior,
            variacion,
            variacion_pct,
        }
    }
}
