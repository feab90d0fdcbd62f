// src/handlers/produccion.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::params::parsear_tipos,
    middleware::i18n::Locale,
    models::{
        filtros::{Comparativa, Periodo},
        produccion::ProduccionBolsones,
    },
    services::fechas,
};

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParametrosProduccion {
    /// Período del tablero (HOY si no se manda)
    #[serde(default)]
    pub periodo: Periodo,
    /// Planta exacta
    #[validate(length(min = 1, message = "La planta no puede ser vacía."))]
    pub planta: Option<String>,
    /// Tipos de producto separados por comas (CANCHADA,DESPALILLADA)
    pub tipos: Option<String>,
    /// Origen exacto del alta
    #[validate(length(min = 1, message = "El origen no puede ser vacío."))]
    pub origen: Option<String>,
}

// GET /api/produccion/bolsones
#[utoipa::path(
    get,
    path = "/api/produccion/bolsones",
    tag = "Produccion",
    params(ParametrosProduccion),
    responses(
        (status = 200, description = "Producción de bolsones partida en interno/externo, con comparativa", body = Comparativa<ProduccionBolsones>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_bolsones(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosProduccion>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let tipos = parsear_tipos(params.tipos.as_deref());
    let datos = estado
        .produccion_service
        .bolsones(
            &rangos,
            params.planta.as_deref(),
            tipos.as_deref(),
            params.origen.as_deref(),
        )
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(datos)))
}
