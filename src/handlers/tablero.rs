// src/handlers/tablero.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::params::ParametrosPeriodo,
    middleware::i18n::Locale,
    models::{filtros::RangoComparativo, tablero::ResumenTablero},
    services::fechas,
};

// GET /api/tablero/rango
#[utoipa::path(
    get,
    path = "/api/tablero/rango",
    tag = "Tablero",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Ventanas actual y anterior del período", body = RangoComparativo),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_rango(
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());

    Ok((StatusCode::OK, Json(rangos)))
}

// GET /api/tablero/resumen
#[utoipa::path(
    get,
    path = "/api/tablero/resumen",
    tag = "Tablero",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Vista combinada de la página principal", body = ResumenTablero),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_resumen(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let resumen = estado
        .tablero_service
        .resumen(&rangos, params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(resumen)))
}
