// src/handlers/lotes.rs

use axum::{
    extract::{Path, Query, State},
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
    handlers::params::{parsear_tipos, ParametrosPeriodo},
    middleware::i18n::Locale,
    models::lotes::{Lote, ResumenLotes},
};

// Los lotes son una foto del presente: acá no hay ventana de fechas que
// filtrar, solo planta y productos.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParametrosLotes {
    /// Planta exacta
    #[validate(length(min = 1, message = "La planta no puede ser vacía."))]
    pub planta: Option<String>,
    /// Productos separados por comas
    pub tipos: Option<String>,
}

// GET /api/lotes/resumen
#[utoipa::path(
    get,
    path = "/api/lotes/resumen",
    tag = "Lotes",
    params(ParametrosLotes),
    responses(
        (status = 200, description = "Conteo de lotes por estado", body = ResumenLotes),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_resumen(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosLotes>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let tipos = parsear_tipos(params.tipos.as_deref());
    let resumen = estado
        .lotes_service
        .resumen(params.planta.as_deref(), tipos.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(resumen)))
}

// GET /api/lotes/detalle
#[utoipa::path(
    get,
    path = "/api/lotes/detalle",
    tag = "Lotes",
    params(ParametrosLotes),
    responses(
        (status = 200, description = "Listado de lotes filtrado", body = Vec<Lote>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_detalle(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosLotes>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let tipos = parsear_tipos(params.tipos.as_deref());
    let lotes = estado
        .lotes_service
        .detalle(params.planta.as_deref(), tipos.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(lotes)))
}

// GET /api/lotes/despacho
#[utoipa::path(
    get,
    path = "/api/lotes/despacho",
    tag = "Lotes",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Lotes finalizados y estibados, listos para despachar", body = Vec<Lote>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_en_despacho(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let lotes = estado
        .lotes_service
        .en_despacho(params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(lotes)))
}

// GET /api/lotes/{lote}
#[utoipa::path(
    get,
    path = "/api/lotes/{lote}",
    tag = "Lotes",
    params(("lote" = String, Path, description = "Código del lote (p. ej. L-0001)")),
    responses(
        (status = 200, description = "Detalle de un lote", body = Lote),
        (status = 404, description = "Lote no encontrado")
    )
)]
pub async fn get_por_codigo(
    State(estado): State<AppState>,
    locale: Locale,
    Path(codigo): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let lote = estado
        .lotes_service
        .por_codigo(&codigo)
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(lote)))
}
