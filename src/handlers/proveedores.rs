// src/handlers/proveedores.rs

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
    models::bascula::RendimientoProveedor,
    services::fechas,
};

// GET /api/proveedores/rendimiento
#[utoipa::path(
    get,
    path = "/api/proveedores/rendimiento",
    tag = "Proveedores",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Ranking de proveedores por kilos entregados (top 10)", body = Vec<RendimientoProveedor>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_rendimiento(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let ranking = estado
        .bascula_service
        .rendimiento_proveedores(&rangos.actual, params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(ranking)))
}
