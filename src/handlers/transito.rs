// src/handlers/transito.rs

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
    models::remitos::ResumenTransito,
};

// GET /api/transito/resumen
#[utoipa::path(
    get,
    path = "/api/transito/resumen",
    tag = "Transito",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Remitos activos en tránsito", body = ResumenTransito),
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

    let datos = estado
        .transito_service
        .resumen(params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(datos)))
}
