// src/handlers/stock.rs

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    handlers::params::ParametrosPeriodo,
    middleware::i18n::Locale,
    models::produccion::DatosSilo,
    services::fechas,
};

// GET /api/stock/depositos
#[utoipa::path(
    get,
    path = "/api/stock/depositos",
    tag = "Stock",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Stock por depósito escalado por planta", body = BTreeMap<String, Decimal>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_depositos(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let stock = estado
        .stock_service
        .por_deposito(params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(stock)))
}

// GET /api/stock/silo
#[utoipa::path(
    get,
    path = "/api/stock/silo",
    tag = "Stock",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Balance del silo en el período", body = DatosSilo),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_silo(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let datos = estado
        .stock_service
        .silo(&rangos.actual)
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(datos)))
}
