// src/handlers/bascula.rs

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
    handlers::params::ParametrosPeriodo,
    middleware::i18n::Locale,
    models::{
        bascula::{ResumenBascula, ResumenHojaVerde},
        filtros::{Comparativa, Periodo},
    },
    services::fechas,
};

// GET /api/bascula/hoja-verde
#[utoipa::path(
    get,
    path = "/api/bascula/hoja-verde",
    tag = "Bascula",
    params(ParametrosPeriodo),
    responses(
        (status = 200, description = "Ingreso de hoja verde con comparativa contra el período anterior", body = Comparativa<ResumenHojaVerde>),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_hoja_verde(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosPeriodo>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let datos = estado
        .bascula_service
        .hoja_verde(&rangos, params.planta.as_deref())
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(datos)))
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParametrosResumenBascula {
    /// Período del tablero (HOY si no se manda)
    #[serde(default)]
    pub periodo: Periodo,
    /// Planta exacta
    #[validate(length(min = 1, message = "La planta no puede ser vacía."))]
    pub planta: Option<String>,
    /// Producto exacto del ticket
    #[validate(length(min = 1, message = "El producto no puede ser vacío."))]
    pub producto: Option<String>,
    /// Proveedor exacto del ticket
    #[validate(length(min = 1, message = "El proveedor no puede ser vacío."))]
    pub proveedor: Option<String>,
}

// GET /api/bascula/resumen
#[utoipa::path(
    get,
    path = "/api/bascula/resumen",
    tag = "Bascula",
    params(ParametrosResumenBascula),
    responses(
        (status = 200, description = "Tickets del período desglosados por proveedor y producto", body = ResumenBascula),
        (status = 400, description = "Parámetros inválidos")
    )
)]
pub async fn get_resumen(
    State(estado): State<AppState>,
    locale: Locale,
    Query(params): Query<ParametrosResumenBascula>,
) -> Result<impl IntoResponse, ApiError> {
    params
        .validate()
        .map_err(|e| AppError::from(e).a_api_error(&locale))?;

    let rangos = fechas::resolver_rango(params.periodo, fechas::ahora());
    let datos = estado
        .bascula_service
        .resumen(
            &rangos.actual,
            params.planta.as_deref(),
            params.producto.as_deref(),
            params.proveedor.as_deref(),
        )
        .await
        .map_err(|e| e.a_api_error(&locale))?;

    Ok((StatusCode::OK, Json(datos)))
}
