// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::middleware::i18n::Locale;

// El tipo de error interno, con `thiserror` para mejor ergonomía.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de validación")]
    Validacion(#[from] validator::ValidationErrors),

    #[error("Lote no encontrado")]
    LoteNoEncontrado,

    // Variante genérica para cualquier otro error inesperado.
    // `anyhow::Error` captura el contexto completo.
    #[error("Error interno del servidor")]
    Interno(#[from] anyhow::Error),
}

impl AppError {
    /// Convierte el error interno en la respuesta que ve el cliente, con el
    /// mensaje en el idioma del header Accept-Language (es por defecto).
    pub fn a_api_error(&self, locale: &Locale) -> ApiError {
        match self {
            // Se devuelven todos los detalles de la validación, campo por campo.
            AppError::Validacion(errores) => {
                let mut detalles = std::collections::HashMap::new();
                for (campo, errores_de_campo) in errores.field_errors() {
                    let mensajes: Vec<String> = errores_de_campo
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    detalles.insert(campo.to_string(), mensajes);
                }
                ApiError {
                    status: StatusCode::BAD_REQUEST,
                    cuerpo: json!({
                        "error": t(locale, "Uno o más parámetros son inválidos.", "One or more parameters are invalid."),
                        "details": detalles,
                    }),
                }
            }

            AppError::LoteNoEncontrado => ApiError {
                status: StatusCode::NOT_FOUND,
                cuerpo: json!({
                    "error": t(locale, "Lote no encontrado.", "Lot not found."),
                }),
            },

            // Todo lo demás es un 500. El detalle queda en el log, nunca en
            // la respuesta.
            AppError::Interno(e) => {
                tracing::error!("Error interno del servidor: {e:?}");
                ApiError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    cuerpo: json!({
                        "error": t(locale, "Ocurrió un error inesperado.", "An unexpected error occurred."),
                    }),
                }
            }
        }
    }
}

/// La respuesta de error ya resuelta: status + cuerpo JSON `{ "error": ... }`.
pub struct ApiError {
    status: StatusCode,
    cuerpo: serde_json::Value,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.cuerpo)).into_response()
    }
}

fn t<'a>(locale: &Locale, es: &'a str, en: &'a str) -> &'a str {
    if locale.0 == "en" { en } else { es }
}
