// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Extractor de idioma. La planta habla castellano, así que "es" es el
// default; el front en inglés manda Accept-Language: en.
pub struct Locale(pub String);

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let idioma_default = "es".to_string();

        let idioma = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|valor| valor.to_str().ok())
            .and_then(|encabezado| {
                accept_language::parse(encabezado)
                    .first()
                    .map(|etiqueta| {
                        // "es-AR" -> "es"; "en" -> "en"
                        etiqueta.split('-').next().unwrap_or(etiqueta).to_string()
                    })
            })
            .unwrap_or(idioma_default);

        Ok(Locale(idioma))
    }
}
