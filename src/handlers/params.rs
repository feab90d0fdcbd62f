// src/handlers/params.rs

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::models::filtros::Periodo;

// Los parámetros que comparte casi todo el tablero.
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParametrosPeriodo {
    /// Período del tablero (HOY si no se manda)
    #[serde(default)]
    pub periodo: Periodo,
    /// Planta exacta (GUARANI, PANAMBI, TERCERIZADA 2, TERCERIZADA 3)
    #[validate(length(min = 1, message = "La planta no puede ser vacía."))]
    pub planta: Option<String>,
}

/// Los tipos llegan como lista separada por comas ("CANCHADA,DESPALILLADA").
/// Una lista vacía o de puros espacios equivale a no filtrar.
pub fn parsear_tipos(tipos: Option<&str>) -> Option<Vec<String>> {
    let lista: Vec<String> = tipos?
        .split(',')
        .map(str::trim)
        .filter(|tipo| !tipo.is_empty())
        .map(String::from)
        .collect();

    if lista.is_empty() { None } else { Some(lista) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_la_lista_y_descarta_entradas_vacias() {
        assert_eq!(
            parsear_tipos(Some("CANCHADA, DESPALILLADA ,")),
            Some(vec!["CANCHADA".to_string(), "DESPALILLADA".to_string()])
        );
        assert_eq!(parsear_tipos(Some("  ,  ")), None);
        assert_eq!(parsear_tipos(Some("")), None);
        assert_eq!(parsear_tipos(None), None);
    }
}
