// src/services/transito_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::RemitosRepository,
    models::remitos::ResumenTransito,
};

#[derive(Clone)]
pub struct TransitoService {
    repo: RemitosRepository,
}

impl TransitoService {
    pub fn new(repo: RemitosRepository) -> Self {
        Self { repo }
    }

    /// Remitos activos en tránsito.
    /// TODO: los kilos por remito salen de una estimación fija de 1000 kg
    /// hasta que el origen exponga el peso real de cada bolsón.
    pub async fn resumen(&self, planta: Option<&str>) -> Result<ResumenTransito, AppError> {
        let registros = self.repo.activos(planta);
        let activos = registros.len() as u64;

        Ok(ResumenTransito {
            activos,
            total_kg: Decimal::from(activos) * Decimal::ONE_THOUSAND,
            registros,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::DateTime;

    use crate::models::remitos::{EstadoRemito, Remito};

    fn remito(id: i64, estado: EstadoRemito, planta: &str) -> Remito {
        Remito {
            id,
            fecha_inicio: DateTime::from_timestamp_millis(1_754_380_800_000)
                .unwrap()
                .naive_utc(),
            origen: "GUARANI".to_string(),
            destino: "PANAMBI".to_string(),
            estado,
            bolson_id: format!("BB-{id}"),
            planta: planta.to_string(),
            puesto: "P1".to_string(),
        }
    }

    fn servicio(remitos: Vec<Remito>) -> TransitoService {
        TransitoService::new(RemitosRepository::new(Arc::new(remitos)))
    }

    #[tokio::test]
    async fn cuenta_solo_los_remitos_activos() {
        let servicio = servicio(vec![
            remito(1, EstadoRemito::Activo, "GUARANI"),
            remito(2, EstadoRemito::Aceptado, "GUARANI"),
            remito(3, EstadoRemito::Activo, "PANAMBI"),
        ]);

        let todos = servicio.resumen(None).await.unwrap();
        let guarani = servicio.resumen(Some("GUARANI")).await.unwrap();

        assert_eq!(todos.activos, 2);
        assert_eq!(todos.total_kg, Decimal::from(2_000));
        assert_eq!(guarani.activos, 1);
        assert_eq!(guarani.registros[0].id, 1);
    }

    #[tokio::test]
    async fn sin_remitos_devuelve_cero() {
        let datos = servicio(vec![]).resumen(None).await.unwrap();

        assert_eq!(datos.activos, 0);
        assert_eq!(datos.total_kg, Decimal::ZERO);
        assert!(datos.registros.is_empty());
    }
}
