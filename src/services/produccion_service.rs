// src/services/produccion_service.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::ProduccionRepository,
    models::{
        filtros::{Comparativa, RangoComparativo, RangoFechas},
        produccion::{MovimientoProduccion, ProduccionBolsones},
    },
};

// Orígenes que cuentan como producción propia.
pub const SECADERO_INTERNO: &str = "SECADERO INTERNO";
pub const PLANTA_PROPIA: &str = "PROPIO";

#[derive(Clone)]
pub struct ProduccionService {
    repo: ProduccionRepository,
}

impl ProduccionService {
    pub fn new(repo: ProduccionRepository) -> Self {
        Self { repo }
    }

    /// Producción de bolsones en la ventana, partida en interno/externo,
    /// con la comparativa calculada de verdad sobre la ventana anterior.
    pub async fn bolsones(
        &self,
        rangos: &RangoComparativo,
        planta: Option<&str>,
        tipos: Option<&[String]>,
        origen: Option<&str>,
    ) -> Result<Comparativa<ProduccionBolsones>, AppError> {
        let actual = self.sumar_bolsones(&rangos.actual, planta, tipos, origen);
        let anterior = self.sumar_bolsones(&rangos.anterior, planta, tipos, origen);

        let (total_actual, total_anterior) = (actual.total, anterior.total);
        Ok(Comparativa::nueva(
            actual,
            anterior,
            total_actual,
            total_anterior,
        ))
    }

    fn sumar_bolsones(
        &self,
        rango: &RangoFechas,
        planta: Option<&str>,
        tipos: Option<&[String]>,
        origen: Option<&str>,
    ) -> ProduccionBolsones {
        let movimientos = self.repo.altas_de_bolsones(rango, planta, tipos, origen);

        let (interno, externo) = movimientos
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(interno, externo), m| {
                if es_interno(m) {
                    (interno + m.peso, externo)
                } else {
                    (interno, externo + m.peso)
                }
            });

        ProduccionBolsones {
            interno,
            externo,
            total: interno + externo,
        }
    }
}

/// Un alta es interna si viene del secadero propio o de la planta propia;
/// todo lo demás es producción de terceros. La partición es exhaustiva, así
/// que interno + externo siempre da el total.
fn es_interno(movimiento: &MovimientoProduccion) -> bool {
    movimiento.origen == SECADERO_INTERNO || movimiento.planta == PLANTA_PROPIA
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::models::filtros::Periodo;
    use crate::models::produccion::{Movimiento, Objeto};
    use crate::services::fechas::resolver_rango;

    fn alta(
        id: i64,
        origen: &str,
        tipo: &str,
        peso: i64,
        dia: u32,
        planta: &str,
    ) -> MovimientoProduccion {
        movimiento(id, Movimiento::Alta, origen, tipo, peso, dia, Objeto::Bolsones, planta)
    }

    fn movimiento(
        id: i64,
        mov: Movimiento,
        origen: &str,
        tipo: &str,
        peso: i64,
        dia: u32,
        objeto: Objeto,
        planta: &str,
    ) -> MovimientoProduccion {
        MovimientoProduccion {
            id,
            movimiento: mov,
            origen: origen.to_string(),
            destino: "TIPIFICADO".to_string(),
            tipo: tipo.to_string(),
            peso: Decimal::from(peso),
            fecha: NaiveDate::from_ymd_opt(2025, 8, dia)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            objeto,
            planta: planta.to_string(),
            id_prod: None,
            lote: None,
        }
    }

    fn servicio(movimientos: Vec<MovimientoProduccion>) -> ProduccionService {
        ProduccionService::new(ProduccionRepository::new(Arc::new(movimientos)))
    }

    fn rangos_de_hoy() -> crate::models::filtros::RangoComparativo {
        let referencia = NaiveDate::from_ymd_opt(2025, 8, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        resolver_rango(Periodo::Hoy, referencia)
    }

    #[tokio::test]
    async fn interno_mas_externo_siempre_da_el_total() {
        let servicio = servicio(vec![
            alta(1, SECADERO_INTERNO, "CANCHADA", 800, 7, "GUARANI"),
            alta(2, "SECADERO RUIZ", "CANCHADA", 500, 7, "GUARANI"),
            alta(3, "ACOPIO NORTE", "CANCHADA", 300, 7, "PROPIO"),
        ]);

        let datos = servicio.bolsones(&rangos_de_hoy(), None, None, None).await.unwrap();

        // El alta 3 es interna por STORE=PROPIO aunque el origen sea externo.
        assert_eq!(datos.actual.interno, Decimal::from(1100));
        assert_eq!(datos.actual.externo, Decimal::from(500));
        assert_eq!(datos.actual.total, datos.actual.interno + datos.actual.externo);
    }

    #[tokio::test]
    async fn solo_cuentan_altas_de_bolsones() {
        let servicio = servicio(vec![
            alta(1, SECADERO_INTERNO, "CANCHADA", 800, 7, "GUARANI"),
            movimiento(2, Movimiento::Baja, SECADERO_INTERNO, "CANCHADA", 400, 7, Objeto::Bolsones, "GUARANI"),
            movimiento(3, Movimiento::Alta, SECADERO_INTERNO, "CANCHADA", 900, 7, Objeto::Silo, "GUARANI"),
        ]);

        let datos = servicio.bolsones(&rangos_de_hoy(), None, None, None).await.unwrap();

        assert_eq!(datos.actual.total, Decimal::from(800));
    }

    #[tokio::test]
    async fn filtra_por_planta_tipos_y_origen() {
        let servicio = servicio(vec![
            alta(1, SECADERO_INTERNO, "CANCHADA", 800, 7, "GUARANI"),
            alta(2, SECADERO_INTERNO, "DESPALILLADA", 650, 7, "GUARANI"),
            alta(3, SECADERO_INTERNO, "CANCHADA", 500, 7, "PANAMBI"),
            alta(4, "SECADERO RUIZ", "CANCHADA", 300, 7, "GUARANI"),
        ]);
        let tipos = vec!["CANCHADA".to_string()];

        let datos = servicio
            .bolsones(&rangos_de_hoy(), Some("GUARANI"), Some(&tipos), Some(SECADERO_INTERNO))
            .await
            .unwrap();

        assert_eq!(datos.actual.total, Decimal::from(800));
    }

    #[tokio::test]
    async fn la_comparativa_usa_la_ventana_anterior_de_verdad() {
        let servicio = servicio(vec![
            alta(1, SECADERO_INTERNO, "CANCHADA", 1000, 7, "GUARANI"),
            // ayer
            alta(2, SECADERO_INTERNO, "CANCHADA", 800, 6, "GUARANI"),
        ]);

        let datos = servicio.bolsones(&rangos_de_hoy(), None, None, None).await.unwrap();

        assert_eq!(datos.actual.total, Decimal::from(1000));
        assert_eq!(datos.anterior.total, Decimal::from(800));
        assert_eq!(datos.variacion, Decimal::from(200));
        assert_eq!(datos.variacion_pct, Decimal::from(25));
    }

    #[tokio::test]
    async fn sin_registros_devuelve_ceros_y_pct_cero() {
        let servicio = servicio(vec![]);

        let datos = servicio.bolsones(&rangos_de_hoy(), None, None, None).await.unwrap();

        assert_eq!(datos.actual.total, Decimal::ZERO);
        assert_eq!(datos.anterior.total, Decimal::ZERO);
        assert_eq!(datos.variacion, Decimal::ZERO);
        assert_eq!(datos.variacion_pct, Decimal::ZERO);
    }

    #[tokio::test]
    async fn filtrar_dos_veces_da_lo_mismo_que_una() {
        let repo = ProduccionRepository::new(Arc::new(vec![
            alta(1, SECADERO_INTERNO, "CANCHADA", 800, 7, "GUARANI"),
            alta(2, "SECADERO RUIZ", "CANCHADA", 500, 6, "PANAMBI"),
        ]));
        let rangos = rangos_de_hoy();

        let una_vez = repo.altas_de_bolsones(&rangos.actual, Some("GUARANI"), None, None);
        let dos_veces = ProduccionRepository::new(Arc::new(una_vez.clone()))
            .altas_de_bolsones(&rangos.actual, Some("GUARANI"), None, None);

        assert_eq!(una_vez, dos_veces);
    }
}
