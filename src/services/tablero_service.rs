// src/services/tablero_service.rs

use crate::{
    common::error::AppError,
    models::{
        filtros::{Comparativa, RangoComparativo},
        tablero::ResumenTablero,
    },
    services::{BasculaService, LotesService, ProduccionService, StockService},
};

/// Arma la vista combinada de la página principal a partir de los servicios
/// de cada familia de métricas.
#[derive(Clone)]
pub struct TableroService {
    produccion: ProduccionService,
    bascula: BasculaService,
    lotes: LotesService,
    stock: StockService,
}

impl TableroService {
    pub fn new(
        produccion: ProduccionService,
        bascula: BasculaService,
        lotes: LotesService,
        stock: StockService,
    ) -> Self {
        Self {
            produccion,
            bascula,
            lotes,
            stock,
        }
    }

    pub async fn resumen(
        &self,
        rangos: &RangoComparativo,
        planta: Option<&str>,
    ) -> Result<ResumenTablero, AppError> {
        // Las cuatro agregaciones son independientes entre sí: se lanzan
        // juntas y se espera el conjunto.
        let (produccion, hoja_verde, lotes, stock) = tokio::join!(
            self.produccion.bolsones(rangos, planta, None, None),
            self.bascula.hoja_verde(rangos, planta),
            self.lotes.resumen(planta, None),
            self.stock.por_deposito(planta),
        );

        let hoja_verde = hoja_verde?;
        // Al tablero viajan solo los totales de hoja verde.
        let hoja_verde = Comparativa {
            actual: hoja_verde.actual.total,
            anterior: hoja_verde.anterior.total,
            variacion: hoja_verde.variacion,
            variacion_pct: hoja_verde.variacion_pct,
        };

        Ok(ResumenTablero {
            rango: rangos.actual.clone(),
            produccion: produccion?,
            hoja_verde,
            lotes: lotes?,
            stock: stock?,
        })
    }
}
