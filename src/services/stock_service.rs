// src/services/stock_service.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    config::ConfiguracionStock,
    db::{produccion_repo::SILO, ProduccionRepository},
    models::{
        filtros::RangoFechas,
        produccion::{DatosSilo, Movimiento},
    },
};

#[derive(Clone)]
pub struct StockService {
    produccion_repo: ProduccionRepository,
    config: ConfiguracionStock,
}

impl StockService {
    pub fn new(produccion_repo: ProduccionRepository, config: ConfiguracionStock) -> Self {
        Self {
            produccion_repo,
            config,
        }
    }

    /// Stock por depósito: tabla base de configuración escalada por planta.
    /// TODO: reemplazar por la agregación real cuando el sistema de
    /// inventario exponga saldos por depósito.
    pub async fn por_deposito(
        &self,
        planta: Option<&str>,
    ) -> Result<BTreeMap<String, Decimal>, AppError> {
        let multiplicador = self.config.multiplicador(planta);

        Ok(self
            .config
            .base_depositos
            .iter()
            .map(|(deposito, kilos)| (deposito.clone(), (kilos * multiplicador).round()))
            .collect())
    }

    /// Balance del silo en la ventana: entra lo que DESCARGA hacia el silo,
    /// sale lo que BAJA o TRASLADO desde el silo. El saldo nunca baja de cero.
    pub async fn silo(&self, rango: &RangoFechas) -> Result<DatosSilo, AppError> {
        let movimientos = self.produccion_repo.movimientos_de_silo(rango);

        let ingresos: Decimal = movimientos
            .iter()
            .filter(|m| m.destino == SILO && m.movimiento == Movimiento::Descarga)
            .map(|m| m.peso)
            .sum();

        let egresos: Decimal = movimientos
            .iter()
            .filter(|m| {
                m.origen == SILO
                    && matches!(m.movimiento, Movimiento::Baja | Movimiento::Traslado)
            })
            .map(|m| m.peso)
            .sum();

        let saldo = (self.config.saldo_inicial_silo + ingresos - egresos).max(Decimal::ZERO);

        Ok(DatosSilo {
            saldo,
            ingresos,
            egresos,
        })
    }
}
