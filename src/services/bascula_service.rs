// src/services/bascula_service.rs

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::BasculaRepository,
    models::{
        bascula::{RegistroBascula, RendimientoProveedor, ResumenBascula, ResumenHojaVerde},
        filtros::{Comparativa, RangoComparativo, RangoFechas},
    },
};

// Cantidad de proveedores que muestra el ranking.
const TOPE_RANKING: usize = 10;

#[derive(Clone)]
pub struct BasculaService {
    repo: BasculaRepository,
}

impl BasculaService {
    pub fn new(repo: BasculaRepository) -> Self {
        Self { repo }
    }

    /// Ingreso de hoja verde por báscula, con comparativa contra la ventana
    /// anterior. Los registros de la ventana anterior no viajan al front.
    pub async fn hoja_verde(
        &self,
        rangos: &RangoComparativo,
        planta: Option<&str>,
    ) -> Result<Comparativa<ResumenHojaVerde>, AppError> {
        let registros_actual = self.repo.hoja_verde(&rangos.actual, planta);
        let registros_anterior = self.repo.hoja_verde(&rangos.anterior, planta);

        let actual = ResumenHojaVerde {
            total: suma_neto(&registros_actual),
            registros: registros_actual,
        };
        let anterior = ResumenHojaVerde {
            total: suma_neto(&registros_anterior),
            registros: Vec::new(),
        };

        let (total_actual, total_anterior) = (actual.total, anterior.total);
        Ok(Comparativa::nueva(
            actual,
            anterior,
            total_actual,
            total_anterior,
        ))
    }

    /// Desglose de todos los tickets de la ventana por proveedor y por
    /// producto, con filtros exactos opcionales sobre ambos.
    pub async fn resumen(
        &self,
        rango: &RangoFechas,
        planta: Option<&str>,
        producto: Option<&str>,
        proveedor: Option<&str>,
    ) -> Result<ResumenBascula, AppError> {
        let registros = self.repo.filtrados(rango, planta, producto, proveedor);

        let mut por_proveedor: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut por_producto: BTreeMap<String, Decimal> = BTreeMap::new();
        for registro in &registros {
            *por_proveedor
                .entry(registro.proveedor.clone())
                .or_insert(Decimal::ZERO) += registro.neto;
            *por_producto
                .entry(registro.producto.clone())
                .or_insert(Decimal::ZERO) += registro.neto;
        }

        Ok(ResumenBascula {
            total: suma_neto(&registros),
            por_proveedor,
            por_producto,
            registros,
        })
    }

    /// Ranking de proveedores por kilos entregados en la ventana,
    /// descendente y cortado en los diez primeros.
    pub async fn rendimiento_proveedores(
        &self,
        rango: &RangoFechas,
        planta: Option<&str>,
    ) -> Result<Vec<RendimientoProveedor>, AppError> {
        let registros = self.repo.filtrados(rango, planta, None, None);

        let mut totales: BTreeMap<String, Decimal> = BTreeMap::new();
        for registro in &registros {
            *totales
                .entry(registro.proveedor.clone())
                .or_insert(Decimal::ZERO) += registro.neto;
        }

        let mut ranking: Vec<RendimientoProveedor> = totales
            .into_iter()
            .map(|(proveedor, total)| RendimientoProveedor { proveedor, total })
            .collect();
        ranking.sort_by(|a, b| b.total.cmp(&a.total));
        ranking.truncate(TOPE_RANKING);

        Ok(ranking)
    }
}

fn suma_neto(registros: &[RegistroBascula]) -> Decimal {
    registros.iter().map(|r| r.neto).sum()
}
