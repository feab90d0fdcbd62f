// src/db/produccion_repo.rs

use std::sync::Arc;

use crate::models::{
    filtros::RangoFechas,
    produccion::{Movimiento, MovimientoProduccion, Objeto},
};

pub const SILO: &str = "SILO";

#[derive(Clone)]
pub struct ProduccionRepository {
    movimientos: Arc<Vec<MovimientoProduccion>>,
}

impl ProduccionRepository {
    pub fn new(movimientos: Arc<Vec<MovimientoProduccion>>) -> Self {
        Self { movimientos }
    }

    // 1. Altas de bolsones
    // La base de la producción embolsada: solo movimientos ALTA sobre
    // BOLSONES, dentro de la ventana y con los filtros opcionales.
    pub fn altas_de_bolsones(
        &self,
        rango: &RangoFechas,
        planta: Option<&str>,
        tipos: Option<&[String]>,
        origen: Option<&str>,
    ) -> Vec<MovimientoProduccion> {
        self.movimientos
            .iter()
            .filter(|m| {
                rango.contiene(m.fecha)
                    && planta.is_none_or(|p| m.planta == p)
                    && tipos.is_none_or(|ts| ts.iter().any(|t| *t == m.tipo))
                    && origen.is_none_or(|o| m.origen == o)
                    && m.movimiento == Movimiento::Alta
                    && m.objeto == Objeto::Bolsones
            })
            .cloned()
            .collect()
    }

    // 2. Movimientos que tocan el silo
    // Entra todo lo que sea OBJETO=SILO o tenga al silo como punta.
    pub fn movimientos_de_silo(&self, rango: &RangoFechas) -> Vec<MovimientoProduccion> {
        self.movimientos
            .iter()
            .filter(|m| {
                rango.contiene(m.fecha)
                    && (m.objeto == Objeto::Silo || m.origen == SILO || m.destino == SILO)
            })
            .cloned()
            .collect()
    }
}
