// src/db/lotes_repo.rs

use std::sync::Arc;

use crate::models::lotes::{EstadoLote, Lote};

// Los lotes no se filtran por ventana de fechas: la colección de origen ya
// es la foto de lotes vigentes.
#[derive(Clone)]
pub struct LotesRepository {
    lotes: Arc<Vec<Lote>>,
}

impl LotesRepository {
    pub fn new(lotes: Arc<Vec<Lote>>) -> Self {
        Self { lotes }
    }

    pub fn filtrar(&self, planta: Option<&str>, productos: Option<&[String]>) -> Vec<Lote> {
        self.lotes
            .iter()
            .filter(|l| {
                planta.is_none_or(|p| l.planta == p)
                    && productos.is_none_or(|ps| ps.iter().any(|pr| *pr == l.producto))
            })
            .cloned()
            .collect()
    }

    /// Lotes listos para salir: finalizados y con estiba cargada.
    pub fn en_despacho(&self, planta: Option<&str>) -> Vec<Lote> {
        self.lotes
            .iter()
            .filter(|l| {
                planta.is_none_or(|p| l.planta == p)
                    && l.estado == EstadoLote::Finalizado
                    && l.esta_estibado()
            })
            .cloned()
            .collect()
    }

    pub fn por_codigo(&self, codigo: &str) -> Option<Lote> {
        self.lotes.iter().find(|l| l.lote == codigo).cloned()
    }
}
