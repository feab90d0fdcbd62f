// src/services/lotes_service.rs

use crate::{
    common::error::AppError,
    db::LotesRepository,
    models::lotes::{EstadoLote, Lote, ResumenLotes},
};

#[derive(Clone)]
pub struct LotesService {
    repo: LotesRepository,
}

impl LotesService {
    pub fn new(repo: LotesRepository) -> Self {
        Self { repo }
    }

    /// Conteo de lotes por estado. Se cuentan los cinco estados, así la suma
    /// de los contadores siempre coincide con `total`.
    pub async fn resumen(
        &self,
        planta: Option<&str>,
        productos: Option<&[String]>,
    ) -> Result<ResumenLotes, AppError> {
        let lotes = self.repo.filtrar(planta, productos);

        let contar = |estado: EstadoLote| lotes.iter().filter(|l| l.estado == estado).count() as u64;

        Ok(ResumenLotes {
            abiertos: contar(EstadoLote::Abierto),
            en_proceso: contar(EstadoLote::EnProceso),
            finalizados: contar(EstadoLote::Finalizado),
            en_observacion: contar(EstadoLote::Observacion),
            despachados: contar(EstadoLote::Despachado),
            total: lotes.len() as u64,
        })
    }

    pub async fn detalle(
        &self,
        planta: Option<&str>,
        productos: Option<&[String]>,
    ) -> Result<Vec<Lote>, AppError> {
        Ok(self.repo.filtrar(planta, productos))
    }

    pub async fn en_despacho(&self, planta: Option<&str>) -> Result<Vec<Lote>, AppError> {
        Ok(self.repo.en_despacho(planta))
    }

    pub async fn por_codigo(&self, codigo: &str) -> Result<Lote, AppError> {
        self.repo
            .por_codigo(codigo)
            .ok_or(AppError::LoteNoEncontrado)
    }
}
