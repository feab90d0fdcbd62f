// src/db/remitos_repo.rs

use std::sync::Arc;

use crate::models::remitos::{EstadoRemito, Remito};

#[derive(Clone)]
pub struct RemitosRepository {
    remitos: Arc<Vec<Remito>>,
}

impl RemitosRepository {
    pub fn new(remitos: Arc<Vec<Remito>>) -> Self {
        Self { remitos }
    }

    pub fn activos(&self, planta: Option<&str>) -> Vec<Remito> {
        self.remitos
            .iter()
            .filter(|r| planta.is_none_or(|p| r.planta == p) && r.estado == EstadoRemito::Activo)
            .cloned()
            .collect()
    }
}
