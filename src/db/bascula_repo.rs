// src/db/bascula_repo.rs

use std::sync::Arc;

use crate::models::{bascula::RegistroBascula, filtros::RangoFechas};

#[derive(Clone)]
pub struct BasculaRepository {
    registros: Arc<Vec<RegistroBascula>>,
}

impl BasculaRepository {
    pub fn new(registros: Arc<Vec<RegistroBascula>>) -> Self {
        Self { registros }
    }

    // El filtro de planta va contra DESTINO: la báscula registra a qué
    // planta entró el camión.
    pub fn filtrados(
        &self,
        rango: &RangoFechas,
        planta: Option<&str>,
        producto: Option<&str>,
        proveedor: Option<&str>,
    ) -> Vec<RegistroBascula> {
        self.registros
            .iter()
            .filter(|r| {
                rango.contiene(r.fecha)
                    && planta.is_none_or(|p| r.destino == p)
                    && producto.is_none_or(|pr| r.producto == pr)
                    && proveedor.is_none_or(|pv| r.proveedor == pv)
            })
            .cloned()
            .collect()
    }

    /// Tickets de hoja verde en la ventana. El producto se matchea por
    /// substring sin distinguir mayúsculas ("HOJA VERDE ZAFRA" también entra).
    pub fn hoja_verde(&self, rango: &RangoFechas, planta: Option<&str>) -> Vec<RegistroBascula> {
        self.registros
            .iter()
            .filter(|r| {
                rango.contiene(r.fecha)
                    && planta.is_none_or(|p| r.destino == p)
                    && r.producto.to_lowercase().contains("hoja verde")
            })
            .cloned()
            .collect()
    }
}
