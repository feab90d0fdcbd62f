// src/db/fixtures.rs

use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::models::{
    bascula::RegistroBascula, lotes::Lote, produccion::MovimientoProduccion, remitos::Remito,
};

// Las cuatro colecciones del origen de datos. Se cargan una sola vez al
// arrancar y después son solo lectura: los repositorios comparten los Arc.
#[derive(Clone)]
pub struct FixtureStore {
    pub produccion: Arc<Vec<MovimientoProduccion>>,
    pub lotes: Arc<Vec<Lote>>,
    pub bascula: Arc<Vec<RegistroBascula>>,
    pub remitos: Arc<Vec<Remito>>,
}

impl FixtureStore {
    /// Carga las colecciones desde `dir`. Si falta un archivo o el JSON no
    /// matchea el esquema, el backend no arranca.
    pub fn cargar(dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            produccion: Arc::new(leer_coleccion(dir, "produccion.json")?),
            lotes: Arc::new(leer_coleccion(dir, "lotes_abiertos.json")?),
            bascula: Arc::new(leer_coleccion(dir, "registros_bascula.json")?),
            remitos: Arc::new(leer_coleccion(dir, "remitos_historicos.json")?),
        })
    }
}

fn leer_coleccion<T: DeserializeOwned>(dir: &Path, archivo: &str) -> anyhow::Result<Vec<T>> {
    let ruta = dir.join(archivo);
    let contenido = fs::read_to_string(&ruta)
        .with_context(|| format!("No se pudo leer {}", ruta.display()))?;
    serde_json::from_str(&contenido)
        .with_context(|| format!("JSON inválido en {}", ruta.display()))
}
