// src/config.rs

use std::{env, path::PathBuf};

use rust_decimal::Decimal;

use crate::{
    db::{
        BasculaRepository, FixtureStore, LotesRepository, ProduccionRepository, RemitosRepository,
    },
    services::{
        BasculaService, LotesService, ProduccionService, StockService, TableroService,
        TransitoService,
    },
};

// El estado compartido, accesible desde todos los handlers.
#[derive(Clone)]
pub struct AppState {
    pub tablero_service: TableroService,
    pub bascula_service: BasculaService,
    pub produccion_service: ProduccionService,
    pub lotes_service: LotesService,
    pub stock_service: StockService,
    pub transito_service: TransitoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let dir_datos = PathBuf::from(
            env::var("MOCK_DATA_DIR").unwrap_or_else(|_| "data/mock".to_string()),
        );

        // Carga las colecciones una sola vez; si algo falla acá, el backend
        // no tiene nada que servir y no arranca.
        let datos = FixtureStore::cargar(&dir_datos)?;
        tracing::info!(
            "✅ Datos de planta cargados desde {} ({} movimientos, {} lotes, {} tickets, {} remitos)",
            dir_datos.display(),
            datos.produccion.len(),
            datos.lotes.len(),
            datos.bascula.len(),
            datos.remitos.len(),
        );

        // --- Arma el grafo de dependencias ---
        let produccion_repo = ProduccionRepository::new(datos.produccion.clone());
        let bascula_repo = BasculaRepository::new(datos.bascula.clone());
        let lotes_repo = LotesRepository::new(datos.lotes.clone());
        let remitos_repo = RemitosRepository::new(datos.remitos.clone());

        let produccion_service = ProduccionService::new(produccion_repo.clone());
        let bascula_service = BasculaService::new(bascula_repo);
        let lotes_service = LotesService::new(lotes_repo);
        let stock_service = StockService::new(produccion_repo, ConfiguracionStock::default());
        let transito_service = TransitoService::new(remitos_repo);
        let tablero_service = TableroService::new(
            produccion_service.clone(),
            bascula_service.clone(),
            lotes_service.clone(),
            stock_service.clone(),
        );

        Ok(Self {
            tablero_service,
            bascula_service,
            produccion_service,
            lotes_service,
            stock_service,
            transito_service,
        })
    }
}

// --- Stock por depósito ---
// Tabla base y multiplicadores por planta. Es configuración y no cálculo:
// queda acá hasta que el sistema de inventario exponga saldos reales.
#[derive(Clone)]
pub struct ConfiguracionStock {
    pub saldo_inicial_silo: Decimal,
    pub base_depositos: Vec<(String, Decimal)>,
    pub multiplicadores: Vec<(String, Decimal)>,
}

impl ConfiguracionStock {
    /// Multiplicador de escala de la planta; 1 si no hay planta o no está
    /// en la tabla.
    pub fn multiplicador(&self, planta: Option<&str>) -> Decimal {
        planta
            .and_then(|p| {
                self.multiplicadores
                    .iter()
                    .find(|(nombre, _)| nombre.as_str() == p)
            })
            .map(|(_, multiplicador)| *multiplicador)
            .unwrap_or(Decimal::ONE)
    }
}

impl Default for ConfiguracionStock {
    fn default() -> Self {
        let deposito = |nombre: &str, kilos: i64| (nombre.to_string(), Decimal::from(kilos));
        Self {
            saldo_inicial_silo: Decimal::from(19_200),
            base_depositos: vec![
                deposito("TIPIFICADO", 90_000),
                deposito("ENVASADO", 200_000),
                deposito("SILO", 20_000),
                deposito("TRANSITO", 15_000),
                deposito("PARA_REPASO", 8_000),
                deposito("DESPACHO", 30_000),
            ],
            multiplicadores: vec![
                ("GUARANI".to_string(), Decimal::ONE),
                ("PANAMBI".to_string(), Decimal::new(8, 1)),
                ("TERCERIZADA 2".to_string(), Decimal::new(5, 1)),
                ("TERCERIZADA 3".to_string(), Decimal::new(4, 1)),
            ],
        }
    }
}
