// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

use models::bascula::ResumenHojaVerde;
use models::filtros::Comparativa;
use models::produccion::ProduccionBolsones;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tablero de producción yerbatera",
        description = "Métricas de producción, stock, lotes y báscula para el tablero de planta."
    ),
    paths(
        // --- Tablero ---
        handlers::tablero::get_rango,
        handlers::tablero::get_resumen,

        // --- Báscula ---
        handlers::bascula::get_hoja_verde,
        handlers::bascula::get_resumen,

        // --- Producción ---
        handlers::produccion::get_bolsones,

        // --- Lotes ---
        handlers::lotes::get_resumen,
        handlers::lotes::get_detalle,
        handlers::lotes::get_en_despacho,
        handlers::lotes::get_por_codigo,

        // --- Stock ---
        handlers::stock::get_depositos,
        handlers::stock::get_silo,

        // --- Proveedores ---
        handlers::proveedores::get_rendimiento,

        // --- Tránsito ---
        handlers::transito::get_resumen,
    ),
    components(
        schemas(
            // --- Filtros y rangos ---
            models::filtros::Periodo,
            models::filtros::RangoFechas,
            models::filtros::RangoComparativo,

            // --- Producción ---
            models::produccion::Movimiento,
            models::produccion::Objeto,
            models::produccion::MovimientoProduccion,
            models::produccion::ProduccionBolsones,
            models::produccion::DatosSilo,
            Comparativa<ProduccionBolsones>,

            // --- Báscula ---
            models::bascula::RegistroBascula,
            models::bascula::ResumenHojaVerde,
            models::bascula::ResumenBascula,
            models::bascula::RendimientoProveedor,
            Comparativa<ResumenHojaVerde>,

            // --- Lotes ---
            models::lotes::EstadoLote,
            models::lotes::Lote,
            models::lotes::ResumenLotes,

            // --- Tránsito ---
            models::remitos::EstadoRemito,
            models::remitos::Remito,
            models::remitos::ResumenTransito,

            // --- Tablero ---
            models::tablero::ResumenTablero,
        )
    ),
    tags(
        (name = "Tablero", description = "Vista combinada y resolución de períodos"),
        (name = "Bascula", description = "Ingresos pesados por báscula"),
        (name = "Produccion", description = "Producción de bolsones"),
        (name = "Lotes", description = "Trazabilidad de lotes"),
        (name = "Stock", description = "Stock por depósito y silo"),
        (name = "Proveedores", description = "Ranking de proveedores"),
        (name = "Transito", description = "Remitos en tránsito"),
    )
)]
pub struct ApiDoc;
