pub mod fechas;
pub mod bascula_service;
pub use bascula_service::BasculaService;
pub mod produccion_service;
pub use produccion_service::ProduccionService;
pub mod lotes_service;
pub use lotes_service::LotesService;
pub mod stock_service;
pub use stock_service::StockService;
pub mod transito_service;
pub use transito_service::TransitoService;
pub mod tablero_service;
pub use tablero_service::TableroService;
