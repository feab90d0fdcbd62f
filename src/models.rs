pub mod bascula;
pub mod filtros;
pub mod lotes;
pub mod produccion;
pub mod remitos;
pub mod tablero;
