pub mod params;
pub mod tablero;
pub mod bascula;
pub mod produccion;
pub mod lotes;
pub mod stock;
pub mod proveedores;
pub mod transito;
