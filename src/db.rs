pub mod fixtures;
pub use fixtures::FixtureStore;
pub mod produccion_repo;
pub use produccion_repo::ProduccionRepository;
pub mod lotes_repo;
pub use lotes_repo::LotesRepository;
pub mod bascula_repo;
pub use bascula_repo::BasculaRepository;
pub mod remitos_repo;
pub use remitos_repo::RemitosRepository;
