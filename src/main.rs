// src/main.rs

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tablero_backend::{config::AppState, docs::ApiDoc, handlers};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    // Si la configuración o los datos fallan, la aplicación no debe arrancar.
    let app_state = AppState::new()
        .await
        .expect("Falló la inicialización del estado de la aplicación.");

    let tablero_routes = Router::new()
        .route("/rango", get(handlers::tablero::get_rango))
        .route("/resumen", get(handlers::tablero::get_resumen));

    let bascula_routes = Router::new()
        .route("/hoja-verde", get(handlers::bascula::get_hoja_verde))
        .route("/resumen", get(handlers::bascula::get_resumen));

    let produccion_routes = Router::new()
        .route("/bolsones", get(handlers::produccion::get_bolsones));

    let lotes_routes = Router::new()
        .route("/resumen", get(handlers::lotes::get_resumen))
        .route("/detalle", get(handlers::lotes::get_detalle))
        .route("/despacho", get(handlers::lotes::get_en_despacho))
        .route("/{lote}", get(handlers::lotes::get_por_codigo));

    let stock_routes = Router::new()
        .route("/depositos", get(handlers::stock::get_depositos))
        .route("/silo", get(handlers::stock::get_silo));

    let proveedores_routes = Router::new()
        .route("/rendimiento", get(handlers::proveedores::get_rendimiento));

    let transito_routes = Router::new()
        .route("/resumen", get(handlers::transito::get_resumen));

    // Combina todo en el router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/tablero", tablero_routes)
        .nest("/api/bascula", bascula_routes)
        .nest("/api/produccion", produccion_routes)
        .nest("/api/lotes", lotes_routes)
        .nest("/api/stock", stock_routes)
        .nest("/api/proveedores", proveedores_routes)
        .nest("/api/transito", transito_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia el servidor
    let puerto = std::env::var("PUERTO").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{puerto}");
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falló el inicio del listener TCP");
    tracing::info!("🚀 Tablero escuchando en {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Error en el servidor Axum");
}
