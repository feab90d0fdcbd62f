// tests/tablero_integration_test.rs
//
// Recorre el stack completo: fixtures en disco -> FixtureStore -> repos ->
// servicios, con una referencia de tiempo fija para que los números cierren.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use tablero_backend::config::ConfiguracionStock;
use tablero_backend::db::{
    BasculaRepository, FixtureStore, LotesRepository, ProduccionRepository, RemitosRepository,
};
use tablero_backend::models::filtros::Periodo;
use tablero_backend::services::fechas::resolver_rango;
use tablero_backend::services::{
    BasculaService, LotesService, ProduccionService, StockService, TableroService, TransitoService,
};

const PRODUCCION: &str = r#"[
  { "ID": 1, "MOVIMIENTO": "ALTA", "ORIGEN": "SECADERO INTERNO", "DESTINO": "TIPIFICADO", "TIPO": "CANCHADA", "PESO": 900, "DATE_TIME": "2026-08-07T08:00:00", "OBJETO": "BOLSONES", "STORE": "GUARANI" },
  { "ID": 2, "MOVIMIENTO": "ALTA", "ORIGEN": "SECADERO RUIZ", "DESTINO": "TIPIFICADO", "TIPO": "CANCHADA", "PESO": 600, "DATE_TIME": "2026-08-07T09:30:00", "OBJETO": "BOLSONES", "STORE": "GUARANI" },
  { "ID": 3, "MOVIMIENTO": "ALTA", "ORIGEN": "SECADERO INTERNO", "DESTINO": "TIPIFICADO", "TIPO": "CANCHADA", "PESO": 700, "DATE_TIME": "2026-08-06T08:00:00", "OBJETO": "BOLSONES", "STORE": "GUARANI" },
  { "ID": 4, "MOVIMIENTO": "DESCARGA", "ORIGEN": "TIPIFICADO", "DESTINO": "SILO", "TIPO": "CANCHADA", "PESO": 2000, "DATE_TIME": "2026-08-07T07:00:00", "OBJETO": "SILO", "STORE": "GUARANI" },
  { "ID": 5, "MOVIMIENTO": "BAJA", "ORIGEN": "SILO", "DESTINO": "ENVASADO", "TIPO": "CANCHADA", "PESO": 500, "DATE_TIME": "2026-08-07T11:00:00", "OBJETO": "SILO", "STORE": "GUARANI" }
]"#;

const LOTES: &str = r#"[
  { "ID": 1, "LOTE": "L-0001", "ESTADO": "ABIERTO", "PRODUCTO": "CANCHADA", "NPALLETS": 2, "NBOLSAS": 40, "KGBOLSAS": 25, "TOTALKG": 1000, "LABORATORIO": "PENDIENTE", "ETIQUETAS": "", "ESTIBADO": "", "DESPACHADO": "", "NEXPORT": "", "CLIENTE": "ACME", "STORE": "GUARANI" },
  { "ID": 2, "LOTE": "L-0002", "ESTADO": "EN PROCESO", "PRODUCTO": "CANCHADA", "NPALLETS": 4, "NBOLSAS": 80, "KGBOLSAS": 25, "TOTALKG": 2000, "LABORATORIO": "OK", "ETIQUETAS": "IMPRESAS", "ESTIBADO": "", "DESPACHADO": "", "NEXPORT": "", "CLIENTE": "ACME", "STORE": "GUARANI" },
  { "ID": 3, "LOTE": "L-0003", "ESTADO": "FINALIZADO", "PRODUCTO": "CANCHADA", "NPALLETS": 8, "NBOLSAS": 160, "KGBOLSAS": 25, "TOTALKG": 4000, "LABORATORIO": "OK", "ETIQUETAS": "IMPRESAS", "ESTIBADO": "FILA 3", "DESPACHADO": "", "NEXPORT": "", "CLIENTE": "ACME", "STORE": "GUARANI" },
  { "ID": 4, "LOTE": "L-0004", "ESTADO": "OBSERVACIÓN", "PRODUCTO": "CANCHADA", "NPALLETS": 3, "NBOLSAS": 60, "KGBOLSAS": 25, "TOTALKG": 1500, "LABORATORIO": "HUMEDAD ALTA", "ETIQUETAS": "", "ESTIBADO": "", "DESPACHADO": "", "NEXPORT": "", "CLIENTE": "ACME", "STORE": "GUARANI" },
  { "ID": 5, "LOTE": "L-0005", "ESTADO": "DESPACHADO", "PRODUCTO": "CANCHADA", "NPALLETS": 10, "NBOLSAS": 200, "KGBOLSAS": 25, "TOTALKG": 5000, "LABORATORIO": "OK", "ETIQUETAS": "IMPRESAS", "ESTIBADO": "FILA 1", "DESPACHADO": "2026-08-02", "NEXPORT": "EXP-1", "CLIENTE": "ACME", "STORE": "GUARANI" }
]"#;

const BASCULA: &str = r#"[
  { "ID": 1, "FECHA": "2026-08-07T06:20:00", "TICNUM": "T-1", "PROVEEDOR": "AgroMisiones", "PRODUCTO": "Hoja Verde", "NETO": 10000, "DESTINO": "GUARANI", "PATENTE": "AB123CD", "CHOFER": "Gómez" },
  { "ID": 2, "FECHA": "2026-08-07T07:45:00", "TICNUM": "T-2", "PROVEEDOR": "VerdeCampo", "PRODUCTO": "HOJA VERDE ZAFRA", "NETO": 8000, "DESTINO": "GUARANI", "PATENTE": "AC456EF", "CHOFER": "Benítez" },
  { "ID": 3, "FECHA": "2026-08-06T08:30:00", "TICNUM": "T-3", "PROVEEDOR": "AgroMisiones", "PRODUCTO": "Hoja Verde", "NETO": 6000, "DESTINO": "GUARANI", "PATENTE": "AB123CD", "CHOFER": "Gómez" },
  { "ID": 4, "FECHA": "2026-08-07T10:15:00", "TICNUM": "T-4", "PROVEEDOR": "Coop San Pedro", "PRODUCTO": "Palo", "NETO": 2000, "DESTINO": "GUARANI", "PATENTE": "AD789GH", "CHOFER": "Silva" }
]"#;

const REMITOS: &str = r#"[
  { "ID": 1, "FECHAINICIO": 1786428000000, "ORIGEN": "GUARANI", "DESTINO": "PANAMBI", "ESTADO": "ACTIVO", "BOLSON_ID": "BB-1", "STORE": "GUARANI", "PUESTO": "P1" },
  { "ID": 2, "FECHAINICIO": 1786431600000, "ORIGEN": "GUARANI", "DESTINO": "PANAMBI", "ESTADO": "ACTIVO", "BOLSON_ID": "BB-2", "STORE": "GUARANI", "PUESTO": "P2" },
  { "ID": 3, "FECHAINICIO": 1786348800000, "ORIGEN": "PANAMBI", "DESTINO": "GUARANI", "ESTADO": "ACEPTADO", "BOLSON_ID": "BB-3", "STORE": "PANAMBI", "PUESTO": "P1" }
]"#;

struct Servicios {
    produccion: ProduccionService,
    bascula: BasculaService,
    lotes: LotesService,
    stock: StockService,
    transito: TransitoService,
    tablero: TableroService,
}

fn armar_servicios(dir: &Path) -> Servicios {
    fs::write(dir.join("produccion.json"), PRODUCCION).unwrap();
    fs::write(dir.join("lotes_abiertos.json"), LOTES).unwrap();
    fs::write(dir.join("registros_bascula.json"), BASCULA).unwrap();
    fs::write(dir.join("remitos_historicos.json"), REMITOS).unwrap();

    let datos = FixtureStore::cargar(dir).unwrap();

    let produccion_repo = ProduccionRepository::new(Arc::clone(&datos.produccion));
    let produccion = ProduccionService::new(produccion_repo.clone());
    let bascula = BasculaService::new(BasculaRepository::new(Arc::clone(&datos.bascula)));
    let lotes = LotesService::new(LotesRepository::new(Arc::clone(&datos.lotes)));
    let stock = StockService::new(produccion_repo, ConfiguracionStock::default());
    let transito = TransitoService::new(RemitosRepository::new(Arc::clone(&datos.remitos)));
    let tablero = TableroService::new(
        produccion.clone(),
        bascula.clone(),
        lotes.clone(),
        stock.clone(),
    );

    Servicios {
        produccion,
        bascula,
        lotes,
        stock,
        transito,
        tablero,
    }
}

fn referencia() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 7)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn el_dia_de_planta_cierra_de_punta_a_punta() {
    let dir = tempfile::tempdir().unwrap();
    let servicios = armar_servicios(dir.path());
    let rangos = resolver_rango(Periodo::Hoy, referencia());

    // Producción de bolsones: 900 interno + 600 externo hoy, 700 ayer.
    let bolsones = servicios
        .produccion
        .bolsones(&rangos, Some("GUARANI"), None, None)
        .await
        .unwrap();
    assert_eq!(bolsones.actual.interno, Decimal::from(900));
    assert_eq!(bolsones.actual.externo, Decimal::from(600));
    assert_eq!(bolsones.actual.total, Decimal::from(1_500));
    assert_eq!(bolsones.anterior.total, Decimal::from(700));
    assert_eq!(bolsones.variacion, Decimal::from(800));
    assert_eq!(bolsones.variacion_pct, Decimal::new(11_429, 2));

    // Hoja verde: 18.000 hoy contra 6.000 ayer; el palo no cuenta.
    let hoja_verde = servicios
        .bascula
        .hoja_verde(&rangos, Some("GUARANI"))
        .await
        .unwrap();
    assert_eq!(hoja_verde.actual.total, Decimal::from(18_000));
    assert_eq!(hoja_verde.actual.registros.len(), 2);
    assert_eq!(hoja_verde.anterior.total, Decimal::from(6_000));
    assert_eq!(hoja_verde.variacion_pct, Decimal::from(200));

    // Lotes: uno por estado, la suma cierra contra el total.
    let lotes = servicios.lotes.resumen(Some("GUARANI"), None).await.unwrap();
    assert_eq!(lotes.total, 5);
    assert_eq!(
        lotes.abiertos + lotes.en_proceso + lotes.finalizados + lotes.en_observacion
            + lotes.despachados,
        lotes.total
    );

    // Silo: 2.000 descargados, 500 bajados.
    let silo = servicios.stock.silo(&rangos.actual).await.unwrap();
    assert_eq!(silo.ingresos, Decimal::from(2_000));
    assert_eq!(silo.egresos, Decimal::from(500));
    assert_eq!(silo.saldo, Decimal::from(20_700));

    // Ranking de proveedores del día.
    let ranking = servicios
        .bascula
        .rendimiento_proveedores(&rangos.actual, Some("GUARANI"))
        .await
        .unwrap();
    assert_eq!(ranking.len(), 3);
    assert_eq!(ranking[0].proveedor, "AgroMisiones");
    assert_eq!(ranking[0].total, Decimal::from(10_000));
    assert_eq!(ranking[2].proveedor, "Coop San Pedro");

    // Tránsito: dos remitos activos.
    let transito = servicios.transito.resumen(None).await.unwrap();
    assert_eq!(transito.activos, 2);
    assert_eq!(transito.total_kg, Decimal::from(2_000));
}

#[tokio::test]
async fn el_resumen_del_tablero_combina_las_familias() {
    let dir = tempfile::tempdir().unwrap();
    let servicios = armar_servicios(dir.path());
    let rangos = resolver_rango(Periodo::Hoy, referencia());

    let resumen = servicios
        .tablero
        .resumen(&rangos, Some("GUARANI"))
        .await
        .unwrap();

    assert_eq!(resumen.rango.etiqueta, "Hoy");
    assert_eq!(resumen.produccion.actual.total, Decimal::from(1_500));
    assert_eq!(resumen.hoja_verde.actual, Decimal::from(18_000));
    assert_eq!(resumen.lotes.total, 5);
    // GUARANI es la planta principal: multiplicador 1.
    assert_eq!(resumen.stock["ENVASADO"], Decimal::from(200_000));
}

#[tokio::test]
async fn la_semana_acumula_los_dias_desde_el_lunes() {
    let dir = tempfile::tempdir().unwrap();
    let servicios = armar_servicios(dir.path());
    // 2026-08-07 fue viernes: la semana arranca el lunes 3.
    let rangos = resolver_rango(Periodo::Semana, referencia());

    let bolsones = servicios
        .produccion
        .bolsones(&rangos, Some("GUARANI"), None, None)
        .await
        .unwrap();

    // Entran las altas del jueves 6 y del viernes 7.
    assert_eq!(bolsones.actual.total, Decimal::from(2_200));
    assert_eq!(bolsones.anterior.total, Decimal::ZERO);
}

#[tokio::test]
async fn el_filtro_por_planta_desconocida_devuelve_vacio() {
    let dir = tempfile::tempdir().unwrap();
    let servicios = armar_servicios(dir.path());
    let rangos = resolver_rango(Periodo::Hoy, referencia());

    let bolsones = servicios
        .produccion
        .bolsones(&rangos, Some("OBRAJE 9"), None, None)
        .await
        .unwrap();
    let lotes = servicios.lotes.resumen(Some("OBRAJE 9"), None).await.unwrap();

    assert_eq!(bolsones.actual.total, Decimal::ZERO);
    assert_eq!(lotes.total, 0);
}
