// src/services/fechas.rs

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::filtros::{Periodo, RangoComparativo, RangoFechas};

// Todas las ventanas se calculan en hora local de planta, sin zona horaria
// explícita (una sola zona fija, sin manejo de DST).

/// El instante de referencia por defecto: ahora, en hora local.
pub fn ahora() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Resuelve el par de ventanas actual/anterior para un período.
/// Determinística: mismo período + misma referencia => mismas ventanas.
pub fn resolver_rango(periodo: Periodo, referencia: NaiveDateTime) -> RangoComparativo {
    let dia = referencia.date();

    match periodo {
        Periodo::Hoy => {
            let ayer = dia - Duration::days(1);
            RangoComparativo {
                actual: RangoFechas::nuevo(medianoche(dia), fin_del_dia(dia), "Hoy"),
                anterior: RangoFechas::nuevo(medianoche(ayer), fin_del_dia(ayer), "Ayer"),
            }
        }

        Periodo::Semana => {
            // La semana arranca el lunes; el domingo pertenece a la semana
            // cuyo lunes quedó seis días atrás.
            let lunes = dia.week(Weekday::Mon).first_day();
            let lunes_anterior = lunes - Duration::days(7);
            RangoComparativo {
                actual: RangoFechas::nuevo(medianoche(lunes), referencia, "Esta semana"),
                anterior: RangoFechas::nuevo(
                    medianoche(lunes_anterior),
                    medianoche(lunes) - Duration::milliseconds(1),
                    "Semana anterior",
                ),
            }
        }

        Periodo::Mes => {
            let primero = primer_dia_del_mes(dia);
            let primero_anterior = primer_dia_del_mes(primero - Duration::days(1));
            RangoComparativo {
                actual: RangoFechas::nuevo(medianoche(primero), referencia, "Este mes"),
                anterior: RangoFechas::nuevo(
                    medianoche(primero_anterior),
                    medianoche(primero) - Duration::milliseconds(1),
                    "Mes anterior",
                ),
            }
        }

        Periodo::Zafra => {
            // La zafra corre de marzo a septiembre. Entre enero y febrero la
            // zafra vigente sigue siendo la que arrancó en marzo del año
            // pasado; si no, la ventana quedaría invertida.
            let año = if dia < primero_de_marzo(dia.year()) {
                dia.year() - 1
            } else {
                dia.year()
            };
            let fin_anterior = NaiveDate::from_ymd_opt(año - 1, 9, 30)
                .expect("el 30 de septiembre siempre existe");
            RangoComparativo {
                actual: RangoFechas::nuevo(
                    medianoche(primero_de_marzo(año)),
                    referencia,
                    "Zafra actual",
                ),
                anterior: RangoFechas::nuevo(
                    medianoche(primero_de_marzo(año - 1)),
                    fin_del_dia(fin_anterior),
                    "Zafra anterior",
                ),
            }
        }
    }
}

fn medianoche(dia: NaiveDate) -> NaiveDateTime {
    dia.and_time(NaiveTime::MIN)
}

fn fin_del_dia(dia: NaiveDate) -> NaiveDateTime {
    medianoche(dia) + Duration::days(1) - Duration::milliseconds(1)
}

fn primer_dia_del_mes(dia: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(dia.year(), dia.month(), 1).expect("el día 1 siempre existe")
}

fn primero_de_marzo(año: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(año, 3, 1).expect("el 1 de marzo siempre existe")
}
