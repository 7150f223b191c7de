//! Headline figures of the BI dashboard.

use chrono::NaiveDate;
use comedor_api::types::{AsistenciaBecados, CostoPorRacion, RotacionInsumos, VentasDiarias};
use comedor_api::{ApiError, BiClient, DateRange};
use serde::Serialize;

/// Days covered by the dashboard when no range is picked.
pub const DEFAULT_RANGE_DAYS: u32 = 30;

/// The last [`DEFAULT_RANGE_DAYS`] days ending on `today`.
pub fn default_range(today: NaiveDate) -> DateRange {
    DateRange::last_days(DEFAULT_RANGE_DAYS, today)
}

/// Suppliers shown in the rotation chart.
pub const ROTACION_TOP: usize = 10;

/// Stock movement of one supply summed over every month in the range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RotacionResumen {
    pub nombre: String,
    pub unidad: String,
    pub entrada: f64,
    pub salida: f64,
}

impl RotacionResumen {
    pub fn movimiento(&self) -> f64 {
        self.entrada + self.salida
    }
}

/// Groups monthly rows by supply name and keeps the `n` supplies that moved
/// the most stock. The unit of the first row seen for a name is kept; ties
/// keep first-seen order.
pub fn rotacion_top(rows: &[RotacionInsumos], n: usize) -> Vec<RotacionResumen> {
    let mut grouped: Vec<RotacionResumen> = Vec::new();
    for row in rows {
        match grouped.iter_mut().find(|r| r.nombre == row.nombre) {
            Some(existing) => {
                existing.entrada += row.total_entrada;
                existing.salida += row.total_salida;
            }
            None => grouped.push(RotacionResumen {
                nombre: row.nombre.clone(),
                unidad: row.unidad.clone(),
                entrada: row.total_entrada,
                salida: row.total_salida,
            }),
        }
    }
    grouped.sort_by(|a, b| b.movimiento().total_cmp(&a.movimiento()));
    grouped.truncate(n);
    grouped
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardKpis {
    pub total_ingresos: f64,
    pub total_raciones: i64,
    /// Mean ingredient cost per ration across the cost rows, `0.0` with no rows.
    pub costo_promedio: f64,
    pub total_becados: i64,
}

impl DashboardKpis {
    pub fn from_data(
        ventas: &[VentasDiarias],
        costos: &[CostoPorRacion],
        asistencia: &[AsistenciaBecados],
    ) -> Self {
        let costo_promedio = if costos.is_empty() {
            0.0
        } else {
            costos.iter().map(|c| c.costo_promedio_insumo).sum::<f64>() / costos.len() as f64
        };
        Self {
            total_ingresos: ventas.iter().map(|v| v.ingresos_total).sum(),
            total_raciones: ventas.iter().map(|v| v.raciones_servidas).sum(),
            costo_promedio,
            total_becados: asistencia.iter().map(|a| a.raciones_becados).sum(),
        }
    }

    /// Queries the three views concurrently and aggregates them. Fails with
    /// the first error encountered.
    pub async fn fetch(bi: &BiClient, range: &DateRange) -> Result<Self, ApiError> {
        let (ventas, costos, asistencia) = tokio::try_join!(
            bi.ventas_diarias(range),
            bi.costos(range),
            bi.asistencia_becados(range),
        )?;
        tracing::debug!(
            "Dashboard rows: {} ventas, {} costos, {} asistencia",
            ventas.len(),
            costos.len(),
            asistencia.len()
        );
        Ok(Self::from_data(&ventas, &costos, &asistencia))
    }
}
