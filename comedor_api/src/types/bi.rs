//! Rows of the read-only BI aggregation views.

use serde::{Deserialize, Serialize};

/// Daily rations served and revenue, per meal type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VentasDiarias {
    pub fecha: String,
    pub tipo_comida: String,
    pub raciones_servidas: i64,
    pub raciones_becados: i64,
    pub raciones_regulares: i64,
    pub ingresos_total: f64,
}

/// Ingredient cost per ration, per day and meal type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CostoPorRacion {
    pub fecha: String,
    pub tipo_comida: String,
    pub raciones_servidas: i64,
    pub costo_promedio_insumo: f64,
    pub costo_total_insumos: f64,
}

/// Monthly stock movement of one supply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotacionInsumos {
    pub id: i64,
    pub nombre: String,
    pub unidad: String,
    pub mes: String,
    pub total_entrada: f64,
    pub total_salida: f64,
    pub variacion_neta: f64,
}

/// Scholarship rations served against active scholarships.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AsistenciaBecados {
    pub fecha: String,
    pub tipo_comida: String,
    pub raciones_becados: i64,
    pub becas_activas: i64,
}
