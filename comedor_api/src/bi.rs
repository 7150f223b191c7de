//! Client for the BI routes that expose the read-only aggregation views.

use serde::de::DeserializeOwned;

use crate::{
    client::Client,
    errors::ApiError,
    query::{DateRange, Query},
    types::{AsistenciaBecados, CostoPorRacion, RotacionInsumos, VentasDiarias},
};

/// Base URL of the BI routes during local development.
pub const DEFAULT_BI_URL: &str = "http://localhost:3000";

/// Reads the BI views. Every route takes an optional date range and returns
/// a bare array ordered ascending by the view's date column.
#[derive(Clone, Debug)]
pub struct BiClient {
    inner: Client,
}

impl BiClient {
    pub fn new(inner: Client) -> Self {
        Self { inner }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        view: &str,
        range: &DateRange,
    ) -> Result<Vec<T>, ApiError> {
        let path = format!("/api/bi/{}", view);
        self.inner.get(&range.to_endpoint(&path)).await
    }

    /// Daily sales per meal type.
    pub async fn ventas_diarias(&self, range: &DateRange) -> Result<Vec<VentasDiarias>, ApiError> {
        self.fetch("ventas-diarias", range).await
    }

    /// Ingredient cost per ration.
    pub async fn costos(&self, range: &DateRange) -> Result<Vec<CostoPorRacion>, ApiError> {
        self.fetch("costos", range).await
    }

    /// Monthly supply rotation. Filtered on the month column.
    pub async fn rotacion_insumos(
        &self,
        range: &DateRange,
    ) -> Result<Vec<RotacionInsumos>, ApiError> {
        self.fetch("rotacion-insumos", range).await
    }

    /// Scholarship attendance.
    pub async fn asistencia_becados(
        &self,
        range: &DateRange,
    ) -> Result<Vec<AsistenciaBecados>, ApiError> {
        self.fetch("asistencia-becados", range).await
    }
}
