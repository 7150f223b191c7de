use serde::{Deserialize, Serialize};

use super::{Amount, Id};

/// A supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proveedor {
    pub id: Id,
    pub nombre: String,
    #[serde(default)]
    pub nit: Option<String>,
    #[serde(default)]
    pub contacto: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProveedorInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto: Option<String>,
}

/// Supplier as embedded in a purchase: either the expanded record or just its name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProveedorRef {
    Expanded { id: Id, nombre: String },
    Name(String),
}

impl ProveedorRef {
    pub fn nombre(&self) -> &str {
        match self {
            ProveedorRef::Expanded { nombre, .. } => nombre,
            ProveedorRef::Name(nombre) => nombre,
        }
    }
}

/// One line of a purchase invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompraItem {
    pub id: Id,
    pub insumo_id: Id,
    pub cantidad: f64,
    pub precio_unitario: f64,
    pub subtotal: f64,
}

/// A purchase from a supplier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compra {
    pub id: Id,
    #[serde(default)]
    pub nro_factura: Option<String>,
    pub total: Amount,
    pub fecha_compra: String,
    #[serde(default)]
    pub proveedor: Option<ProveedorRef>,
    #[serde(default)]
    pub items: Option<Vec<CompraItem>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompraInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_compra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nro_factura: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proveedor_ref_accepts_both_shapes() {
        let expanded: ProveedorRef =
            serde_json::from_str(r#"{"id": 4, "nombre": "Agro SA"}"#).unwrap();
        let name: ProveedorRef = serde_json::from_str(r#""Lacteos Sur""#).unwrap();
        assert_eq!(expanded.nombre(), "Agro SA");
        assert_eq!(name.nombre(), "Lacteos Sur");
    }
}
