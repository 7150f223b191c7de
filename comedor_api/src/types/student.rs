use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Amount, Id, ItemMenu};

/// A student's reservation of a menu item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reserva {
    pub id: Id,
    pub estado: String,
    #[serde(default)]
    pub creado_en: Option<String>,
    #[serde(default)]
    pub persona_id: Option<Id>,
    #[serde(default)]
    pub item_menu_id: Option<Id>,
    #[serde(default)]
    pub item_menu: Option<ItemMenu>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_menu_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

/// Payment lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EstadoPago {
    Pendiente,
    Aprobado,
    Rechazado,
    Anulado,
}

impl fmt::Display for EstadoPago {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EstadoPago::Pendiente => "PENDIENTE",
                EstadoPago::Aprobado => "APROBADO",
                EstadoPago::Rechazado => "RECHAZADO",
                EstadoPago::Anulado => "ANULADO",
            }
        )
    }
}

impl FromStr for EstadoPago {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PENDIENTE" => Ok(EstadoPago::Pendiente),
            "APROBADO" => Ok(EstadoPago::Aprobado),
            "RECHAZADO" => Ok(EstadoPago::Rechazado),
            "ANULADO" => Ok(EstadoPago::Anulado),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    pub id: Id,
    pub persona_id: Id,
    pub monto: Amount,
    #[serde(default)]
    pub moneda: Option<String>,
    #[serde(default)]
    pub proveedor: Option<String>,
    #[serde(default)]
    pub referencia: Option<String>,
    pub estado: EstadoPago,
    #[serde(default)]
    pub creado_en: Option<String>,
}

/// Payload for creating a payment; person and amount are mandatory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPago {
    pub persona_id: Id,
    pub monto: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoPago>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<EstadoPago>,
}

/// A meal scholarship granting a daily ration quota.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beca {
    pub id: Id,
    #[serde(default)]
    pub persona_id: Option<Id>,
    pub tipo: String,
    pub estado: String,
    pub vigente_desde: String,
    #[serde(default)]
    pub vigente_hasta: Option<String>,
    pub cuota_diaria: i64,
}

/// Payload for creating a scholarship. Every field the backend requires is
/// non-optional here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBeca {
    pub persona_id: Id,
    pub tipo: String,
    pub estado: String,
    pub vigente_desde: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vigente_hasta: Option<String>,
    pub cuota_diaria: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BecaInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vigente_desde: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vigente_hasta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuota_diaria: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_pago_parses_case_insensitively() {
        assert_eq!("aprobado".parse::<EstadoPago>(), Ok(EstadoPago::Aprobado));
        assert_eq!(EstadoPago::Anulado.to_string(), "ANULADO");
        assert!("PAGADO".parse::<EstadoPago>().is_err());
    }

    #[test]
    fn new_beca_serializes_camel_case() {
        let beca = NewBeca {
            persona_id: Id::from("p-1"),
            tipo: "COMPLETA".to_string(),
            estado: "ACTIVA".to_string(),
            vigente_desde: "2025-03-01".to_string(),
            vigente_hasta: None,
            cuota_diaria: 2,
        };
        let json = serde_json::to_value(&beca).unwrap();
        assert_eq!(json["personaId"], "p-1");
        assert_eq!(json["vigenteDesde"], "2025-03-01");
        assert_eq!(json["cuotaDiaria"], 2);
        assert!(json.get("vigenteHasta").is_none());
    }
}
