use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Amount, Id};

/// A dish that can be placed on a menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plato {
    pub id: Id,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub precio: Option<Amount>,
    #[serde(default)]
    pub categoria: Option<String>,
    #[serde(default)]
    pub disponible: Option<bool>,
    #[serde(default)]
    pub imagen: Option<String>,
}

/// Create/update payload for [`Plato`]. Unset fields are not serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
}

/// A stock item (ingredient or consumable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insumo {
    pub id: Id,
    pub nombre: String,
    pub unidad: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub vida_util_dias: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsumoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vida_util_dias: Option<i64>,
}

/// Meal slot of a menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Comida {
    Desayuno,
    Almuerzo,
    Cena,
}

impl fmt::Display for Comida {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Comida::Desayuno => "DESAYUNO",
                Comida::Almuerzo => "ALMUERZO",
                Comida::Cena => "CENA",
            }
        )
    }
}

impl FromStr for Comida {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DESAYUNO" => Ok(Comida::Desayuno),
            "ALMUERZO" => Ok(Comida::Almuerzo),
            "CENA" => Ok(Comida::Cena),
            _ => Err(()),
        }
    }
}

/// A menu for one date and meal slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Id,
    pub fecha: String,
    pub comida: Comida,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub platos: Option<Vec<Plato>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comida: Option<Comida>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// A dish offered on a specific menu, with its price and planned rations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMenu {
    pub id: Id,
    #[serde(default)]
    pub menu_id: Option<Id>,
    #[serde(default)]
    pub plato_id: Option<Id>,
    #[serde(default)]
    pub precio: Option<Amount>,
    #[serde(default)]
    pub raciones_planeadas: Option<i64>,
    #[serde(default)]
    pub raciones_disponibles: Option<i64>,
    #[serde(default)]
    pub plato: Option<Plato>,
    #[serde(default)]
    pub menu: Option<Menu>,
}

impl ItemMenu {
    /// Display name, taken from the embedded dish when present.
    pub fn nombre(&self) -> &str {
        self.plato
            .as_ref()
            .map(|p| p.nombre.as_str())
            .unwrap_or("Unnamed")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMenuInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plato_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raciones_planeadas: Option<i64>,
}
