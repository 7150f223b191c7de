//! Point-of-sale cart used at the counter. Lives only as long as the
//! staff session that owns it.

use comedor_api::types::{Amount, Id, ItemMenu, ReservaInput};
use serde::Serialize;

use crate::error::ComedorError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartLine {
    pub item_id: Id,
    pub nombre: String,
    pub precio: f64,
    pub cantidad: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.precio * f64::from(self.cantidad)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PosCart {
    lines: Vec<CartLine>,
}

impl PosCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one ration of `item`, merging with an existing line. Refused when
    /// the item has no rations left or the line already holds all of them.
    pub fn add(&mut self, item: &ItemMenu) -> Result<&CartLine, ComedorError> {
        let available = item.raciones_disponibles;
        if matches!(available, Some(n) if n <= 0) {
            return Err(ComedorError::InvalidInput(format!(
                "no rations left for '{}'",
                item.nombre()
            )));
        }

        let idx = match self.lines.iter().position(|l| l.item_id == item.id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                if matches!(available, Some(n) if i64::from(line.cantidad) >= n) {
                    return Err(ComedorError::InvalidInput(format!(
                        "only {} rations available for '{}'",
                        line.cantidad, line.nombre
                    )));
                }
                line.cantidad += 1;
                idx
            }
            None => {
                self.lines.push(CartLine {
                    item_id: item.id.clone(),
                    nombre: item.nombre().to_string(),
                    precio: item.precio.as_ref().map(Amount::value).unwrap_or(0.0),
                    cantidad: 1,
                });
                self.lines.len() - 1
            }
        };
        Ok(&self.lines[idx])
    }

    /// Drops the whole line for `item_id`. Returns whether it was present.
    pub fn remove(&mut self, item_id: &Id) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.item_id != item_id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// One reservation payload per ration in the cart, for `persona_id`.
    pub fn to_reservas(&self, persona_id: &Id) -> Vec<ReservaInput> {
        self.lines
            .iter()
            .flat_map(|line| {
                (0..line.cantidad).map(move |_| ReservaInput {
                    persona_id: Some(persona_id.clone()),
                    item_menu_id: Some(line.item_id.clone()),
                    estado: None,
                })
            })
            .collect()
    }
}
