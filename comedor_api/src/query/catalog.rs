use std::fmt;
use std::str::FromStr;

use crate::types::{Comida, Id};

use super::common::{PagedQuery, Query, QueryCommon, QueryPairs};

#[derive(Clone, Debug, Default)]
pub struct PlatoQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub categoria: Option<String>,
}

impl Query for PlatoQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_text("search", self.search.as_deref());
        pairs.push_text("categoria", self.categoria.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for PlatoQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl PlatoQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_categoria(mut self, categoria: &str) -> Self {
        self.categoria = Some(categoria.to_string());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct InsumoQuery {
    pub common: QueryCommon,
    pub unidad: Option<String>,
    /// Shelf life in days. Zero is a meaningful filter and is sent.
    pub vida_util_dias: Option<i64>,
}

impl Query for InsumoQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_text("unidad", self.unidad.as_deref());
        pairs.push_value("vidaUtilDias", self.vida_util_dias);
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for InsumoQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl InsumoQuery {
    pub fn with_unidad(mut self, unidad: &str) -> Self {
        self.unidad = Some(unidad.to_string());
        self
    }

    pub fn with_vida_util_dias(mut self, dias: i64) -> Self {
        self.vida_util_dias = Some(dias);
        self
    }
}

/// Columns the supplies list can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsumoSortBy {
    Nombre,
    Sku,
    Unidad,
    VidaUtilDias,
}

impl fmt::Display for InsumoSortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InsumoSortBy::Nombre => "nombre",
                InsumoSortBy::Sku => "sku",
                InsumoSortBy::Unidad => "unidad",
                InsumoSortBy::VidaUtilDias => "vidaUtilDias",
            }
        )
    }
}

impl FromStr for InsumoSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nombre" => Ok(InsumoSortBy::Nombre),
            "sku" => Ok(InsumoSortBy::Sku),
            "unidad" => Ok(InsumoSortBy::Unidad),
            "vidaUtilDias" => Ok(InsumoSortBy::VidaUtilDias),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MenuQuery {
    pub common: QueryCommon,
    pub fecha: Option<String>,
    pub comida: Option<Comida>,
}

impl Query for MenuQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_text("fecha", self.fecha.as_deref());
        pairs.push_value("comida", self.comida);
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for MenuQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl MenuQuery {
    pub fn with_fecha(mut self, fecha: &str) -> Self {
        self.fecha = Some(fecha.to_string());
        self
    }

    pub fn with_comida(mut self, comida: Comida) -> Self {
        self.comida = Some(comida);
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct ItemMenuQuery {
    pub common: QueryCommon,
    pub menu_id: Option<Id>,
    pub search: Option<String>,
}

impl Query for ItemMenuQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_id("menuId", self.menu_id.as_ref());
        pairs.push_text("search", self.search.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for ItemMenuQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ItemMenuQuery {
    pub fn with_menu_id(mut self, menu_id: impl Into<Id>) -> Self {
        self.menu_id = Some(menu_id.into());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}
