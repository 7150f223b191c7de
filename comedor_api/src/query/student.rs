use crate::types::{EstadoPago, Id};

use super::common::{PagedQuery, Query, QueryCommon, QueryPairs};

#[derive(Clone, Debug, Default)]
pub struct ReservaQuery {
    pub common: QueryCommon,
    pub persona_id: Option<Id>,
    pub item_menu_id: Option<Id>,
    pub estado: Option<String>,
    pub creado_en: Option<String>,
}

impl Query for ReservaQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_id("personaId", self.persona_id.as_ref());
        pairs.push_id("itemMenuId", self.item_menu_id.as_ref());
        pairs.push_text("estado", self.estado.as_deref());
        pairs.push_text("creadoEn", self.creado_en.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for ReservaQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ReservaQuery {
    pub fn with_persona_id(mut self, persona_id: impl Into<Id>) -> Self {
        self.persona_id = Some(persona_id.into());
        self
    }

    pub fn with_item_menu_id(mut self, item_menu_id: impl Into<Id>) -> Self {
        self.item_menu_id = Some(item_menu_id.into());
        self
    }

    pub fn with_estado(mut self, estado: &str) -> Self {
        self.estado = Some(estado.to_string());
        self
    }

    pub fn with_creado_en(mut self, creado_en: &str) -> Self {
        self.creado_en = Some(creado_en.to_string());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct PagoQuery {
    pub common: QueryCommon,
    pub persona_id: Option<Id>,
    pub estado: Option<EstadoPago>,
    pub proveedor: Option<String>,
    pub referencia: Option<String>,
    pub moneda: Option<String>,
    pub search: Option<String>,
}

impl Query for PagoQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_id("personaId", self.persona_id.as_ref());
        pairs.push_value("estado", self.estado);
        pairs.push_text("proveedor", self.proveedor.as_deref());
        pairs.push_text("referencia", self.referencia.as_deref());
        pairs.push_text("moneda", self.moneda.as_deref());
        pairs.push_text("search", self.search.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for PagoQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl PagoQuery {
    pub fn with_persona_id(mut self, persona_id: impl Into<Id>) -> Self {
        self.persona_id = Some(persona_id.into());
        self
    }

    pub fn with_estado(mut self, estado: EstadoPago) -> Self {
        self.estado = Some(estado);
        self
    }

    pub fn with_proveedor(mut self, proveedor: &str) -> Self {
        self.proveedor = Some(proveedor.to_string());
        self
    }

    pub fn with_referencia(mut self, referencia: &str) -> Self {
        self.referencia = Some(referencia.to_string());
        self
    }

    pub fn with_moneda(mut self, moneda: &str) -> Self {
        self.moneda = Some(moneda.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct BecaQuery {
    pub common: QueryCommon,
    pub persona_id: Option<Id>,
    pub estado: Option<String>,
    pub tipo: Option<String>,
    pub vigente_desde: Option<String>,
    pub vigente_hasta: Option<String>,
    pub search: Option<String>,
}

impl Query for BecaQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_id("personaId", self.persona_id.as_ref());
        pairs.push_text("estado", self.estado.as_deref());
        pairs.push_text("tipo", self.tipo.as_deref());
        pairs.push_text("vigenteDesde", self.vigente_desde.as_deref());
        pairs.push_text("vigenteHasta", self.vigente_hasta.as_deref());
        pairs.push_text("search", self.search.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for BecaQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl BecaQuery {
    pub fn with_persona_id(mut self, persona_id: impl Into<Id>) -> Self {
        self.persona_id = Some(persona_id.into());
        self
    }

    pub fn with_estado(mut self, estado: &str) -> Self {
        self.estado = Some(estado.to_string());
        self
    }

    pub fn with_tipo(mut self, tipo: &str) -> Self {
        self.tipo = Some(tipo.to_string());
        self
    }

    pub fn with_vigente_desde(mut self, fecha: &str) -> Self {
        self.vigente_desde = Some(fecha.to_string());
        self
    }

    pub fn with_vigente_hasta(mut self, fecha: &str) -> Self {
        self.vigente_hasta = Some(fecha.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}
