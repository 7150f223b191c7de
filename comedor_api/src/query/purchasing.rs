use crate::types::Id;

use super::common::{PagedQuery, Query, QueryCommon, QueryPairs};

#[derive(Clone, Debug, Default)]
pub struct CompraQuery {
    pub common: QueryCommon,
    pub proveedor_id: Option<Id>,
    pub fecha_compra: Option<String>,
    pub nro_factura: Option<String>,
    pub search: Option<String>,
}

impl Query for CompraQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_id("proveedorId", self.proveedor_id.as_ref());
        pairs.push_text("fechaCompra", self.fecha_compra.as_deref());
        pairs.push_text("nroFactura", self.nro_factura.as_deref());
        pairs.push_text("search", self.search.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for CompraQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl CompraQuery {
    pub fn with_proveedor_id(mut self, proveedor_id: impl Into<Id>) -> Self {
        self.proveedor_id = Some(proveedor_id.into());
        self
    }

    pub fn with_fecha_compra(mut self, fecha_compra: &str) -> Self {
        self.fecha_compra = Some(fecha_compra.to_string());
        self
    }

    pub fn with_nro_factura(mut self, nro_factura: &str) -> Self {
        self.nro_factura = Some(nro_factura.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProveedorQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub nombre: Option<String>,
    pub nit: Option<String>,
    pub contacto: Option<String>,
}

impl Query for ProveedorQuery {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = QueryPairs::new();
        self.common.add_paging(&mut pairs);
        pairs.push_text("search", self.search.as_deref());
        pairs.push_text("nombre", self.nombre.as_deref());
        pairs.push_text("nit", self.nit.as_deref());
        pairs.push_text("contacto", self.contacto.as_deref());
        self.common.add_sorting(&mut pairs);
        pairs.into_vec()
    }
}

impl PagedQuery for ProveedorQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl ProveedorQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_nombre(mut self, nombre: &str) -> Self {
        self.nombre = Some(nombre.to_string());
        self
    }

    pub fn with_nit(mut self, nit: &str) -> Self {
        self.nit = Some(nit.to_string());
        self
    }

    pub fn with_contacto(mut self, contacto: &str) -> Self {
        self.contacto = Some(contacto.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{CompraQuery, PagedQuery, ProveedorQuery, Query};

    #[test]
    fn compra_query_skips_blank_supplier() {
        let query = CompraQuery::default()
            .with_proveedor_id(0)
            .with_nro_factura("F-001");
        assert_eq!(query.to_query_string(), "nroFactura=F-001");
    }

    #[test]
    fn proveedor_query_key_order() {
        let query = ProveedorQuery::default()
            .with_contacto("ventas@agro.com")
            .with_nombre("Agro")
            .with_limit(5);
        assert_eq!(
            query.to_query_string(),
            "limit=5&nombre=Agro&contacto=ventas%40agro.com"
        );
    }
}
