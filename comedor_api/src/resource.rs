//! Resource modules: one typed CRUD mapping per backend entity.
//!
//! Every resource shares the same five operations, implemented once on
//! [`ResourceApi`]. A resource only declares its path and types through
//! [`Resource`]. Actions that exist on a single resource live in inherent
//! impls on `ResourceApi<'_, ThatResource>`.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    client::Client,
    errors::ApiError,
    query::{
        BecaQuery, CompraQuery, InsumoQuery, ItemMenuQuery, MenuQuery, PagoQuery, PlatoQuery,
        ProveedorQuery, Query, ReservaQuery,
    },
    types::{
        Beca, BecaInput, Compra, CompraInput, Insumo, InsumoInput, ItemMenu, ItemMenuInput, Menu,
        MenuInput, NewBeca, NewPago, Pago, PagoInput, Paginated, Plato, PlatoInput, Proveedor,
        ProveedorInput, Reserva, ReservaInput,
    },
};

/// Static description of a backend resource.
pub trait Resource {
    /// Collection path, e.g. `/platos`.
    const PATH: &'static str;
    type Entity: DeserializeOwned;
    type Query: Query;
    /// Payload for `create`. Required fields are non-optional in the type;
    /// nothing is validated at runtime.
    type Create: Serialize;
    /// Partial payload for `update`.
    type Update: Serialize;
}

/// Typed transport mapping for one resource, borrowing a shared [`Client`].
pub struct ResourceApi<'a, R> {
    client: &'a Client,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceApi<'a, R> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    fn item_path(id: impl fmt::Display) -> String {
        format!("{}/{}", R::PATH, id)
    }

    /// Whole collection, unwrapped from the list envelope.
    pub async fn get_all(&self) -> Result<Vec<R::Entity>, ApiError> {
        self.client.get_data(R::PATH).await
    }

    /// One page of the collection, with its pagination metadata.
    pub async fn get_paginated(
        &self,
        query: &R::Query,
    ) -> Result<Paginated<Vec<R::Entity>>, ApiError> {
        self.client
            .get_with_meta(&query.to_endpoint(R::PATH))
            .await
    }

    pub async fn get_by_id(&self, id: impl fmt::Display) -> Result<R::Entity, ApiError> {
        self.client.get(&Self::item_path(id)).await
    }

    pub async fn create(&self, payload: &R::Create) -> Result<R::Entity, ApiError> {
        self.client.post(R::PATH, Some(payload)).await
    }

    pub async fn update(
        &self,
        id: impl fmt::Display,
        payload: &R::Update,
    ) -> Result<R::Entity, ApiError> {
        self.client.put(&Self::item_path(id), payload).await
    }

    pub async fn delete(&self, id: impl fmt::Display) -> Result<(), ApiError> {
        self.client.delete(&Self::item_path(id)).await
    }
}

/// Declares a marker type implementing [`Resource`].
macro_rules! resource {
    ($(#[$doc:meta])* $name:ident, $path:literal, $entity:ty, $query:ty, $create:ty, $update:ty) => {
        $(#[$doc])*
        pub struct $name;

        impl Resource for $name {
            const PATH: &'static str = $path;
            type Entity = $entity;
            type Query = $query;
            type Create = $create;
            type Update = $update;
        }
    };
}

resource!(
    /// Dishes.
    Platos, "/platos", Plato, PlatoQuery, PlatoInput, PlatoInput
);
resource!(
    /// Supplies.
    Insumos, "/insumos", Insumo, InsumoQuery, InsumoInput, InsumoInput
);
resource!(Menus, "/menus", Menu, MenuQuery, MenuInput, MenuInput);
resource!(
    /// Dishes offered on a menu.
    ItemsMenu, "/items-menu", ItemMenu, ItemMenuQuery, ItemMenuInput, ItemMenuInput
);
resource!(
    /// Purchases.
    Compras, "/compras", Compra, CompraQuery, CompraInput, CompraInput
);
resource!(
    /// Suppliers.
    Proveedores, "/proveedores", Proveedor, ProveedorQuery, ProveedorInput, ProveedorInput
);
resource!(
    /// Reservations.
    Reservas, "/reservas", Reserva, ReservaQuery, ReservaInput, ReservaInput
);
resource!(
    /// Payments.
    Pagos, "/pagos", Pago, PagoQuery, NewPago, PagoInput
);
resource!(
    /// Scholarships.
    Becas, "/becas", Beca, BecaQuery, NewBeca, BecaInput
);

impl ResourceApi<'_, Reservas> {
    /// Marks a reservation as confirmed.
    pub async fn confirmar(&self, id: impl fmt::Display) -> Result<Reserva, ApiError> {
        self.client
            .post::<Reserva, ()>(&format!("{}/{}/confirmar", Reservas::PATH, id), None)
            .await
    }

    /// Cancels a reservation.
    pub async fn cancelar(&self, id: impl fmt::Display) -> Result<Reserva, ApiError> {
        self.client
            .post::<Reserva, ()>(&format!("{}/{}/cancelar", Reservas::PATH, id), None)
            .await
    }

    /// All reservations of one person.
    pub async fn get_by_usuario(
        &self,
        usuario_id: impl fmt::Display,
    ) -> Result<Vec<Reserva>, ApiError> {
        self.client
            .get(&format!("{}/usuario/{}", Reservas::PATH, usuario_id))
            .await
    }
}

impl ResourceApi<'_, Insumos> {
    /// Supplies below their minimum stock.
    pub async fn get_bajo_stock(&self) -> Result<Vec<Insumo>, ApiError> {
        self.client
            .get(&format!("{}/bajo-stock", Insumos::PATH))
            .await
    }
}

impl ResourceApi<'_, Menus> {
    /// Menus of the current week.
    pub async fn get_semanal(&self) -> Result<Vec<Menu>, ApiError> {
        self.client.get(&format!("{}/semanal", Menus::PATH)).await
    }
}

impl Client {
    pub fn platos(&self) -> ResourceApi<'_, Platos> {
        ResourceApi::new(self)
    }

    pub fn insumos(&self) -> ResourceApi<'_, Insumos> {
        ResourceApi::new(self)
    }

    pub fn menus(&self) -> ResourceApi<'_, Menus> {
        ResourceApi::new(self)
    }

    pub fn items_menu(&self) -> ResourceApi<'_, ItemsMenu> {
        ResourceApi::new(self)
    }

    pub fn compras(&self) -> ResourceApi<'_, Compras> {
        ResourceApi::new(self)
    }

    pub fn proveedores(&self) -> ResourceApi<'_, Proveedores> {
        ResourceApi::new(self)
    }

    pub fn reservas(&self) -> ResourceApi<'_, Reservas> {
        ResourceApi::new(self)
    }

    pub fn pagos(&self) -> ResourceApi<'_, Pagos> {
        ResourceApi::new(self)
    }

    pub fn becas(&self) -> ResourceApi<'_, Becas> {
        ResourceApi::new(self)
    }
}
