//! Typed client for the university cafeteria REST backend and its BI routes.

mod bi;
mod client;
mod errors;
mod query;
mod resource;
mod response;
pub mod types;
pub use self::bi::{BiClient, DEFAULT_BI_URL};
pub use self::client::{Client, Reply, RequestOptions, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use self::errors::{ApiError, ApiErrorKind};
pub use self::query::{
    BecaQuery, CompraQuery, DateRange, InsumoQuery, InsumoSortBy, ItemMenuQuery, MenuQuery,
    PagedQuery, PagoQuery, PlatoQuery, ProveedorQuery, Query, QueryCommon, QueryPairs,
    ReservaQuery, SortDirection,
};
pub use self::resource::{
    Becas, Compras, Insumos, ItemsMenu, Menus, Pagos, Platos, Proveedores, Reservas, Resource,
    ResourceApi,
};
pub use self::response::ContentKind;
pub use reqwest::Method;
