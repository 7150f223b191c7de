mod common;
pub use self::common::{PagedQuery, Query, QueryCommon, QueryPairs, SortDirection};

mod catalog;
pub use self::catalog::{InsumoQuery, InsumoSortBy, ItemMenuQuery, MenuQuery, PlatoQuery};

mod purchasing;
pub use self::purchasing::{CompraQuery, ProveedorQuery};

mod student;
pub use self::student::{BecaQuery, PagoQuery, ReservaQuery};

mod date_range;
pub use self::date_range::DateRange;
