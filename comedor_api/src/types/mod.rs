mod meta;
pub use self::meta::{Paginated, PaginationMeta};

mod common;
pub use self::common::{Amount, Id};

mod catalog;
pub use self::catalog::{
    Comida, Insumo, InsumoInput, ItemMenu, ItemMenuInput, Menu, MenuInput, Plato, PlatoInput,
};

mod purchasing;
pub use self::purchasing::{Compra, CompraInput, CompraItem, Proveedor, ProveedorInput, ProveedorRef};

mod student;
pub use self::student::{
    Beca, BecaInput, EstadoPago, NewBeca, NewPago, Pago, PagoInput, Reserva, ReservaInput,
};

mod bi;
pub use self::bi::{AsistenciaBecados, CostoPorRacion, RotacionInsumos, VentasDiarias};
