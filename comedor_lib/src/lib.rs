//! Consumer layer for the cafeteria client: configuration, the fetch hook and
//! its render states, dashboard aggregates, formatting, input validation and
//! the point-of-sale cart.
//!
//! Re-exports the `comedor_api` crate so consumers depend on a single crate.

pub mod cart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod format;
pub mod state;
pub mod validation;

pub use comedor_api;
pub use comedor_api::types;
pub use comedor_api::{ApiError, ApiErrorKind, BiClient, Client, DateRange, PagedQuery, Query};

pub use cart::{CartLine, PosCart};
pub use config::{Config, ConfigError};
pub use dashboard::{rotacion_top, DashboardKpis, RotacionResumen};
pub use error::ComedorError;
pub use fetch::{producer, FetchHook, Producer};
pub use state::{ApiState, HasRows, Phase};
