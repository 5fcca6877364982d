//! Client side of the API: typed REST access plus per-collection caches that
//! UI code can observe.

pub mod api;
pub mod state;
pub mod store;

pub use api::{ClientError, EmployeeApi, HttpRecordApi, Record, RecordApi, VisitorApi};
pub use state::StateContainer;
pub use store::{ClientState, ClientStore};
