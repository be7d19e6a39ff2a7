//! Console layer: everything the management screens need that is not
//! rendering. A typed client for the backend, the session context,
//! per-page list state, and the dashboard fan-out.

pub mod dashboard;
pub mod http;
pub mod lookup;
pub mod resources;
pub mod session;
pub mod view;

pub use http::{ApiClient, ClientError};
pub use session::{SessionContext, SessionStore};
