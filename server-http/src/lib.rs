pub mod environment;
pub mod handlers;
pub mod identity;
pub mod routes;
pub mod server;
pub mod state;

// Re-export key types
pub use environment::{Clock, HostnameSource, SystemClock, SystemHostname};
pub use identity::ServiceIdentity;
pub use routes::build_router;
pub use server::{bind, run, serve};
pub use state::AppState;
