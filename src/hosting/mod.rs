//! Game directory, service contracts, and the HTTP/WebSocket adapter.
//!
//! ## Core Types
//!
//! - [`Directory`]: Creates games and routes requests to them by id
//! - [`AccountService`] / [`GameService`]: One trait per RPC contract
//! - [`Server`]: Concrete implementation of both services
//!
//! ## Transport (feature `server`)
//!
//! - [`Config`]: Command line and environment configuration
//! - [`Credential`]: Extracts the `authorization` header
//! - [`Socket`]: WebSocket session as an event [`Sink`](crate::gameroom::Sink)
mod directory;
mod dto;
mod server;
mod service;

pub use directory::*;
pub use dto::*;
pub use server::*;
pub use service::*;

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
mod socket;

#[cfg(feature = "server")]
pub use config::*;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
#[cfg(feature = "server")]
pub use socket::*;
