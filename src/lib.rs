//! Client and view-models for a CRUD list of heroes served over a JSON REST API.
//!
//! [`HeroService`] wraps the HTTP calls; every failure is logged to the shared
//! [`MessageService`] and downgraded to a fallback value. The
//! [`components`] module binds the service to route parameters and views.

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod messages;
pub mod routes;
pub mod service;
pub mod transport;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use messages::{MessageService, MessagesView};
pub use service::HeroService;
pub use transport::{Method, ReqwestTransport, Request, Transport};
pub use types::{Hero, NewHero};
