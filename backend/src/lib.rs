//! Users API library modules.
//!
//! Layers follow a hexagonal layout: [`domain`] owns the user model, ports,
//! and service; [`inbound`] adapts HTTP onto the driving port; [`outbound`]
//! provides repository adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
