//! Domain primitives, ports, and services.
//!
//! Purpose: keep user semantics independent of HTTP and storage. Inbound
//! adapters depend on [`ports::UsersService`]; outbound adapters implement
//! [`ports::UserRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - User / UserId / UserDraft: the user record and its inputs.
//! - UserService: driving port implementation with identifier assignment.
//! - IdStrategy: how new identifiers are derived.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
mod id_strategy;
pub mod ports;
mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::id_strategy::{IdStrategy, IdStrategyParseError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;
