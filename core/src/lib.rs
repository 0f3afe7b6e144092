//! Data-access layer for the heroes REST API.
//!
//! # Overview
//! `HeroClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `HeroService` pairs
//! it with an async [`Transport`] and a [`MessageSink`] to offer the five
//! CRUD operations, each logged once and, in its plain form, never failing.
//!
//! # Design
//! - `HeroClient` is stateless: it holds only the collection URL.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - Transport and message sink are injected, never looked up globally.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod message;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{HeroClient, DEFAULT_RESOURCE_PATH};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use message::{MessageLog, MessageSink, TracingSink};
pub use service::HeroService;
pub use transport::{ReqwestTransport, Transport};
pub use types::{Hero, HeroId, NewHero};
