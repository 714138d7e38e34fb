//! # OpenTelemetry Semantic Conventions
//!
//! Semantic conventions are agreed standardized naming patterns for the
//! attributes, resources, and metrics emitted by instrumented code. This
//! crate is the centralized catalog of those names: every constant here
//! carries the exact dotted key string defined by the [semantic
//! conventions registry], so downstream consumers can match on them.
//!
//! [semantic conventions registry]: https://opentelemetry.io/docs/concepts/semantic-conventions/
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry::KeyValue;
//! use otel_semconv as semconv;
//!
//! let attributes = vec![
//!     KeyValue::new(semconv::trace::SERVER_ADDRESS, "example.com"),
//!     semconv::attribute::server_port(8080),
//!     semconv::attribute::http_response_status_code(200),
//! ];
//! assert_eq!(attributes[0].key.as_str(), "server.address");
//! ```
//!
//! Attributes that are not yet stable in the registry are gated behind the
//! `semconv_experimental` feature and may change between releases.
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]

pub mod attribute;
pub mod metric;
pub mod resource;
pub mod trace;

/// The schema URL of the semantic conventions release this catalog is
/// drawn from.
pub const SCHEMA_URL: &str = "https://opentelemetry.io/schemas/1.30.0";
