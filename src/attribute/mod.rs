//! # Semantic Attributes
//!
//! The registry of semantic attributes, grouped into one file per
//! namespace and re-exported flat so every constant is reachable as
//! `attribute::NAME`. The [`trace`](crate::trace) and
//! [`resource`](crate::resource) modules re-export the subsets
//! recommended for spans and resources.
//!
//! Each attribute contributes up to three items:
//!
//! - a [`Key`](opentelemetry::Key) constant holding the dotted key string,
//! - a constructor function wrapping a typed value into a
//!   [`KeyValue`](opentelemetry::KeyValue),
//! - for attributes with a closed set of permitted values, a `*_values`
//!   module of string (or integer) constants.

#[cfg(feature = "semconv_experimental")]
mod aws;
mod client;
#[cfg(feature = "semconv_experimental")]
mod cloud;
#[cfg(feature = "semconv_experimental")]
mod code;
#[cfg(feature = "semconv_experimental")]
mod container;
#[cfg(feature = "semconv_experimental")]
mod db;
mod error;
mod exception;
#[cfg(feature = "semconv_experimental")]
mod faas;
#[cfg(feature = "semconv_experimental")]
mod gen_ai;
#[cfg(feature = "semconv_experimental")]
mod host;
mod http;
#[cfg(feature = "semconv_experimental")]
mod k8s;
#[cfg(feature = "semconv_experimental")]
mod messaging;
mod network;
#[cfg(feature = "semconv_experimental")]
mod os;
mod otel;
#[cfg(feature = "semconv_experimental")]
mod process;
#[cfg(feature = "semconv_experimental")]
mod rpc;
mod server;
mod service;
mod telemetry;
mod url;
mod user_agent;

#[cfg(feature = "semconv_experimental")]
pub use self::aws::*;
pub use self::client::*;
#[cfg(feature = "semconv_experimental")]
pub use self::cloud::*;
#[cfg(feature = "semconv_experimental")]
pub use self::code::*;
#[cfg(feature = "semconv_experimental")]
pub use self::container::*;
#[cfg(feature = "semconv_experimental")]
pub use self::db::*;
pub use self::error::*;
pub use self::exception::*;
#[cfg(feature = "semconv_experimental")]
pub use self::faas::*;
#[cfg(feature = "semconv_experimental")]
pub use self::gen_ai::*;
#[cfg(feature = "semconv_experimental")]
pub use self::host::*;
pub use self::http::*;
#[cfg(feature = "semconv_experimental")]
pub use self::k8s::*;
#[cfg(feature = "semconv_experimental")]
pub use self::messaging::*;
pub use self::network::*;
#[cfg(feature = "semconv_experimental")]
pub use self::os::*;
pub use self::otel::*;
#[cfg(feature = "semconv_experimental")]
pub use self::process::*;
#[cfg(feature = "semconv_experimental")]
pub use self::rpc::*;
pub use self::server::*;
pub use self::service::*;
pub use self::telemetry::*;
pub use self::url::*;
pub use self::user_agent::*;
